//! OOXML part serialization
//!
//! Produces the XML text of each part in a `.docx` package from a
//! [`Document`]. Only the subset of WordprocessingML the report needs is
//! covered.

use super::{
    Alignment, Block, CoreProperties, Document, PageSetup, Paragraph, PictureRun, Run, Table,
    TextRun,
};
use chrono::{DateTime, Utc};
use std::fmt::Write;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_NUMBERING: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Escape text for element content and attribute values.
///
/// Characters outside the XML 1.0 `Char` production are dropped.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}

/// `word/document.xml`
pub fn document_xml(doc: &Document) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    let _ = write!(
        xml,
        r#"<w:document xmlns:w="{}" xmlns:r="{}" xmlns:wp="{}" xmlns:a="{}" xmlns:pic="{}"><w:body>"#,
        NS_W, NS_R, NS_WP, NS_A, NS_PIC
    );

    for block in &doc.body {
        match block {
            Block::Paragraph(p) => write_paragraph(&mut xml, p),
            Block::Table(t) => write_table(&mut xml, t, &doc.page),
            Block::PageBreak => xml.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#),
        }
    }

    write_section(&mut xml, &doc.page);
    xml.push_str("</w:body></w:document>");
    xml
}

fn write_paragraph(xml: &mut String, p: &Paragraph) {
    xml.push_str("<w:p>");

    let has_props =
        p.style.is_some() || p.space_after_pt.is_some() || p.alignment != Alignment::Left;
    if has_props {
        xml.push_str("<w:pPr>");
        if let Some(style) = p.style {
            let _ = write!(xml, r#"<w:pStyle w:val="{}"/>"#, style.style_id());
        }
        if let Some(after) = p.space_after_pt {
            let _ = write!(xml, r#"<w:spacing w:after="{}"/>"#, (after * 20.0).round() as u32);
        }
        if p.alignment == Alignment::Center {
            xml.push_str(r#"<w:jc w:val="center"/>"#);
        }
        xml.push_str("</w:pPr>");
    }

    for run in &p.runs {
        match run {
            Run::Text(t) => write_text_run(xml, t),
            Run::Picture(pic) => write_picture_run(xml, pic),
        }
    }

    xml.push_str("</w:p>");
}

fn write_text_run(xml: &mut String, run: &TextRun) {
    xml.push_str("<w:r>");

    if run.bold || run.italic || run.color.is_some() || run.size_pt.is_some() {
        xml.push_str("<w:rPr>");
        if run.bold {
            xml.push_str("<w:b/><w:bCs/>");
        }
        if run.italic {
            xml.push_str("<w:i/><w:iCs/>");
        }
        if let Some(color) = run.color {
            let _ = write!(xml, r#"<w:color w:val="{}"/>"#, color.hex());
        }
        if let Some(size) = run.size_pt {
            // half-points
            let half = (size * 2.0).round() as u32;
            let _ = write!(xml, r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#, half);
        }
        xml.push_str("</w:rPr>");
    }

    let mut pending = String::new();
    let mut chars = run.text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\t' => {
                flush_text(xml, &mut pending);
                xml.push_str("<w:tab/>");
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                flush_text(xml, &mut pending);
                xml.push_str("<w:br/>");
            }
            c => pending.push(c),
        }
    }
    flush_text(xml, &mut pending);

    xml.push_str("</w:r>");
}

fn flush_text(xml: &mut String, pending: &mut String) {
    if !pending.is_empty() {
        let _ = write!(xml, r#"<w:t xml:space="preserve">{}</w:t>"#, escape(pending));
        pending.clear();
    }
}

fn write_picture_run(xml: &mut String, pic: &PictureRun) {
    let name = escape(&pic.name);
    let _ = write!(
        xml,
        concat!(
            r#"<w:r><w:drawing><wp:inline distT="0" distB="0" distL="0" distR="0">"#,
            r#"<wp:extent cx="{cx}" cy="{cy}"/>"#,
            r#"<wp:docPr id="{id}" name="Picture {id}"/>"#,
            r#"<wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect="1"/></wp:cNvGraphicFramePr>"#,
            r#"<a:graphic><a:graphicData uri="{pic_ns}"><pic:pic>"#,
            r#"<pic:nvPicPr><pic:cNvPr id="0" name="{name}"/><pic:cNvPicPr/></pic:nvPicPr>"#,
            r#"<pic:blipFill><a:blip r:embed="{rel}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>"#,
            r#"<pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>"#,
            r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr>"#,
            r#"</pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r>"#
        ),
        cx = pic.width_emu,
        cy = pic.height_emu,
        id = pic.doc_pr_id,
        pic_ns = NS_PIC,
        name = name,
        rel = pic.rel_id,
    );
}

fn write_table(xml: &mut String, table: &Table, page: &PageSetup) {
    let columns = table.column_count().max(1);
    let text_width = page.width.saturating_sub(page.margin_left + page.margin_right);
    let column_width = text_width / columns as u32;

    xml.push_str(r#"<w:tbl><w:tblPr><w:tblStyle w:val="TableGrid"/>"#);
    let _ = write!(xml, r#"<w:tblW w:w="{}" w:type="dxa"/>"#, column_width * columns as u32);
    if table.alignment == Alignment::Center {
        xml.push_str(r#"<w:jc w:val="center"/>"#);
    }
    xml.push_str(r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#);
    xml.push_str("</w:tblPr><w:tblGrid>");
    for _ in 0..columns {
        let _ = write!(xml, r#"<w:gridCol w:w="{}"/>"#, column_width);
    }
    xml.push_str("</w:tblGrid>");

    for row in &table.rows {
        xml.push_str("<w:tr>");
        for cell in row {
            let _ = write!(
                xml,
                r#"<w:tc><w:tcPr><w:tcW w:w="{}" w:type="dxa"/></w:tcPr>"#,
                column_width
            );
            write_paragraph(xml, cell);
            xml.push_str("</w:tc>");
        }
        // every cell must hold a paragraph, pad short rows
        for _ in row.len()..columns {
            let _ = write!(
                xml,
                r#"<w:tc><w:tcPr><w:tcW w:w="{}" w:type="dxa"/></w:tcPr><w:p/></w:tc>"#,
                column_width
            );
        }
        xml.push_str("</w:tr>");
    }

    xml.push_str("</w:tbl>");
}

fn write_section(xml: &mut String, page: &PageSetup) {
    let _ = write!(
        xml,
        concat!(
            r#"<w:sectPr><w:pgSz w:w="{}" w:h="{}"/>"#,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="708" w:footer="708" w:gutter="0"/>"#,
            r#"</w:sectPr>"#
        ),
        page.width,
        page.height,
        page.margin_top,
        page.margin_right,
        page.margin_bottom,
        page.margin_left
    );
}

/// `docProps/core.xml`
pub fn core_xml(props: &CoreProperties, created: DateTime<Utc>) -> String {
    let stamp = created.format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        concat!(
            "{decl}",
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{title}</dc:title>",
            "<dc:creator>{author}</dc:creator>",
            "<dc:description>{comments}</dc:description>",
            "<cp:lastModifiedBy>{author}</cp:lastModifiedBy>",
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created>"#,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified>"#,
            "</cp:coreProperties>"
        ),
        decl = XML_DECL,
        title = escape(&props.title),
        author = escape(&props.author),
        comments = escape(&props.comments),
        stamp = stamp,
    )
}

/// `docProps/app.xml`
pub fn app_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{} {}</Application></Properties>"
        ),
        XML_DECL,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

/// `[Content_Types].xml`
pub fn content_types_xml(doc: &Document) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

    let mut seen = Vec::new();
    for media in &doc.media {
        if !seen.contains(&media.format) {
            seen.push(media.format);
            let _ = write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                media.format.extension(),
                media.format.content_type()
            );
        }
    }

    xml.push_str(r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#);
    xml.push_str(r#"<Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>"#);
    xml.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
    xml.push_str(r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#);
    xml.push_str("</Types>");
    xml
}

/// `_rels/.rels`
pub fn root_rels_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            r#"<Relationship Id="rId1" Type="{}" Target="word/document.xml"/>"#,
            r#"<Relationship Id="rId2" Type="{}" Target="docProps/core.xml"/>"#,
            r#"<Relationship Id="rId3" Type="{}" Target="docProps/app.xml"/>"#,
            "</Relationships>"
        ),
        XML_DECL, REL_OFFICE_DOCUMENT, REL_CORE_PROPERTIES, REL_EXTENDED_PROPERTIES
    )
}

/// `word/_rels/document.xml.rels`
pub fn document_rels_xml(doc: &Document) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
    let _ = write!(
        xml,
        r#"<Relationship Id="rIdStyles" Type="{}" Target="styles.xml"/>"#,
        REL_STYLES
    );
    let _ = write!(
        xml,
        r#"<Relationship Id="rIdNumbering" Type="{}" Target="numbering.xml"/>"#,
        REL_NUMBERING
    );
    for media in &doc.media {
        let _ = write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="media/{}"/>"#,
            media.rel_id,
            REL_IMAGE,
            escape(&media.file_name)
        );
    }
    xml.push_str("</Relationships>");
    xml
}

/// `word/numbering.xml`: one bullet list with two levels
pub fn numbering_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<w:numbering xmlns:w="{w}"><w:abstractNum w:abstractNumId="0">"#,
            r#"<w:multiLevelType w:val="hybridMultilevel"/>"#,
            r#"<w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/>"#,
            r#"<w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl>"#,
            r#"<w:lvl w:ilvl="1"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="◦"/>"#,
            r#"<w:lvlJc w:val="left"/><w:pPr><w:ind w:left="1440" w:hanging="360"/></w:pPr></w:lvl>"#,
            r#"</w:abstractNum><w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num></w:numbering>"#
        ),
        decl = XML_DECL,
        w = NS_W
    )
}

/// `word/styles.xml`
pub fn styles_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<w:styles xmlns:w="{w}">"#,
            r#"<w:docDefaults><w:rPrDefault><w:rPr>"#,
            r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/>"#,
            r#"<w:sz w:val="22"/><w:szCs w:val="22"/><w:lang w:val="en-US"/>"#,
            r#"</w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults>"#,
            r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
            r#"<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
            r#"<w:pPr><w:keepNext/><w:spacing w:before="480" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr>"#,
            r#"<w:rPr><w:b/><w:bCs/><w:color w:val="2563EB"/><w:sz w:val="32"/><w:szCs w:val="32"/></w:rPr></w:style>"#,
            r#"<w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
            r#"<w:pPr><w:keepNext/><w:spacing w:before="240" w:after="80"/><w:outlineLvl w:val="1"/></w:pPr>"#,
            r#"<w:rPr><w:b/><w:bCs/><w:color w:val="1F2937"/><w:sz w:val="26"/><w:szCs w:val="26"/></w:rPr></w:style>"#,
            r#"<w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/><w:basedOn w:val="Normal"/>"#,
            r#"<w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr><w:spacing w:after="60"/></w:pPr></w:style>"#,
            r#"<w:style w:type="paragraph" w:styleId="ListBullet2"><w:name w:val="List Bullet 2"/><w:basedOn w:val="Normal"/>"#,
            r#"<w:pPr><w:numPr><w:ilvl w:val="1"/><w:numId w:val="1"/></w:numPr><w:spacing w:after="60"/></w:pPr></w:style>"#,
            r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/>"#,
            r#"<w:tblPr><w:tblInd w:w="0" w:type="dxa"/><w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/>"#,
            r#"<w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr></w:style>"#,
            r#"<w:style w:type="table" w:styleId="TableGrid"><w:name w:val="Table Grid"/><w:basedOn w:val="TableNormal"/>"#,
            r#"<w:pPr><w:spacing w:before="60" w:after="60"/></w:pPr>"#,
            r#"<w:tblPr><w:tblBorders>"#,
            r#"<w:top w:val="single" w:sz="4" w:space="0" w:color="8EAADB"/><w:left w:val="single" w:sz="4" w:space="0" w:color="8EAADB"/>"#,
            r#"<w:bottom w:val="single" w:sz="4" w:space="0" w:color="8EAADB"/><w:right w:val="single" w:sz="4" w:space="0" w:color="8EAADB"/>"#,
            r#"<w:insideH w:val="single" w:sz="4" w:space="0" w:color="8EAADB"/><w:insideV w:val="single" w:sz="4" w:space="0" w:color="8EAADB"/>"#,
            r#"</w:tblBorders></w:tblPr></w:style>"#,
            r#"</w:styles>"#
        ),
        decl = XML_DECL,
        w = NS_W
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::{ParagraphStyle, Rgb};

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape("bell\u{7}"), "bell");
        assert_eq!(escape("x\u{FFFE}y\u{FFFF}"), "xy");
        assert_eq!(escape("\u{FFFD}\u{1F4F7}"), "\u{FFFD}\u{1F4F7}");
        assert_eq!(escape("İçerik"), "İçerik");
    }

    #[test]
    fn test_run_properties_order() {
        let mut xml = String::new();
        let run = TextRun::new("x").bold().italic().color(Rgb(1, 2, 3)).size(10.0);
        write_text_run(&mut xml, &run);

        assert_eq!(
            xml,
            r#"<w:r><w:rPr><w:b/><w:bCs/><w:i/><w:iCs/><w:color w:val="010203"/><w:sz w:val="20"/><w:szCs w:val="20"/></w:rPr><w:t xml:space="preserve">x</w:t></w:r>"#
        );
    }

    #[test]
    fn test_newlines_become_breaks() {
        let mut xml = String::new();
        write_text_run(&mut xml, &TextRun::new("one\ntwo"));
        assert!(xml.contains(r#"one</w:t><w:br/><w:t xml:space="preserve">two"#));
    }

    #[test]
    fn test_tabs_and_carriage_returns() {
        let mut xml = String::new();
        write_text_run(&mut xml, &TextRun::new("a\r\nb\rc\td"));
        assert_eq!(
            xml,
            concat!(
                r#"<w:r><w:t xml:space="preserve">a</w:t><w:br/>"#,
                r#"<w:t xml:space="preserve">b</w:t><w:br/>"#,
                r#"<w:t xml:space="preserve">c</w:t><w:tab/>"#,
                r#"<w:t xml:space="preserve">d</w:t></w:r>"#
            )
        );
    }

    #[test]
    fn test_document_xml_contains_blocks() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::text("Hello").styled(ParagraphStyle::ListBullet).centered());
        doc.add_page_break();
        doc.add_table(Table::new().row(vec![Paragraph::text("k"), Paragraph::text("v")]));

        let xml = document_xml(&doc);
        assert!(xml.contains(r#"<w:pStyle w:val="ListBullet"/>"#));
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
        assert!(xml.contains(r#"<w:br w:type="page"/>"#));
        assert!(xml.contains("<w:tbl>"));
        assert!(xml.contains(r#"<w:pgSz w:w="11906" w:h="16838"/>"#));
    }

    #[test]
    fn test_core_xml_escapes_metadata() {
        let props = CoreProperties {
            title: "AUDIT REPORT - R&D".to_string(),
            author: "ArchRampart Audit Tool".to_string(),
            comments: "ISO 27001 AUDIT REPORT".to_string(),
        };
        let xml = core_xml(&props, Utc::now());
        assert!(xml.contains("<dc:title>AUDIT REPORT - R&amp;D</dc:title>"));
        assert!(xml.contains("<dc:creator>ArchRampart Audit Tool</dc:creator>"));
    }
}
