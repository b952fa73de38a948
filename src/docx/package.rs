//! `.docx` zip packaging

use super::{xml, Document};
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};
use zip::{CompressionMethod, ZipArchive};

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const ROOT_RELS_PART: &str = "_rels/.rels";
pub const DOCUMENT_PART: &str = "word/document.xml";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
pub const STYLES_PART: &str = "word/styles.xml";
pub const NUMBERING_PART: &str = "word/numbering.xml";
pub const CORE_PART: &str = "docProps/core.xml";
pub const APP_PART: &str = "docProps/app.xml";

/// Write `doc` as a complete `.docx` package
pub fn write_package<W: Write + Seek>(doc: &Document, writer: W) -> Result<()> {
    let mut zip = ZipWriter::new(writer);

    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let parts: [(&str, String); 8] = [
        (CONTENT_TYPES_PART, xml::content_types_xml(doc)),
        (ROOT_RELS_PART, xml::root_rels_xml()),
        (DOCUMENT_PART, xml::document_xml(doc)),
        (DOCUMENT_RELS_PART, xml::document_rels_xml(doc)),
        (STYLES_PART, xml::styles_xml()),
        (NUMBERING_PART, xml::numbering_xml()),
        (CORE_PART, xml::core_xml(&doc.properties, Utc::now())),
        (APP_PART, xml::app_xml()),
    ];

    for (name, content) in &parts {
        zip.start_file(*name, options)
            .with_context(|| format!("Failed to start package part {}", name))?;
        zip.write_all(content.as_bytes())?;
    }

    // already-compressed image formats are stored as-is
    let stored = FileOptions::default().compression_method(CompressionMethod::Stored);
    for media in &doc.media {
        zip.start_file(media.part_name(), stored)
            .with_context(|| format!("Failed to start media part {}", media.file_name))?;
        zip.write_all(&media.data)?;
    }

    zip.finish().context("Failed to finalize docx package")?;
    Ok(())
}

/// Write `doc` to a new file at `path`
pub fn save(doc: &Document, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_package(doc, file)
}

/// Names of all parts in a package on disk
pub fn list_parts(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).context("Failed to open package")?;
    let archive = ZipArchive::new(file).context("Failed to read ZIP archive")?;

    Ok(archive.file_names().map(|n| n.to_string()).collect())
}

/// Raw bytes of one part of a package on disk
pub fn read_part(path: &Path, name: &str) -> Result<Vec<u8>> {
    let file = File::open(path).context("Failed to open package")?;
    let mut archive = ZipArchive::new(file).context("Failed to read ZIP archive")?;

    let mut part = archive
        .by_name(name)
        .with_context(|| format!("Part {} not found in package", name))?;
    let mut content = Vec::new();
    part.read_to_end(&mut content)
        .context("Failed to read part content")?;

    Ok(content)
}

/// One XML part as text
pub fn read_part_text(path: &Path, name: &str) -> Result<String> {
    let bytes = read_part(path, name)?;
    String::from_utf8(bytes).with_context(|| format!("Part {} is not UTF-8", name))
}
