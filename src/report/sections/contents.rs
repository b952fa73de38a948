//! Table of contents

use crate::docx::{Document, Paragraph, TextRun};
use crate::i18n::toc_items;
use crate::report::ReportContext;

/// Fixed list of section titles; not derived from the sections actually
/// present in the document.
pub fn add_table_of_contents(doc: &mut Document, ctx: &ReportContext) {
    doc.add_heading(ctx.t("table_of_contents"), 1);

    for item in toc_items(ctx.lang) {
        doc.add_paragraph(
            Paragraph::new()
                .space_after(6.0)
                .run(TextRun::new(*item).size(11.0)),
        );
    }

    doc.add_blank();
    doc.add_blank();
    doc.add_page_break();
}
