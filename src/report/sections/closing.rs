//! Conclusion and appendix sections

use super::body_paragraph;
use crate::docx::{Document, Paragraph, TextRun};
use crate::i18n::translate_with;
use crate::models::Audit;
use crate::report::ReportContext;
use chrono::NaiveDateTime;

pub fn add_conclusion_section(doc: &mut Document, audit: &Audit, ctx: &ReportContext) {
    doc.add_heading(ctx.t("conclusion"), 1);

    let conclusion = translate_with(
        "conclusion_text",
        ctx.lang,
        &[("audit_name", audit.name.as_str())],
    );
    doc.add_paragraph(body_paragraph(&conclusion));

    doc.add_blank();
}

/// Audit identifier and timestamps
pub fn add_appendix_section(doc: &mut Document, audit: &Audit, ctx: &ReportContext) {
    doc.add_heading(ctx.t("appendices"), 1);

    doc.add_paragraph(Paragraph::new().run(TextRun::new(ctx.t("appendix_a")).bold().size(11.0)));

    let timestamp = |value: Option<NaiveDateTime>| match value {
        Some(ts) => ctx.lang.format_datetime(ts),
        None => "N/A".to_string(),
    };

    let items = [
        (ctx.t("audit_id"), audit.id.to_string()),
        (ctx.t("created_date"), timestamp(audit.created_at)),
        (ctx.t("last_update"), timestamp(audit.updated_at)),
    ];

    for (label, value) in items {
        let line = TextRun::new(format!("  {}: {}", label, value)).size(10.0);
        doc.add_paragraph(Paragraph::new().run(line));
    }
}
