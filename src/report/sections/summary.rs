//! Executive summary and methodology sections

use super::{body_paragraph, label_paragraph};
use crate::docx::{Document, Paragraph, ParagraphStyle, TextRun};
use crate::i18n::translate_with;
use crate::models::Audit;
use crate::report::presentation::get_severity_text;
use crate::report::ReportContext;

pub fn add_executive_summary(doc: &mut Document, audit: &Audit, ctx: &ReportContext) {
    doc.add_heading(ctx.t("executive_summary"), 1);

    let findings_count = audit.findings.len().to_string();
    let summary = translate_with(
        "summary_text",
        ctx.lang,
        &[
            ("audit_name", audit.name.as_str()),
            ("standard", audit.standard.as_str()),
            ("findings_count", findings_count.as_str()),
        ],
    );
    doc.add_paragraph(body_paragraph(&summary));

    doc.add_blank();
    doc.add_paragraph(
        Paragraph::new()
            .styled(ParagraphStyle::ListBullet)
            .run(TextRun::new(ctx.t("finding_distribution")).bold().size(11.0)),
    );

    for (severity, count) in audit.severity_counts().non_zero() {
        let line = format!(
            "{}: {} {}",
            get_severity_text(severity, ctx.lang),
            count,
            ctx.t("finding")
        );
        doc.add_paragraph(
            Paragraph::new()
                .styled(ParagraphStyle::ListBullet2)
                .run(TextRun::new(line).size(10.0)),
        );
    }

    doc.add_blank();
}

pub fn add_methodology_section(doc: &mut Document, audit: &Audit, ctx: &ReportContext) {
    doc.add_heading(ctx.t("scope_methodology"), 1);

    doc.add_paragraph(label_paragraph(ctx.t("scope")));
    let scope = translate_with("scope_text", ctx.lang, &[("standard", audit.standard.as_str())]);
    doc.add_paragraph(body_paragraph(&scope));

    if let Some(description) = audit.description.as_deref().filter(|_| audit.has_description()) {
        doc.add_blank();
        doc.add_paragraph(label_paragraph(ctx.t("description")));
        doc.add_paragraph(body_paragraph(description));
    }

    doc.add_blank();
}
