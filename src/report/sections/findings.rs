//! Per-finding detail blocks with evidence

use super::{body_paragraph, label_paragraph};
use crate::docx::{Document, Paragraph, ParagraphStyle, TextRun};
use crate::models::{Evidence, Finding};
use crate::report::evidence::{load_image, EmbedOutcome, EvidenceKind};
use crate::report::presentation::{
    get_severity_text, get_status_text, severity_color, status_color, MUTED,
};
use crate::report::ReportContext;
use tracing::{debug, warn};

/// Separator between the severity and status badges
pub const BADGE_SEPARATOR: &str = " | ";

pub fn add_findings_section(doc: &mut Document, findings: &[Finding], ctx: &ReportContext) {
    doc.add_heading(ctx.t("findings"), 1);

    if findings.is_empty() {
        doc.add_paragraph(
            Paragraph::new().run(TextRun::new(ctx.t("no_findings")).italic().size(11.0)),
        );
        return;
    }

    for (idx, finding) in findings.iter().enumerate() {
        add_finding(doc, idx + 1, finding, ctx);

        doc.add_blank();
        doc.add_blank();
    }
}

/// Heading text of the `index`-th finding (1-based)
pub fn finding_heading(index: usize, finding: &Finding, ctx: &ReportContext) -> String {
    format!("{} #{}: {}", ctx.t("finding_title"), index, finding.title)
}

fn add_finding(doc: &mut Document, index: usize, finding: &Finding, ctx: &ReportContext) {
    doc.add_heading(finding_heading(index, finding, ctx), 2);

    doc.add_paragraph(badge_line(finding, ctx));

    if let Some(reference) = non_blank(&finding.control_reference) {
        doc.add_paragraph(
            Paragraph::new()
                .run(TextRun::new(format!("{}: ", ctx.t("control_reference"))).bold())
                .run(TextRun::new(reference).size(11.0)),
        );
    }

    if let Some(description) = non_blank(&finding.description) {
        doc.add_paragraph(label_paragraph(ctx.t("description")));
        doc.add_paragraph(body_paragraph(description).space_after(6.0));
    }

    if let Some(recommendation) = non_blank(&finding.recommendation) {
        doc.add_paragraph(label_paragraph(ctx.t("recommendation")));
        doc.add_paragraph(body_paragraph(recommendation).space_after(6.0));
    }

    if !finding.evidences.is_empty() {
        doc.add_paragraph(Paragraph::new().run(
            TextRun::new(format!("{}: {}", ctx.t("evidence_count"), finding.evidences.len()))
                .bold()
                .size(11.0),
        ));

        for evidence in &finding.evidences {
            add_evidence(doc, evidence, ctx);
        }
    }
}

fn badge_line(finding: &Finding, ctx: &ReportContext) -> Paragraph {
    let severity = format!(
        "{}: {}",
        ctx.t("severity"),
        get_severity_text(finding.severity, ctx.lang)
    );
    let status = format!(
        "{}: {}",
        ctx.t("status_label"),
        get_status_text(finding.status, ctx.lang)
    );

    Paragraph::new()
        .space_after(6.0)
        .run(TextRun::new(severity).bold().size(10.0).color(severity_color(finding.severity)))
        .run(TextRun::new(BADGE_SEPARATOR).bold().size(10.0))
        .run(TextRun::new(status).bold().size(10.0).color(status_color(finding.status)))
}

fn add_evidence(doc: &mut Document, evidence: &Evidence, ctx: &ReportContext) {
    match EvidenceKind::of(evidence) {
        EvidenceKind::Image(_) => match load_image(evidence, &ctx.upload_dir) {
            EmbedOutcome::Embedded(image) => {
                debug!(file = %evidence.file_name, "embedding evidence image");
                add_embedded_image(doc, evidence, image, ctx);
            }
            EmbedOutcome::Failed(failure) => {
                warn!(file = %evidence.file_name, reason = %failure, "evidence image not embedded");
                let line = format!("{} ({})", evidence.file_name, ctx.t(failure.notice_key()));
                doc.add_paragraph(bullet(line, ParagraphStyle::ListBullet, 10.0));
            }
        },
        EvidenceKind::Attachment => {
            doc.add_paragraph(bullet(
                evidence.file_name.as_str(),
                ParagraphStyle::ListBullet,
                10.0,
            ));

            if let Some(description) = non_blank(&evidence.description) {
                let line = format!("{}: {}", ctx.t("evidence_desc"), description);
                doc.add_paragraph(Paragraph::new().styled(ParagraphStyle::ListBullet2).run(
                    TextRun::new(line).size(9.0).color(MUTED),
                ));
            }
        }
    }
}

fn add_embedded_image(
    doc: &mut Document,
    evidence: &Evidence,
    image: crate::docx::ImageData,
    ctx: &ReportContext,
) {
    doc.add_blank();

    let picture = doc.add_picture(image, ctx.image_width_emu);
    doc.add_paragraph(Paragraph::new().centered().picture(picture));

    doc.add_paragraph(
        Paragraph::new().centered().run(
            TextRun::new(format!("📷 {}", evidence.file_name))
                .italic()
                .size(9.0)
                .color(MUTED),
        ),
    );

    if let Some(description) = non_blank(&evidence.description) {
        doc.add_paragraph(
            Paragraph::new()
                .centered()
                .run(TextRun::new(description).size(9.0).color(MUTED)),
        );
    }
}

fn bullet(text: impl Into<String>, style: ParagraphStyle, size: f32) -> Paragraph {
    Paragraph::new()
        .styled(style)
        .run(TextRun::new(text).size(size))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
