//! Report generation pipeline

use super::sections::{
    add_appendix_section, add_conclusion_section, add_cover_page, add_executive_summary,
    add_findings_section, add_methodology_section, add_table_of_contents,
};
use super::ReportContext;
use crate::config::{Settings, REPORT_AUTHOR};
use crate::docx::{package, CoreProperties, Document};
use crate::i18n::{get_translation, Language};
use crate::models::Audit;
use crate::utils::report_file_prefix;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use tracing::{debug, info};

/// Build the complete report for `audit` in memory
pub fn build_document(audit: &Audit, settings: &Settings) -> Document {
    let lang = Language::resolve(audit.language.as_deref());
    let ctx = ReportContext::new(lang, settings, Local::now().date_naive());
    build_document_with(audit, &ctx)
}

/// Build the report with an explicit rendering context
pub fn build_document_with(audit: &Audit, ctx: &ReportContext) -> Document {
    let findings = &audit.findings;

    let mut doc = Document::new();
    doc.properties = core_properties(audit, ctx.lang);

    debug!(audit_id = audit.id, lang = %ctx.lang, "building report sections");

    add_cover_page(&mut doc, audit, ctx);
    add_table_of_contents(&mut doc, ctx);
    add_executive_summary(&mut doc, audit, ctx);
    add_methodology_section(&mut doc, audit, ctx);
    add_findings_section(&mut doc, findings, ctx);
    add_conclusion_section(&mut doc, audit, ctx);
    add_appendix_section(&mut doc, audit, ctx);

    doc
}

fn core_properties(audit: &Audit, lang: Language) -> CoreProperties {
    let report_title = get_translation("audit_report", lang);

    CoreProperties {
        title: format!("{} - {}", report_title, audit.name),
        author: REPORT_AUTHOR.to_string(),
        comments: format!("{} {}", audit.standard, report_title),
    }
}

/// Generate the Word report for `audit` and return the path of the new
/// `.docx` file.
///
/// Every call writes a fresh temporary file that the caller owns; nothing
/// is cached or cleaned up here.
pub fn generate_audit_word_report(audit: &Audit, settings: &Settings) -> Result<PathBuf> {
    let doc = build_document(audit, settings);

    let output_dir = settings.output_dir();
    let mut file = tempfile::Builder::new()
        .prefix(&report_file_prefix(audit.id))
        .suffix(".docx")
        .tempfile_in(&output_dir)
        .with_context(|| format!("Failed to create report file in {}", output_dir.display()))?;

    // the temp file is removed on drop if writing fails
    package::write_package(&doc, file.as_file_mut()).context("Failed to write report package")?;

    let (_, path) = file.keep().context("Failed to persist report file")?;

    info!(
        audit_id = audit.id,
        findings = audit.findings.len(),
        images = doc.media.len(),
        path = %path.display(),
        "audit report written"
    );

    Ok(path)
}
