//! Audit report assembly
//!
//! The generator walks the audit graph once and hands a shared
//! [`Document`](crate::docx::Document) to each section builder in turn.

pub mod evidence;
pub mod generator;
pub mod presentation;
pub mod sections;

pub use generator::{build_document, build_document_with, generate_audit_word_report};
pub use presentation::{get_severity_text, get_status_text, severity_color, status_color};

use crate::config::{Settings, IMAGE_WIDTH_INCHES};
use crate::docx::inches_to_emu;
use crate::i18n::Language;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Per-report rendering parameters passed to every section builder
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub lang: Language,
    pub upload_dir: PathBuf,
    /// Date printed as the report date on the cover page
    pub report_date: NaiveDate,
    pub image_width_emu: i64,
}

impl ReportContext {
    pub fn new(lang: Language, settings: &Settings, report_date: NaiveDate) -> Self {
        Self {
            lang,
            upload_dir: settings.upload_dir.clone(),
            report_date,
            image_width_emu: inches_to_emu(IMAGE_WIDTH_INCHES),
        }
    }

    /// Shorthand for [`crate::i18n::get_translation`] in this report's language
    pub fn t(&self, key: &'static str) -> &'static str {
        crate::i18n::get_translation(key, self.lang)
    }
}
