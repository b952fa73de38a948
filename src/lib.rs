//! Audit report generator
//!
//! Renders an audit record (its findings and their evidence files) into a
//! Word (`.docx`) report with cover page, table of contents, narrative
//! sections, per-finding detail and embedded evidence images, in Turkish or
//! English.

pub mod config;
pub mod docx;
pub mod error;
pub mod i18n;
pub mod models;
pub mod report;
pub mod utils;
pub mod validator;

pub use config::Settings;
pub use i18n::{get_translation, Language};
pub use models::{Audit, Evidence, Finding, Organization, Project, Severity, Status};
pub use report::{build_document, generate_audit_word_report, get_severity_text, get_status_text};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load an audit graph from a JSON export
pub fn load_audit(path: &Path) -> Result<Audit> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let audit = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse audit JSON in {}", path.display()))?;
    Ok(audit)
}

/// Load an audit export, render it, and validate the written package
pub fn render_audit_file(input_path: &Path, settings: &Settings) -> Result<PathBuf> {
    // 1. Load audit graph
    let audit = load_audit(input_path)?;

    // 2. Generate report
    let path = generate_audit_word_report(&audit, settings)?;

    // 3. Validate result
    validator::validate_package(&path)?;

    Ok(path)
}
