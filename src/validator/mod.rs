//! Validation module

pub mod structure;

use anyhow::Result;
use std::path::Path;

/// Check that a written report is a well-formed `.docx` package
pub fn validate_package(path: &Path) -> Result<()> {
    structure::validate_structure(path)
}
