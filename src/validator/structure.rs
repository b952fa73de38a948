//! Structural validation of a written package

use crate::docx::package::{
    self, CONTENT_TYPES_PART, CORE_PART, DOCUMENT_PART, DOCUMENT_RELS_PART, ROOT_RELS_PART,
    STYLES_PART,
};
use crate::error::PackageError;
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

const REQUIRED_PARTS: [&str; 6] = [
    CONTENT_TYPES_PART,
    ROOT_RELS_PART,
    DOCUMENT_PART,
    DOCUMENT_RELS_PART,
    STYLES_PART,
    CORE_PART,
];

lazy_static! {
    static ref IMAGE_RELATIONSHIP: Regex = Regex::new(
        r#"<Relationship Id="([^"]+)" Type="[^"]+/image" Target="([^"]+)"/>"#
    ).unwrap();
}

pub fn validate_structure(path: &Path) -> Result<()> {
    let size = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();
    if size == 0 {
        return Err(PackageError::Empty(path.to_path_buf()).into());
    }

    let parts = package::list_parts(path)?;

    // Check required parts
    for required in REQUIRED_PARTS {
        if !parts.iter().any(|p| p == required) {
            return Err(PackageError::MissingPart(required.to_string()).into());
        }
    }

    // Check image relationships resolve
    let rels = package::read_part_text(path, DOCUMENT_RELS_PART)?;
    for cap in IMAGE_RELATIONSHIP.captures_iter(&rels) {
        let target = format!("word/{}", &cap[2]);
        if !parts.iter().any(|p| *p == target) {
            return Err(PackageError::DanglingRelationship {
                rel_id: cap[1].to_string(),
                target,
            }
            .into());
        }
    }

    Ok(())
}
