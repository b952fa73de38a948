//! Evidence classification and best-effort image loading

use crate::docx::{ImageData, ImageFormat};
use crate::error::ImageError;
use crate::models::Evidence;
use crate::utils::image_format_for;
use std::path::Path;

/// How an evidence item is presented in the findings section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceKind {
    /// Named with an embeddable image extension
    Image(ImageFormat),
    /// Anything else; always listed by name
    Attachment,
}

impl EvidenceKind {
    pub fn of(evidence: &Evidence) -> Self {
        match image_format_for(&evidence.file_name) {
            Some(format) => EvidenceKind::Image(format),
            None => EvidenceKind::Attachment,
        }
    }
}

/// Reason an image evidence item is listed instead of embedded
#[derive(Debug)]
pub enum EmbedFailure {
    NotFound,
    Unreadable(ImageError),
}

impl EmbedFailure {
    /// Translation key of the inline notice shown in place of the image
    pub fn notice_key(&self) -> &'static str {
        match self {
            EmbedFailure::NotFound => "file_not_found",
            EmbedFailure::Unreadable(_) => "image_load_failed",
        }
    }
}

impl std::fmt::Display for EmbedFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedFailure::NotFound => write!(f, "file not found"),
            EmbedFailure::Unreadable(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Debug)]
pub enum EmbedOutcome {
    Embedded(ImageData),
    Failed(EmbedFailure),
}

/// Load the image behind an evidence item from `upload_dir`
pub fn load_image(evidence: &Evidence, upload_dir: &Path) -> EmbedOutcome {
    let path = evidence.resolve_path(upload_dir);
    if !path.exists() {
        return EmbedOutcome::Failed(EmbedFailure::NotFound);
    }

    match ImageData::load(&path) {
        Ok(image) => EmbedOutcome::Embedded(image),
        Err(e) => EmbedOutcome::Failed(EmbedFailure::Unreadable(e)),
    }
}
