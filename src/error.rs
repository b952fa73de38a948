//! Error types for the image and package layers
//!
//! Pipeline-level functions return `anyhow::Result`; these typed errors
//! are for the places where callers branch on what went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Why an image could not be turned into an inline picture
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported image format: {0}")]
    Unsupported(String),

    #[error("could not decode image: {0}")]
    Decode(String),
}

/// Structural problems found in a written package
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("package is empty: {0}")]
    Empty(PathBuf),

    #[error("required part missing: {0}")]
    MissingPart(String),

    #[error("relationship {rel_id} points at missing part {target}")]
    DanglingRelationship { rel_id: String, target: String },
}
