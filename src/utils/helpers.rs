//! Helper utility functions

use crate::docx::ImageFormat;
use std::path::Path;

/// Lower-cased extension of a file name, without the dot
pub fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Image format named by a file's extension, if it is one of the
/// embeddable ones
pub fn image_format_for(file_name: &str) -> Option<ImageFormat> {
    file_extension(file_name)
        .as_deref()
        .and_then(ImageFormat::from_extension)
}

/// Sanitize a name for use in filenames
pub fn sanitize_name(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Prefix for the temporary report file of an audit
pub fn report_file_prefix(audit_id: i64) -> String {
    format!("audit_report_{}_", audit_id)
}
