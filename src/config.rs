//! Report generation settings

use std::path::{Path, PathBuf};

/// Author recorded in every generated document
pub const REPORT_AUTHOR: &str = "ArchRampart Audit Tool";

/// Width at which evidence images are embedded, in inches
pub const IMAGE_WIDTH_INCHES: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Base directory that evidence `file_path`s are relative to
    pub upload_dir: PathBuf,

    /// Where generated reports are created; the system temp dir when unset
    pub output_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            output_dir: None,
        }
    }
}

impl Settings {
    pub fn with_upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.upload_dir(), Path::new("uploads"));
        assert_eq!(settings.output_dir(), std::env::temp_dir());
    }

    #[test]
    fn test_settings_builders() {
        let settings = Settings::default()
            .with_upload_dir("/srv/uploads")
            .with_output_dir("/tmp/reports");
        assert_eq!(settings.upload_dir(), Path::new("/srv/uploads"));
        assert_eq!(settings.output_dir(), PathBuf::from("/tmp/reports"));
    }
}
