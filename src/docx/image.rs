//! Image loading for inline pictures

use crate::error::ImageError;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl ImageFormat {
    /// Format for a file extension (without the dot, any case)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    /// Extension used for the media part name
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            ImageFormat::Webp => "webp",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Webp => "image/webp",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub format: ImageFormat,
    pub width_px: usize,
    pub height_px: usize,
    pub data: Vec<u8>,
}

impl ImageData {
    /// Read an image file and decode its pixel dimensions.
    ///
    /// The format is taken from the file header, not the extension.
    pub fn load(path: &Path) -> Result<Self, ImageError> {
        let data = std::fs::read(path).map_err(|source| ImageError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_bytes(data)
    }

    /// Only PNG, JPEG and GIF payloads are accepted.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ImageError> {
        let format = match imagesize::image_type(&data) {
            Ok(imagesize::ImageType::Png) => ImageFormat::Png,
            Ok(imagesize::ImageType::Jpeg) => ImageFormat::Jpeg,
            Ok(imagesize::ImageType::Gif) => ImageFormat::Gif,
            Ok(other) => return Err(ImageError::Unsupported(format!("{:?}", other))),
            Err(e) => return Err(ImageError::Decode(e.to_string())),
        };

        let size = imagesize::blob_size(&data).map_err(|e| ImageError::Decode(e.to_string()))?;
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::Decode("image has zero dimension".to_string()));
        }

        Ok(Self {
            format,
            width_px: size.width,
            height_px: size.height,
            data,
        })
    }

    /// Height in EMU when drawn `width_emu` wide
    pub fn scaled_height(&self, width_emu: i64) -> i64 {
        if self.width_px == 0 {
            return width_emu;
        }
        (width_emu as f64 * self.height_px as f64 / self.width_px as f64).round() as i64
    }
}
