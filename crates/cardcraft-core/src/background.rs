//! Card background: a solid color or an uploaded image.

use crate::color::CardColor;
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Image format for uploaded background data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    WebP,
}

impl ImageFormat {
    /// Get MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Detect format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(ImageFormat::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::Jpeg);
        }

        // WebP: RIFF....WEBP
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(ImageFormat::WebP);
        }

        None
    }
}

/// Encode uploaded file bytes as a data URL, sniffing the MIME type
/// from the magic bytes. Unrecognized data still encodes, as a generic
/// octet stream.
pub fn encode_data_url(data: &[u8]) -> String {
    let mime = ImageFormat::from_magic_bytes(data)
        .map(|format| format.mime_type())
        .unwrap_or("application/octet-stream");
    format!("data:{};base64,{}", mime, STANDARD.encode(data))
}

/// Background image sizing. Uploaded images always use `Cover`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BackgroundSize {
    #[default]
    Cover,
}

/// Background image placement. Uploaded images are always centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BackgroundPosition {
    #[default]
    Center,
}

/// An uploaded background image with its sizing rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    /// Base64 data URL of the uploaded file.
    pub data_url: String,
    pub size: BackgroundSize,
    pub position: BackgroundPosition,
}

impl BackgroundImage {
    /// Create a cover-sized, centered background image.
    pub fn new(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
            size: BackgroundSize::Cover,
            position: BackgroundPosition::Center,
        }
    }
}

/// The card's background fill. Color and image are mutually exclusive;
/// whichever was set last wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Background {
    Color(CardColor),
    Image(BackgroundImage),
}

impl Default for Background {
    fn default() -> Self {
        Background::Color(CardColor::white())
    }
}

impl Background {
    pub fn is_image(&self) -> bool {
        matches!(self, Background::Image(_))
    }

    /// The solid fill color, if the background is currently a color.
    pub fn color(&self) -> Option<CardColor> {
        match self {
            Background::Color(color) => Some(*color),
            Background::Image(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_format_detection() {
        assert_eq!(ImageFormat::from_magic_bytes(PNG_MAGIC), Some(ImageFormat::Png));
        assert_eq!(
            ImageFormat::from_magic_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_magic_bytes(b"RIFF\x00\x00\x00\x00WEBP"),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::from_magic_bytes(b"no"), None);
    }

    #[test]
    fn test_data_url_sniffs_mime() {
        let url = encode_data_url(PNG_MAGIC);
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_data_url_unknown_bytes() {
        let url = encode_data_url(b"not an image at all");
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_background_image_defaults() {
        let image = BackgroundImage::new("data:image/png;base64,AAAA");
        assert_eq!(image.size, BackgroundSize::Cover);
        assert_eq!(image.position, BackgroundPosition::Center);
    }

    #[test]
    fn test_default_background_is_white() {
        assert_eq!(Background::default().color(), Some(CardColor::white()));
    }
}
