//! RGBA bitmap produced by a rasterization backend.

use crate::error::ExportError;
use base64::{Engine, engine::general_purpose::STANDARD};

/// An RGBA8 pixel buffer with dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    /// Row-major RGBA8 pixels, `width * height * 4` bytes.
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap filled with a single RGBA color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba.repeat((width as usize) * (height as usize));
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap an existing RGBA8 pixel buffer.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ExportError> {
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(ExportError::PixelBufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The pixel data with the alpha channel stripped (RGB8), as the
    /// PDF image XObject expects.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    }

    /// Encode as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut png_data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut png_data, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(png_data)
    }

    /// Encode as a `data:image/png;base64,…` URL.
    pub fn to_png_data_url(&self) -> Result<String, ExportError> {
        let png_data = self.encode_png()?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png_data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_filled_dimensions() {
        let bitmap = Bitmap::filled(4, 3, [255, 0, 0, 255]);
        assert_eq!(bitmap.width(), 4);
        assert_eq!(bitmap.height(), 3);
        assert_eq!(bitmap.pixels().len(), 4 * 3 * 4);
    }

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(Bitmap::from_rgba(2, 2, vec![0u8; 16]).is_ok());
        assert!(matches!(
            Bitmap::from_rgba(2, 2, vec![0u8; 15]),
            Err(ExportError::PixelBufferSize { expected: 16, actual: 15 })
        ));
    }

    #[test]
    fn test_to_rgb_strips_alpha() {
        let bitmap = Bitmap::from_rgba(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(bitmap.to_rgb(), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_png_signature() {
        let bitmap = Bitmap::filled(2, 2, [0, 128, 255, 255]);
        let png_data = bitmap.encode_png().unwrap();
        assert!(png_data.starts_with(PNG_MAGIC));
    }

    #[test]
    fn test_png_data_url_prefix() {
        let bitmap = Bitmap::filled(1, 1, [9, 9, 9, 255]);
        let url = bitmap.to_png_data_url().unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }
}
