//! Rasterization contract.
//!
//! Rasterizing the card (fonts, layout, background compositing) is the
//! job of an external service; this crate only defines the contract the
//! export pipeline calls through. A backend must preserve the card's
//! on-screen appearance, including absolutely positioned layers and the
//! current background color or image.

use crate::bitmap::Bitmap;
use crate::error::RasterError;
use cardcraft_core::CardDocument;

/// Options for a rasterization request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    /// Output scale relative to the card's on-screen pixel size.
    pub scale: f64,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl RasterOptions {
    pub fn with_scale(scale: f64) -> Self {
        Self { scale }
    }

    /// Output size in pixels for a given card.
    pub fn output_size(&self, card: &CardDocument) -> (u32, u32) {
        (
            (card.size.width * self.scale).round().max(1.0) as u32,
            (card.size.height * self.scale).round().max(1.0) as u32,
        )
    }
}

/// A backend that renders the card document to a bitmap.
pub trait Rasterizer {
    fn rasterize(&self, card: &CardDocument, options: RasterOptions)
    -> Result<Bitmap, RasterError>;
}
