//! PNG and PDF export operations.
//!
//! Both operations read the card, rasterize it at a fixed 3x scale
//! through the [`Rasterizer`] contract, and deliver the encoded bytes
//! to a [`DownloadSink`] under a fixed filename. An absent card is a
//! silent skip, not an error; the sink is never called.

use crate::bitmap::Bitmap;
use crate::error::ExportError;
use crate::pdf::{Orientation, PdfDocument};
use crate::raster::{RasterOptions, Rasterizer};
use cardcraft_core::CardDocument;
use std::path::PathBuf;

/// Export scale relative to on-screen size, for high-resolution output.
pub const EXPORT_SCALE: f64 = 3.0;

/// Fixed download filenames.
pub const PNG_FILENAME: &str = "card.png";
pub const PDF_FILENAME: &str = "card.pdf";

/// PDF placement: 270x150 mm at (10, 10) on a landscape A4 page.
const PDF_IMAGE_X_MM: f64 = 10.0;
const PDF_IMAGE_Y_MM: f64 = 10.0;
const PDF_IMAGE_W_MM: f64 = 270.0;
const PDF_IMAGE_H_MM: f64 = 150.0;

/// Destination for exported files (the "download" seam).
pub trait DownloadSink {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> std::io::Result<()>;
}

/// Sink writing downloads into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> std::io::Result<()> {
        let path = self.dir.join(filename);
        std::fs::write(&path, bytes)?;
        log::info!("saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

/// Result of an export request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No card to export; nothing was delivered.
    Skipped,
    /// The file was delivered to the sink.
    Saved,
}

fn rasterize_card<R: Rasterizer + ?Sized>(
    card: &CardDocument,
    rasterizer: &R,
) -> Result<Bitmap, ExportError> {
    let bitmap = rasterizer.rasterize(card, RasterOptions::with_scale(EXPORT_SCALE))?;
    Ok(bitmap)
}

/// Export the card as `card.png`.
pub fn export_png<R, S>(
    card: Option<&CardDocument>,
    rasterizer: &R,
    sink: &mut S,
) -> Result<ExportOutcome, ExportError>
where
    R: Rasterizer + ?Sized,
    S: DownloadSink + ?Sized,
{
    let Some(card) = card else {
        return Ok(ExportOutcome::Skipped);
    };

    let bitmap = rasterize_card(card, rasterizer)?;
    let png_data = bitmap.encode_png()?;
    sink.deliver(PNG_FILENAME, &png_data)?;
    log::debug!("exported {} ({} bytes)", PNG_FILENAME, png_data.len());
    Ok(ExportOutcome::Saved)
}

/// Export the card as `card.pdf`: the rasterized card placed on a
/// landscape A4 page.
pub fn export_pdf<R, S>(
    card: Option<&CardDocument>,
    rasterizer: &R,
    sink: &mut S,
) -> Result<ExportOutcome, ExportError>
where
    R: Rasterizer + ?Sized,
    S: DownloadSink + ?Sized,
{
    let Some(card) = card else {
        return Ok(ExportOutcome::Skipped);
    };

    let bitmap = rasterize_card(card, rasterizer)?;
    let mut pdf = PdfDocument::new(Orientation::Landscape);
    pdf.add_image(
        &bitmap,
        PDF_IMAGE_X_MM,
        PDF_IMAGE_Y_MM,
        PDF_IMAGE_W_MM,
        PDF_IMAGE_H_MM,
    );
    let pdf_data = pdf.save();
    sink.deliver(PDF_FILENAME, &pdf_data)?;
    log::debug!("exported {} ({} bytes)", PDF_FILENAME, pdf_data.len());
    Ok(ExportOutcome::Saved)
}
