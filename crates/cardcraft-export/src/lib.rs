//! CardCraft export pipeline.
//!
//! Turns the card document into downloadable files: rasterize through
//! the [`Rasterizer`] contract, encode as PNG or wrap in a single-page
//! PDF, then hand the bytes to a [`DownloadSink`].

pub mod bitmap;
pub mod error;
pub mod pdf;
pub mod pipeline;
pub mod raster;

pub use bitmap::Bitmap;
pub use error::{ExportError, RasterError};
pub use pdf::{Orientation, PdfDocument};
pub use pipeline::{
    DirectorySink, DownloadSink, ExportOutcome, EXPORT_SCALE, PDF_FILENAME, PNG_FILENAME,
    export_pdf, export_png,
};
pub use raster::{RasterOptions, Rasterizer};
