//! Error types for rasterization and export.

use thiserror::Error;

/// Failure reported by a rasterization backend.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The backend could not produce a bitmap.
    #[error("rasterization failed: {0}")]
    Backend(String),
}

/// Failure during export (mechanical failures only; "nothing to
/// export" is not an error, see `ExportOutcome::Skipped`).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("pixel buffer is {actual} bytes, expected {expected}")]
    PixelBufferSize { expected: usize, actual: usize },

    #[error("failed to deliver download: {0}")]
    Io(#[from] std::io::Error),
}
