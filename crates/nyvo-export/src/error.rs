//! Export error taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Document (de)serialization failed — covers both save and load.
    #[error("document serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// PNG/JPEG encoding failed.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// The host rasterizer reported a failure.
    #[error("rasterizer failed: {0}")]
    Raster(String),
}

pub type ExportResult<T> = Result<T, ExportError>;
