//! Data types for canvas export functionality.

use crate::draw::SurfaceError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Image format for exported canvases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossy JPEG output (the default)
    Jpeg,
    /// Lossless PNG output
    Png,
}

impl ExportFormat {
    /// Resolves a format from its name, as used in configs and CLI flags.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "jpeg" | "jpg" => Some(ExportFormat::Jpeg),
            "png" => Some(ExportFormat::Png),
            _ => None,
        }
    }

    /// File extension used for saved images.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Png => "png",
        }
    }
}

/// Errors that can occur while exporting the canvas.
///
/// Export failures are reported to the caller as-is; there is no retry
/// policy.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read surface pixels: {0}")]
    Surface(#[from] SurfaceError),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to save image: {0}")]
    Save(#[from] std::io::Error),
}
