//! Canvas export: image encoding and file saving.
//!
//! Turns the retained pixel buffer into an image file named by the current
//! timestamp, mirroring a "download drawing" action.

pub mod encode;
pub mod file;
pub mod types;

// Re-export commonly used items at module level
pub use encode::encode_image;
pub use file::{ensure_directory_exists, expand_tilde, generate_filename, save_image};
pub use types::{ExportError, ExportFormat};

use crate::config::ExportConfig;
use crate::draw::Surface;
use std::path::PathBuf;

/// Encodes the surface and writes it to the configured directory under a
/// timestamped filename.
///
/// # Returns
/// Path to the written file
pub fn export_surface(
    surface: &mut Surface,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let bytes = encode_image(surface, config.format, config.jpeg_quality)?;
    let directory = ensure_directory_exists(&expand_tilde(&config.directory))?;
    let filename = generate_filename(&config.filename_template, config.format.extension());
    let path = save_image(&bytes, &directory, &filename)?;

    log::info!("Exported canvas to {}", path.display());
    Ok(path)
}
