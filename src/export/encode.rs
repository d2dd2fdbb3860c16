//! Pixel readback and image encoding.

use super::types::{ExportError, ExportFormat};
use crate::draw::Surface;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

/// Encodes the surface contents into the requested image format.
///
/// # Arguments
/// * `surface` - Surface to read pixels from
/// * `format` - Output encoding
/// * `jpeg_quality` - JPEG quality 1-100 (ignored for PNG)
///
/// # Returns
/// The encoded image bytes
pub fn encode_image(
    surface: &mut Surface,
    format: ExportFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, ExportError> {
    let width = surface.width() as u32;
    let height = surface.height() as u32;
    let rgb = surface.to_rgb()?;

    let mut bytes = Vec::new();
    match format {
        ExportFormat::Jpeg => {
            JpegEncoder::new_with_quality(&mut bytes, jpeg_quality).write_image(
                &rgb,
                width,
                height,
                ExtendedColorType::Rgb8,
            )?;
        }
        ExportFormat::Png => {
            PngEncoder::new(&mut bytes).write_image(
                &rgb,
                width,
                height,
                ExtendedColorType::Rgb8,
            )?;
        }
    }

    log::debug!(
        "Encoded {}x{} canvas as {} ({} bytes)",
        width,
        height,
        format.extension(),
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::WHITE;

    #[test]
    fn jpeg_output_carries_the_jpeg_signature() {
        let mut surface = Surface::new(16, 16, WHITE).expect("surface");
        let bytes = encode_image(&mut surface, ExportFormat::Jpeg, 90).unwrap();
        assert!(bytes.len() > 2);
        assert_eq!(&bytes[0..2], &[0xff, 0xd8]);
    }

    #[test]
    fn png_output_carries_the_png_signature() {
        let mut surface = Surface::new(16, 16, WHITE).expect("surface");
        let bytes = encode_image(&mut surface, ExportFormat::Png, 90).unwrap();
        assert!(bytes.len() > 8);
        assert_eq!(&bytes[0..4], &[0x89, b'P', b'N', b'G']);
    }
}
