//! PNG serialization for segmentation masks.
//!
//! Encodes a mask as a single-channel (L8) PNG. The bytes are handed
//! to the browser download path in `kiru-io`; nothing here touches
//! the filesystem or any web API.

use image::ImageEncoder;
use kiru_segment::GrayImage;

/// Errors that can occur while serializing a mask.
#[derive(Debug, thiserror::Error)]
pub enum PngError {
    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// The mask has zero width or height.
    #[error("mask has zero width or height")]
    EmptyMask,
}

/// Encode a mask as PNG bytes.
///
/// The mask is written as-is in single-channel form; binary masks
/// (every sample 0 or 255) stay binary through the round trip.
///
/// # Errors
///
/// Returns [`PngError::EmptyMask`] for a zero-dimension mask and
/// [`PngError::Encode`] if the encoder fails.
pub fn to_png(mask: &GrayImage) -> Result<Vec<u8>, PngError> {
    if mask.width() == 0 || mask.height() == 0 {
        return Err(PngError::EmptyMask);
    }

    let mut bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut bytes);
    encoder.write_image(
        mask.as_raw(),
        mask.width(),
        mask.height(),
        image::ExtendedColorType::L8,
    )?;
    Ok(bytes)
}
