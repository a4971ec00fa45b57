//! Image decoding and intensity conversion.
//!
//! Accepts raw image bytes (PNG, JPEG, TIFF) and produces both the
//! decoded RGBA image for display and the single-channel intensity
//! image the segmentation selector consumes.
//!
//! This is the first step in the pipeline: raw bytes in, images out.

use image::{GrayImage, RgbaImage};

use crate::types::SegmentError;

/// Decode raw image bytes into the display image and its intensity
/// reduction.
///
/// Supports PNG, JPEG, and TIFF (whatever codecs the `image` crate is
/// built with). Multi-channel sources are reduced to one channel with
/// the standard luma weighting `0.299*R + 0.587*G + 0.114*B`; sources
/// that are already single-channel pass through unchanged.
///
/// # Errors
///
/// Returns [`SegmentError::EmptyInput`] if `bytes` is empty.
/// Returns [`SegmentError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
#[must_use = "returns the decoded images"]
pub fn decode_to_intensity(bytes: &[u8]) -> Result<(RgbaImage, GrayImage), SegmentError> {
    if bytes.is_empty() {
        return Err(SegmentError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    Ok((img.to_rgba8(), img.to_luma8()))
}
