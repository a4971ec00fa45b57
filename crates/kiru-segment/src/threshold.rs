//! Global thresholding and mask complement.
//!
//! Wraps [`imageproc::contrast::threshold`] to classify every sample
//! against a single cutoff. Returns a binary mask where white pixels
//! (255) are foreground and black pixels (0) are background.

use image::GrayImage;
use imageproc::contrast::ThresholdType;

/// Classify every sample against a global threshold level.
///
/// Foreground (255) iff `sample > level`; with `invert` the rule flips
/// so samples `<= level` become foreground instead. Both the manual
/// and automatic methods reduce to this call once a level is known.
#[must_use = "returns the binary mask"]
pub fn binarize(image: &GrayImage, level: u8, invert: bool) -> GrayImage {
    let kind = if invert {
        ThresholdType::BinaryInverted
    } else {
        ThresholdType::Binary
    };
    imageproc::contrast::threshold(image, level, kind)
}

/// Bitwise mask complement (255 ↔ 0).
///
/// Used by the range method's invert option, which flips the finished
/// mask rather than the interval bounds.
#[must_use = "returns the complemented mask"]
pub fn complement(mask: &GrayImage) -> GrayImage {
    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        image::Luma([!mask.get_pixel(x, y).0[0]])
    })
}
