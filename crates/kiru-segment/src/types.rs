//! Shared types for the kiru segmentation core.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference intensity
/// images and masks without depending on `image` directly.
pub use image::GrayImage;

/// Re-export `RgbaImage` so downstream crates can reference the
/// original decoded image without depending on `image` directly.
pub use image::RgbaImage;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Segmentation method together with its per-method parameters.
///
/// The three methods map to a tagged variant with one handler per tag
/// in [`crate::segment`] — there is no runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentMethod {
    /// Global thresholding at a user-chosen level.
    Manual {
        /// Cutoff intensity. Samples above it become foreground.
        threshold: u8,
    },
    /// Global thresholding at the histogram-optimal level.
    ///
    /// The level is computed per call by maximizing between-class
    /// variance over the intensity histogram; see [`crate::otsu`].
    Automatic,
    /// Membership masking over a closed intensity interval.
    ///
    /// Valid only when `lower <= upper`; [`crate::segment`] rejects
    /// inverted bounds with [`SegmentError::InvalidParameter`] rather
    /// than silently swapping them.
    Range {
        /// Inclusive lower bound of the foreground interval.
        lower: u8,
        /// Inclusive upper bound of the foreground interval.
        upper: u8,
    },
}

/// Configuration for one segmentation run.
///
/// Rebuilt from widget state on every interaction — no mutable state
/// crosses calls. The `invert` flag is orthogonal to the method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Which segmentation method to apply.
    pub method: SegmentMethod,
    /// Flip foreground and background in the output mask.
    pub invert: bool,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            method: SegmentMethod::Manual { threshold: 127 },
            invert: false,
        }
    }
}

/// The threshold parameters that were actually applied.
///
/// For the automatic method this carries the computed level, so the
/// display string always reflects the effective parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveThreshold {
    /// A single global cutoff (manual or computed).
    Single(u8),
    /// An inclusive intensity interval.
    Range {
        /// Inclusive lower bound.
        lower: u8,
        /// Inclusive upper bound.
        upper: u8,
    },
}

impl fmt::Display for ActiveThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(level) => write!(f, "{level}"),
            Self::Range { lower, upper } => write!(f, "{lower}-{upper}"),
        }
    }
}

/// Result of segmenting one intensity image.
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Binary mask with the input's dimensions; every sample is 0 or 255.
    pub mask: GrayImage,
    /// The effective threshold parameters, for display.
    pub threshold: ActiveThreshold,
}

/// Result of the full decode-and-segment pipeline with every
/// intermediate the UI displays.
///
/// Wrapped in `Rc` by the application so Dioxus diffs by pointer
/// identity instead of walking pixel data.
#[derive(Debug, Clone)]
pub struct StagedSegmentation {
    /// Decoded upload (pre-grayscale), for the side-by-side preview.
    pub original: RgbaImage,
    /// Luma reduction of the upload — the image the selector consumed.
    pub grayscale: GrayImage,
    /// Intensity frequencies over 256 bins.
    pub histogram: [u32; 256],
    /// Binary segmentation mask.
    pub mask: GrayImage,
    /// The effective threshold parameters, for display.
    pub threshold: ActiveThreshold,
    /// Dimensions of the decoded image in pixels.
    pub dimensions: Dimensions,
}

/// Errors that can occur while decoding or segmenting.
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    /// Failed to decode the uploaded image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// A segmentation parameter is out of its valid domain.
    #[error("invalid segmentation parameter: {0}")]
    InvalidParameter(String),

    /// The image has zero width or height.
    #[error("image has zero width or height")]
    EmptyImage,
}
