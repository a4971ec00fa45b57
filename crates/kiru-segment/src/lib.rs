//! kiru-segment: Pure image segmentation core (sans-IO).
//!
//! Converts raster images into binary masks via three methods:
//! manual global thresholding, automatic global thresholding
//! (histogram-optimal level search), and closed-interval range
//! masking, each with an orthogonal invert option.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured data. All browser interaction
//! lives in `kiru-io`.

pub mod grayscale;
pub mod histogram;
pub mod otsu;
pub mod range;
pub mod threshold;
pub mod types;

pub use types::{
    ActiveThreshold, Dimensions, GrayImage, RgbaImage, SegmentConfig, SegmentError,
    SegmentMethod, Segmentation, StagedSegmentation,
};

/// Segment an intensity image according to `config`.
///
/// Pure and deterministic: identical inputs produce bitwise-identical
/// masks, including the automatic method (its level search depends
/// only on the image's histogram).
///
/// # Method behavior
///
/// - **Manual**: foreground iff `sample > threshold` (flipped by
///   `invert`). The reported threshold is the given one, unchanged.
/// - **Automatic**: the level maximizing between-class variance over
///   the intensity histogram is computed, then applied exactly like a
///   manual threshold. The reported threshold is the computed level.
/// - **Range**: foreground iff `lower <= sample <= upper`; `invert`
///   complements the finished mask.
///
/// # Errors
///
/// Returns [`SegmentError::EmptyImage`] if `image` has zero width or
/// height. Returns [`SegmentError::InvalidParameter`] for a range with
/// `lower > upper` — bounds are rejected, never silently swapped.
pub fn segment(image: &GrayImage, config: &SegmentConfig) -> Result<Segmentation, SegmentError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(SegmentError::EmptyImage);
    }

    match config.method {
        SegmentMethod::Manual { threshold } => Ok(Segmentation {
            mask: threshold::binarize(image, threshold, config.invert),
            threshold: ActiveThreshold::Single(threshold),
        }),

        SegmentMethod::Automatic => {
            let level = otsu::optimal_level(&histogram::intensity_histogram(image));
            Ok(Segmentation {
                mask: threshold::binarize(image, level, config.invert),
                threshold: ActiveThreshold::Single(level),
            })
        }

        SegmentMethod::Range { lower, upper } => {
            if lower > upper {
                return Err(SegmentError::InvalidParameter(format!(
                    "range lower bound {lower} exceeds upper bound {upper}"
                )));
            }
            Ok(Segmentation {
                mask: range::range_mask(image, lower, upper, config.invert),
                threshold: ActiveThreshold::Range { lower, upper },
            })
        }
    }
}

/// Run the full decode-and-segment pipeline.
///
/// Takes raw image bytes (PNG, JPEG, TIFF) and a configuration, then
/// produces a [`StagedSegmentation`] retaining every intermediate the
/// UI displays: the decoded original, the intensity image, its
/// histogram, and the selector's mask and effective threshold.
///
/// # Pipeline steps
///
/// 1. Decode image; keep the RGBA original and the luma reduction
/// 2. Count the 256-bin intensity histogram
/// 3. Segment per the configured method
///
/// # Errors
///
/// Returns [`SegmentError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`SegmentError::ImageDecode`] if the image format is
/// unrecognized. Propagates [`segment`]'s parameter validation.
pub fn process_staged(
    image_bytes: &[u8],
    config: &SegmentConfig,
) -> Result<StagedSegmentation, SegmentError> {
    // 1. Decode; keep both the display image and the intensity image.
    let (original, intensity) = grayscale::decode_to_intensity(image_bytes)?;
    let dimensions = Dimensions {
        width: intensity.width(),
        height: intensity.height(),
    };

    // 2. Histogram (displayed by the UI, independent of the method).
    let hist = histogram::intensity_histogram(&intensity);

    // 3. Segment.
    let Segmentation { mask, threshold } = segment(&intensity, config)?;

    Ok(StagedSegmentation {
        original,
        grayscale: intensity,
        histogram: hist,
        mask,
        threshold,
        dimensions,
    })
}
