//! Closed-interval range masking.
//!
//! Classifies samples by membership in `[lower, upper]` rather than by
//! comparison to a single cutoff, which lets the user isolate a band
//! of intensities (the "multilevel" mode of the source tool).

use image::GrayImage;

use crate::threshold;

/// Classify every sample by membership in the closed interval
/// `[lower, upper]`.
///
/// Foreground (255) iff `lower <= sample <= upper`. With `invert` the
/// finished mask is complemented, so foreground becomes everything
/// *outside* the interval — the bounds themselves are never flipped.
/// For `lower == upper` only samples exactly equal to that value are
/// foreground.
///
/// Callers must guarantee `lower <= upper`; [`crate::segment`]
/// validates this before dispatching here.
#[must_use = "returns the binary mask"]
pub fn range_mask(image: &GrayImage, lower: u8, upper: u8, invert: bool) -> GrayImage {
    let mask = GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let sample = image.get_pixel(x, y).0[0];
        image::Luma([if (lower..=upper).contains(&sample) {
            255
        } else {
            0
        }])
    });

    if invert {
        threshold::complement(&mask)
    } else {
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::cast_possible_truncation)]
    fn gradient_row() -> GrayImage {
        GrayImage::from_fn(16, 1, |x, _| image::Luma([(x * 16) as u8]))
    }

    #[test]
    fn samples_inside_interval_are_foreground() {
        let img = gradient_row();
        let mask = range_mask(&img, 50, 200, false);
        for (x, _, pixel) in mask.enumerate_pixels() {
            let sample = img.get_pixel(x, 0).0[0];
            let expected = if (50..=200).contains(&sample) { 255 } else { 0 };
            assert_eq!(pixel.0[0], expected, "sample {sample} at x={x}");
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut img = GrayImage::new(3, 1);
        img.put_pixel(0, 0, image::Luma([50]));
        img.put_pixel(1, 0, image::Luma([200]));
        img.put_pixel(2, 0, image::Luma([201]));

        let mask = range_mask(&img, 50, 200, false);
        assert_eq!(mask.get_pixel(0, 0).0[0], 255);
        assert_eq!(mask.get_pixel(1, 0).0[0], 255);
        assert_eq!(mask.get_pixel(2, 0).0[0], 0);
    }

    #[test]
    fn degenerate_interval_selects_exact_value() {
        let img = gradient_row();
        let mask = range_mask(&img, 96, 96, false);
        for (x, _, pixel) in mask.enumerate_pixels() {
            let sample = img.get_pixel(x, 0).0[0];
            let expected = if sample == 96 { 255 } else { 0 };
            assert_eq!(pixel.0[0], expected);
        }
    }

    #[test]
    fn inverted_mask_is_bitwise_complement() {
        let img = gradient_row();
        let plain = range_mask(&img, 50, 200, false);
        let inverted = range_mask(&img, 50, 200, true);
        for (x, y, pixel) in inverted.enumerate_pixels() {
            assert_eq!(pixel.0[0], !plain.get_pixel(x, y).0[0]);
        }
    }

    #[test]
    fn full_interval_selects_everything() {
        let img = gradient_row();
        let mask = range_mask(&img, 0, 255, false);
        assert!(mask.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn output_dimensions_match_input() {
        let img = GrayImage::new(13, 29);
        let mask = range_mask(&img, 10, 20, false);
        assert_eq!(mask.width(), 13);
        assert_eq!(mask.height(), 29);
    }
}
