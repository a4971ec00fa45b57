//! Pixel-intensity histogram.
//!
//! Wraps [`imageproc::stats::histogram`] to count intensity
//! frequencies over 256 bins. The histogram feeds both the automatic
//! threshold search and the UI's distribution panel.

use image::GrayImage;

/// Number of intensity bins, one per 8-bit sample value.
pub const BINS: usize = 256;

/// Count intensity frequencies over [`BINS`] bins.
///
/// Bin `i` holds the number of samples with value exactly `i`. The
/// counts sum to `width * height`.
#[must_use = "returns the intensity histogram"]
pub fn intensity_histogram(image: &GrayImage) -> [u32; BINS] {
    imageproc::stats::histogram(image)
        .channels
        .first()
        .map_or([0; BINS], |counts| *counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_image_fills_one_bin() {
        let img = GrayImage::from_fn(8, 4, |_, _| image::Luma([42]));
        let hist = intensity_histogram(&img);
        assert_eq!(hist[42], 32);
        let total: u32 = hist.iter().sum();
        assert_eq!(total, 32);
    }

    #[test]
    fn counts_sum_to_pixel_count() {
        #[allow(clippy::cast_possible_truncation)]
        let img = GrayImage::from_fn(16, 16, |x, y| image::Luma([((x * 16 + y) % 256) as u8]));
        let hist = intensity_histogram(&img);
        let total: u32 = hist.iter().sum();
        assert_eq!(total, 256);
    }

    #[test]
    fn distinct_values_land_in_distinct_bins() {
        let mut img = GrayImage::new(2, 1);
        img.put_pixel(0, 0, image::Luma([10]));
        img.put_pixel(1, 0, image::Luma([240]));
        let hist = intensity_histogram(&img);
        assert_eq!(hist[10], 1);
        assert_eq!(hist[240], 1);
        assert_eq!(hist[11], 0);
    }
}
