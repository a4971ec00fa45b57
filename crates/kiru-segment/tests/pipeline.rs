//! Integration test: drive encoded images through the full
//! decode-and-segment pipeline, per method.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use kiru_segment::{
    ActiveThreshold, SegmentConfig, SegmentError, SegmentMethod, process_staged,
};

/// Encode an RGB image with a left/dark, right/bright split as PNG.
fn split_rgb_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            image::Rgb([20, 20, 20])
        } else {
            image::Rgb([230, 230, 230])
        }
    });
    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    image::ImageEncoder::write_image(
        encoder,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgb8,
    )
    .unwrap();
    buf
}

#[test]
fn manual_segmentation_end_to_end() {
    let png = split_rgb_png(24, 12);
    let config = SegmentConfig {
        method: SegmentMethod::Manual { threshold: 100 },
        invert: false,
    };

    let staged = process_staged(&png, &config).expect("pipeline should succeed");

    assert_eq!(staged.dimensions.width, 24);
    assert_eq!(staged.dimensions.height, 12);
    assert_eq!(staged.threshold.to_string(), "100");

    // Equal R/G/B channels reduce to the same luma value, so the dark
    // half sits near 20 and the bright half near 230.
    assert_eq!(staged.mask.get_pixel(0, 0).0[0], 0);
    assert_eq!(staged.mask.get_pixel(23, 11).0[0], 255);
    assert!(staged.mask.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
}

#[test]
fn automatic_segmentation_matches_manual_at_reported_level() {
    let png = split_rgb_png(24, 12);
    let auto = process_staged(
        &png,
        &SegmentConfig {
            method: SegmentMethod::Automatic,
            invert: false,
        },
    )
    .unwrap();

    let ActiveThreshold::Single(level) = auto.threshold else {
        unreachable!("automatic mode reports a single level");
    };
    let manual = process_staged(
        &png,
        &SegmentConfig {
            method: SegmentMethod::Manual { threshold: level },
            invert: false,
        },
    )
    .unwrap();

    assert_eq!(auto.mask, manual.mask);
}

#[test]
fn range_segmentation_respects_interval_and_invert() {
    let png = split_rgb_png(24, 12);
    let plain = process_staged(
        &png,
        &SegmentConfig {
            method: SegmentMethod::Range {
                lower: 0,
                upper: 100,
            },
            invert: false,
        },
    )
    .unwrap();
    let inverted = process_staged(
        &png,
        &SegmentConfig {
            method: SegmentMethod::Range {
                lower: 0,
                upper: 100,
            },
            invert: true,
        },
    )
    .unwrap();

    assert_eq!(plain.threshold.to_string(), "0-100");
    assert_eq!(plain.mask.get_pixel(0, 0).0[0], 255);
    assert_eq!(plain.mask.get_pixel(23, 0).0[0], 0);

    for (x, y, pixel) in inverted.mask.enumerate_pixels() {
        assert_eq!(pixel.0[0], !plain.mask.get_pixel(x, y).0[0]);
    }
}

#[test]
fn invalid_range_bounds_surface_from_the_pipeline() {
    let png = split_rgb_png(8, 8);
    let result = process_staged(
        &png,
        &SegmentConfig {
            method: SegmentMethod::Range {
                lower: 200,
                upper: 50,
            },
            invert: false,
        },
    );
    assert!(matches!(result, Err(SegmentError::InvalidParameter(_))));
}

#[test]
fn histogram_covers_every_decoded_sample() {
    let png = split_rgb_png(24, 12);
    let staged = process_staged(&png, &SegmentConfig::default()).unwrap();
    let total: u32 = staged.histogram.iter().sum();
    assert_eq!(total, 24 * 12);
}
