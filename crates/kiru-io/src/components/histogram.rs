//! Intensity histogram panel rendered as inline SVG.

use std::fmt::Write;

use dioxus::prelude::*;
use kiru_segment::histogram::BINS;

/// Props for the [`HistogramPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct HistogramPanelProps {
    /// Intensity frequencies over 256 bins.
    histogram: [u32; BINS],
}

/// Renders the intensity distribution as one vertical bar per bin.
///
/// The SVG `viewBox` maps one bin to one horizontal unit and the
/// tallest bin to the full height; `preserveAspectRatio: none` lets
/// the panel stretch to its container.
#[component]
pub fn HistogramPanel(props: HistogramPanelProps) -> Element {
    let d = build_bars_data(&props.histogram);

    rsx! {
        div { class: "histogram-card",
            p { class: "histogram-title", "Intensity Distribution" }
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 256 100",
                class: "histogram-svg",
                "preserveAspectRatio": "none",

                if !d.is_empty() {
                    path {
                        d: "{d}",
                        fill: "none",
                        stroke: "var(--accent)",
                        stroke_width: "1",
                    }
                }
            }
        }
    }
}

/// Build an SVG path drawing one vertical line per non-empty bin,
/// scaled so the tallest bin spans the full `viewBox` height.
///
/// Bars are centered on `bin + 0.5` so a 1-unit stroke fills exactly
/// one bin column. Returns an empty string for an all-zero histogram.
#[allow(clippy::cast_precision_loss)]
fn build_bars_data(histogram: &[u32; BINS]) -> String {
    let Some(max) = histogram.iter().copied().max().filter(|&m| m > 0) else {
        return String::new();
    };

    let mut d = String::new();
    for (bin, &count) in histogram.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let top = 100.0 - f64::from(count) / f64::from(max) * 100.0;
        let _ = write!(d, "M{:.1},100.0 V{top:.1} ", bin as f64 + 0.5);
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_histogram_builds_no_path() {
        assert_eq!(build_bars_data(&[0; BINS]), "");
    }

    #[test]
    fn tallest_bin_reaches_the_top() {
        let mut hist = [0u32; BINS];
        hist[7] = 40;
        hist[200] = 10;
        let d = build_bars_data(&hist);
        // Bin 7 is the maximum: its bar spans the full height.
        assert!(d.contains("M7.5,100.0 V0.0"), "path was {d:?}");
        // Bin 200 is a quarter of the maximum.
        assert!(d.contains("M200.5,100.0 V75.0"), "path was {d:?}");
    }

    #[test]
    fn empty_bins_are_skipped() {
        let mut hist = [0u32; BINS];
        hist[3] = 5;
        let d = build_bars_data(&hist);
        assert_eq!(d.matches('M').count(), 1);
    }
}
