//! Automatic threshold selection by between-class variance.
//!
//! Implements the histogram-optimal search behind the automatic
//! segmentation method: every candidate level splits the histogram
//! into a background class (samples `<= level`) and a foreground class
//! (samples `> level`), and the level whose split maximizes the
//! weighted between-class variance wins. Ties resolve to the lowest
//! level, so the search is fully deterministic.

use crate::histogram::BINS;

/// Compute the threshold level maximizing between-class variance.
///
/// Splits that leave either class empty are never candidates, so a
/// uniform (single-valued) histogram yields the default level 0 and
/// the whole image lands in one class. An all-zero histogram (empty
/// image) also yields 0; callers reject empty images before display.
///
/// Class weights and sums are accumulated in integers; only the class
/// means and the variance product are computed in floating point, so
/// the result is exact and reproducible for a given histogram.
#[must_use = "returns the selected threshold level"]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn optimal_level(histogram: &[u32; BINS]) -> u8 {
    let total: u64 = histogram.iter().map(|&count| u64::from(count)).sum();
    let weighted_total: u64 = histogram
        .iter()
        .enumerate()
        .map(|(value, &count)| value as u64 * u64::from(count))
        .sum();

    let mut weight_background: u64 = 0;
    let mut sum_background: u64 = 0;
    let mut best_level = 0u8;
    let mut best_variance = 0.0f64;

    for (level, &count) in histogram.iter().enumerate() {
        weight_background += u64::from(count);
        if weight_background == 0 {
            continue;
        }
        let weight_foreground = total - weight_background;
        if weight_foreground == 0 {
            break;
        }

        sum_background += level as u64 * u64::from(count);
        let mean_background = sum_background as f64 / weight_background as f64;
        let mean_foreground =
            (weighted_total - sum_background) as f64 / weight_foreground as f64;

        let separation = mean_background - mean_foreground;
        let variance =
            weight_background as f64 * weight_foreground as f64 * separation * separation;

        // Strictly-greater keeps the lowest level on ties.
        if variance > best_variance {
            best_variance = variance;
            best_level = level as u8;
        }
    }

    best_level
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram_of(pairs: &[(usize, u32)]) -> [u32; BINS] {
        let mut hist = [0u32; BINS];
        for &(value, count) in pairs {
            hist[value] = count;
        }
        hist
    }

    #[test]
    fn empty_histogram_defaults_to_zero() {
        assert_eq!(optimal_level(&[0; BINS]), 0);
    }

    #[test]
    fn uniform_histogram_defaults_to_zero() {
        // Every sample in one bin: no split produces two non-empty
        // classes, so the level stays at the default.
        assert_eq!(optimal_level(&histogram_of(&[(128, 400)])), 0);
        assert_eq!(optimal_level(&histogram_of(&[(0, 7)])), 0);
        assert_eq!(optimal_level(&histogram_of(&[(255, 7)])), 0);
    }

    #[test]
    fn bimodal_histogram_splits_at_lower_cluster() {
        // Clusters at 10 and 240: every level in 10..=239 separates
        // them identically, and the tie resolves to the lowest.
        let hist = histogram_of(&[(10, 50), (240, 50)]);
        assert_eq!(optimal_level(&hist), 10);
    }

    #[test]
    fn unbalanced_clusters_still_separate() {
        let hist = histogram_of(&[(20, 1000), (200, 10)]);
        let level = optimal_level(&hist);
        assert!(
            (20..200).contains(&level),
            "expected a separating level, got {level}",
        );
    }

    #[test]
    fn adjacent_values_split_between_them() {
        let hist = histogram_of(&[(100, 30), (101, 30)]);
        assert_eq!(optimal_level(&hist), 100);
    }

    #[test]
    fn level_is_deterministic() {
        let hist = histogram_of(&[(15, 3), (80, 9), (220, 12)]);
        assert_eq!(optimal_level(&hist), optimal_level(&hist));
    }
}
