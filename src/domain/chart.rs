//! Chart scaling for click-series bar charts.

use crate::domain::series::ClickPoint;

/// Minimum rendered height fraction for any bucket.
///
/// Zero-click buckets render at this floor instead of collapsing to
/// nothing, so they stay visible and selectable in the chart.
pub const MIN_BAR_FRACTION: f64 = 0.04;

/// Vertical scale for a series: the maximum point count, floored at 1.
///
/// The floor guarantees a non-zero denominator when computing bar heights
/// as fractions, including for empty and all-zero series.
pub fn scale_max(points: &[ClickPoint]) -> i64 {
    points.iter().map(|p| p.count).max().unwrap_or(0).max(1)
}

/// Height fraction for one bucket against a series scale, in `0.0..=1.0`,
/// clamped below at [`MIN_BAR_FRACTION`].
pub fn bar_fraction(count: i64, scale: i64) -> f64 {
    let fraction = count as f64 / scale.max(1) as f64;
    fraction.max(MIN_BAR_FRACTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::Bucket;

    fn month_points(counts: &[i64]) -> Vec<ClickPoint> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| ClickPoint::new(Bucket::Month(i as u32 + 1), c))
            .collect()
    }

    #[test]
    fn test_scale_max_picks_largest_count() {
        assert_eq!(scale_max(&month_points(&[3, 10, 7])), 10);
    }

    #[test]
    fn test_scale_max_floors_at_one() {
        assert_eq!(scale_max(&[]), 1);
        assert_eq!(scale_max(&month_points(&[0, 0, 0])), 1);
    }

    #[test]
    fn test_all_zero_series_renders_at_the_floor() {
        let points = month_points(&[0, 0, 0, 0]);
        let scale = scale_max(&points);

        for p in &points {
            assert_eq!(bar_fraction(p.count, scale), MIN_BAR_FRACTION);
        }
    }

    #[test]
    fn test_full_bar_is_one() {
        let points = month_points(&[2, 8]);
        let scale = scale_max(&points);
        assert_eq!(bar_fraction(8, scale), 1.0);
        assert_eq!(bar_fraction(2, scale), 0.25);
    }

    #[test]
    fn test_small_nonzero_count_is_clamped_to_floor() {
        assert_eq!(bar_fraction(1, 1000), MIN_BAR_FRACTION);
    }
}
