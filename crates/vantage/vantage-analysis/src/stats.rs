//! The performance-stat primitive shared by every analyzer.

use statrs::statistics::{Data, Median, Statistics};
use vantage_core::types::{Item, PerformanceStats};

/// `avg/median/variance/min/max/count` over a set of performance ratios.
///
/// `variance` is the population variance (mean squared deviation from `avg`).
/// An empty input yields all-zero stats.
pub fn performance_stats(ratios: &[f64]) -> PerformanceStats {
    if ratios.is_empty() {
        return PerformanceStats::default();
    }

    let avg = ratios.iter().mean();
    let variance = ratios.iter().population_variance();
    let median = Data::new(ratios.to_vec()).median();
    let (min, max) = ratios
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    PerformanceStats {
        avg,
        median,
        variance: if variance.is_finite() { variance } else { 0.0 },
        min,
        max,
        count: ratios.len(),
    }
}

/// Stats over the performance ratios of a group of items.
pub fn item_stats<'a>(items: impl IntoIterator<Item = &'a Item>) -> PerformanceStats {
    let ratios: Vec<f64> = items.into_iter().map(Item::performance_ratio).collect();
    performance_stats(&ratios)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_zeroed() {
        let s = performance_stats(&[]);
        assert_eq!(s.count, 0);
        assert_eq!(s.avg, 0.0);
    }

    #[test]
    fn single_value_has_zero_variance() {
        let s = performance_stats(&[2.5]);
        assert_eq!(s.count, 1);
        assert!((s.avg - 2.5).abs() < 1e-12);
        assert!((s.median - 2.5).abs() < 1e-12);
        assert_eq!(s.variance, 0.0);
    }

    #[test]
    fn variance_is_mean_squared_deviation() {
        // mean 2.5, deviations: 2.25, 0.25, 0.25, 2.25 → 5.0 / 4
        let s = performance_stats(&[1.0, 2.0, 3.0, 4.0]);
        assert!((s.avg - 2.5).abs() < 1e-12);
        assert!((s.variance - 1.25).abs() < 1e-12);
        assert!((s.median - 2.5).abs() < 1e-12);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
    }

    #[test]
    fn median_of_odd_count() {
        let s = performance_stats(&[9.0, 1.0, 3.0]);
        assert!((s.median - 3.0).abs() < 1e-12);
    }
}
