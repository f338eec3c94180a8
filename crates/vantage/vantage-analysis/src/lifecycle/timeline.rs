//! Weekly timeline and the rate signals derived from it.

use std::collections::BTreeMap;

use chrono::Datelike;
use vantage_core::types::{Item, WeeklyBucket};

use crate::stats::performance_stats;

/// Bucket items by ISO week of `published_at`. Only observed weeks appear,
/// in chronological order.
pub fn weekly_timeline(items: &[Item]) -> Vec<WeeklyBucket> {
    let mut ordered: Vec<&Item> = items.iter().collect();
    ordered.sort_by(|a, b| a.published_at.cmp(&b.published_at).then_with(|| a.id.cmp(&b.id)));

    let mut weeks: BTreeMap<(i32, u32), Vec<f64>> = BTreeMap::new();
    for item in ordered {
        let week = item.published_at.iso_week();
        weeks
            .entry((week.year(), week.week()))
            .or_default()
            .push(item.performance_ratio());
    }

    weeks
        .into_iter()
        .map(|((iso_year, iso_week), ratios)| WeeklyBucket {
            iso_year,
            iso_week,
            count: ratios.len(),
            avg_performance: performance_stats(&ratios).avg,
        })
        .collect()
}

/// Week-over-week relative count changes.
fn growth_values(timeline: &[WeeklyBucket]) -> Vec<f64> {
    timeline
        .windows(2)
        .filter(|w| w[0].count > 0)
        .map(|w| (w[1].count as f64 - w[0].count as f64) / w[0].count as f64)
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Mean week-over-week relative count change; 0 with fewer than two weeks.
pub fn growth_rate(timeline: &[WeeklyBucket]) -> f64 {
    mean(&growth_values(timeline))
}

/// Mean of the last two growth values minus the mean of the first two;
/// 0 with fewer than two growth values.
pub fn acceleration(timeline: &[WeeklyBucket]) -> f64 {
    let growth = growth_values(timeline);
    if growth.len() < 2 {
        return 0.0;
    }
    mean(&growth[growth.len() - 2..]) - mean(&growth[..2])
}

/// Relative change between the mean weekly performance of the last `window`
/// weeks and the first `window` weeks.
pub fn performance_trend(timeline: &[WeeklyBucket], window: usize) -> f64 {
    if timeline.len() < 2 || window == 0 {
        return 0.0;
    }
    let window = window.min(timeline.len());
    let perf: Vec<f64> = timeline.iter().map(|w| w.avg_performance).collect();
    let first = mean(&perf[..window]);
    let last = mean(&perf[perf.len() - window..]);
    if first <= 0.0 {
        return 0.0;
    }
    (last - first) / first
}

/// Items per observed week.
pub fn adoption_rate(timeline: &[WeeklyBucket]) -> f64 {
    if timeline.is_empty() {
        return 0.0;
    }
    let total: usize = timeline.iter().map(|w| w.count).sum();
    total as f64 / timeline.len() as f64
}
