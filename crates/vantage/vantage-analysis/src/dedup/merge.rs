//! Merging two near-duplicate candidates into one.

use std::cmp::Ordering;

use serde_json::json;
use vantage_core::config::DedupConfig;
use vantage_core::types::{PatternCandidate, PerformanceStats};

/// Metadata key listing the ids of candidates absorbed into this one.
pub const MERGED_FROM_KEY: &str = "merged_from";

/// Total order deciding which candidate is primary.
///
/// Higher `performance_stats.avg` wins, then higher confidence, then the
/// lexically smaller id, so the choice never depends on argument order.
fn primary_order(a: &PatternCandidate, b: &PatternCandidate) -> Ordering {
    a.performance_stats
        .avg
        .total_cmp(&b.performance_stats.avg)
        .then_with(|| a.confidence.total_cmp(&b.confidence))
        .then_with(|| b.id.cmp(&a.id))
}

/// Merge two candidates. `merge_candidates(a, b) == merge_candidates(b, a)`.
///
/// Template, name and the median/variance come from the primary. Examples and
/// item ids are the primary's followed by the secondary's non-duplicates,
/// capped. Confidence and the average are arithmetic means of the two.
pub fn merge_candidates(
    a: &PatternCandidate,
    b: &PatternCandidate,
    config: &DedupConfig,
) -> PatternCandidate {
    let (primary, secondary) = match primary_order(a, b) {
        Ordering::Less => (b, a),
        _ => (a, b),
    };

    let mut merged = primary.clone();

    for example in &secondary.examples {
        if !merged.examples.contains(example) {
            merged.examples.push(example.clone());
        }
    }
    merged.examples.truncate(config.max_examples);

    for id in &secondary.associated_item_ids {
        if !merged.associated_item_ids.contains(id) {
            merged.associated_item_ids.push(id.clone());
        }
    }
    merged.associated_item_ids.truncate(config.max_item_ids);
    merged.reconcile();

    merged.confidence = ((primary.confidence + secondary.confidence) / 2.0).clamp(0.0, 1.0);
    let (p, s) = (&primary.performance_stats, &secondary.performance_stats);
    merged.performance_stats = PerformanceStats {
        avg: (p.avg + s.avg) / 2.0,
        median: p.median,
        variance: p.variance,
        min: p.min.min(s.min),
        max: p.max.max(s.max),
        count: merged.evidence_count,
    };

    let mut merged_from: Vec<String> = merged_ids(primary)
        .into_iter()
        .chain(merged_ids(secondary))
        .chain(std::iter::once(secondary.id.clone()))
        .collect();
    merged_from.sort();
    merged_from.dedup();
    merged
        .metadata
        .insert(MERGED_FROM_KEY.to_string(), json!(merged_from));

    merged
}

fn merged_ids(candidate: &PatternCandidate) -> Vec<String> {
    candidate
        .metadata
        .get(MERGED_FROM_KEY)
        .and_then(|v| v.as_array())
        .map(|ids| {
            ids.iter()
                .filter_map(|id| id.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
