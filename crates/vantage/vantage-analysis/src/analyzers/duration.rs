//! Duration analyzer: fixed minute buckets.

use vantage_core::config::AnalyzerConfig;
use vantage_core::errors::AnalyzerError;
use vantage_core::types::{DiscoveryContext, Item, PatternCandidate, PatternType};

use super::grouping::{group_by, Evidence};
use super::PatternAnalyzer;

/// `[low, high)` minute ranges with their labels.
const BUCKETS: [(f64, f64, &str); 5] = [
    (1.0, 5.0, "1-5"),
    (5.0, 10.0, "5-10"),
    (10.0, 15.0, "10-15"),
    (15.0, 25.0, "15-25"),
    (25.0, f64::INFINITY, "25+"),
];

/// Index of the duration bucket an item falls into, if any.
pub fn duration_bucket(item: &Item) -> Option<usize> {
    let minutes = item.duration_minutes();
    BUCKETS
        .iter()
        .position(|(lo, hi, _)| minutes >= *lo && minutes < *hi)
}

pub struct DurationAnalyzer {
    config: AnalyzerConfig,
}

impl DurationAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }
}

impl PatternAnalyzer for DurationAnalyzer {
    fn name(&self) -> &'static str {
        "duration"
    }

    fn pattern_type(&self) -> PatternType {
        PatternType::Duration
    }

    fn discover(
        &self,
        items: &[Item],
        _ctx: &DiscoveryContext,
    ) -> Result<Vec<PatternCandidate>, AnalyzerError> {
        let mut candidates = Vec::new();
        for (bucket, members) in &group_by(items, duration_bucket) {
            if members.len() < self.config.duration_min_items {
                continue;
            }
            let evidence = Evidence::collect(members, self.config.max_examples);
            if evidence.stats.avg <= self.config.duration_min_avg {
                continue;
            }
            let label = BUCKETS[*bucket].2;
            candidates.push(PatternCandidate::new(
                PatternType::Duration,
                &format!("{label}min"),
                format!("{label} minute videos"),
                format!("duration:{label}min"),
                self.config.confidence_for_lift(evidence.stats.avg),
                evidence.stats,
                evidence.examples,
                evidence.item_ids,
            ));
        }
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_support::{item, items};

    #[test]
    fn bucket_edges_are_half_open() {
        let mut it = item("a", "x", 1.0);
        it.duration_seconds = 300;
        assert_eq!(duration_bucket(&it), Some(1));
        it.duration_seconds = 299;
        assert_eq!(duration_bucket(&it), Some(0));
        it.duration_seconds = 59;
        assert_eq!(duration_bucket(&it), None);
        it.duration_seconds = 3 * 3600;
        assert_eq!(duration_bucket(&it), Some(4));
    }

    #[test]
    fn emits_bucket_above_threshold() {
        // test_support items are 7 minutes long.
        let corpus = items("d", 20, "x", 2.0);
        let found = DurationAnalyzer::new(AnalyzerConfig::default())
            .discover(&corpus, &DiscoveryContext::default())
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "duration:5-10min");
        assert_eq!(found[0].template, "duration:5-10min");
    }

    #[test]
    fn average_must_exceed_threshold() {
        let corpus = items("d", 20, "x", 1.8);
        let found = DurationAnalyzer::new(AnalyzerConfig::default())
            .discover(&corpus, &DiscoveryContext::default())
            .unwrap();
        assert!(found.is_empty());
    }
}
