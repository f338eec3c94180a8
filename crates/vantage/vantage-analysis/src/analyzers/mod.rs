//! Analyzers: independent detectors, one per pattern type.
//!
//! Each analyzer consumes the qualifying item set and emits raw candidates.
//! Analyzers share no state and may run in any order or in parallel.

pub mod duration;
pub mod format;
pub mod grouping;
pub mod timing;
pub mod title_ngram;
pub mod title_structure;
pub mod topic_cluster;

use vantage_core::config::AnalyzerConfig;
use vantage_core::errors::AnalyzerError;
use vantage_core::types::{DiscoveryContext, Item, PatternCandidate, PatternType};

pub use duration::DurationAnalyzer;
pub use format::FormatAnalyzer;
pub use timing::TimingAnalyzer;
pub use title_ngram::TitleNgramAnalyzer;
pub use title_structure::TitleStructureAnalyzer;
pub use topic_cluster::TopicClusterAnalyzer;

/// Trait for pattern analyzers.
pub trait PatternAnalyzer: Send + Sync {
    fn name(&self) -> &'static str;
    fn pattern_type(&self) -> PatternType;
    /// Scan `items` for this analyzer's signal. An analyzer that finds
    /// nothing returns an empty vec, never an error.
    fn discover(
        &self,
        items: &[Item],
        ctx: &DiscoveryContext,
    ) -> Result<Vec<PatternCandidate>, AnalyzerError>;
}

/// The full analyzer set, one per [`PatternType`].
pub fn default_analyzers(config: &AnalyzerConfig) -> Vec<Box<dyn PatternAnalyzer>> {
    vec![
        Box::new(TitleNgramAnalyzer::new(config.clone())),
        Box::new(TitleStructureAnalyzer::new(config.clone())),
        Box::new(FormatAnalyzer::new(config.clone())),
        Box::new(DurationAnalyzer::new(config.clone())),
        Box::new(TimingAnalyzer::new(config.clone())),
        Box::new(TopicClusterAnalyzer::new(config.clone())),
    ]
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use vantage_core::types::{FormatType, Item};

    pub fn base_time() -> DateTime<Utc> {
        // A Monday.
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    pub fn item(id: &str, title: &str, ratio: f64) -> Item {
        Item {
            id: id.to_string(),
            title: title.to_string(),
            published_at: base_time(),
            view_count: (ratio * 1000.0).round() as u64,
            format_type: FormatType::Other,
            duration_seconds: 420,
            topic_cluster_id: None,
            baseline_views: Some(1000.0),
        }
    }

    pub fn items(prefix: &str, n: usize, title: &str, ratio: f64) -> Vec<Item> {
        (0..n)
            .map(|i| item(&format!("{prefix}{i}"), title, ratio))
            .collect()
    }

    pub fn days_later(mut it: Item, days: i64) -> Item {
        it.published_at += Duration::days(days);
        it
    }
}
