//! Format analyzer: formats outperforming the corpus baseline.

use serde_json::json;
use vantage_core::config::AnalyzerConfig;
use vantage_core::errors::AnalyzerError;
use vantage_core::types::{DiscoveryContext, Item, PatternCandidate, PatternType};

use super::grouping::{group_by, Evidence};
use super::PatternAnalyzer;
use crate::stats::item_stats;

pub struct FormatAnalyzer {
    config: AnalyzerConfig,
}

impl FormatAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }
}

impl PatternAnalyzer for FormatAnalyzer {
    fn name(&self) -> &'static str {
        "format"
    }

    fn pattern_type(&self) -> PatternType {
        PatternType::Format
    }

    fn discover(
        &self,
        items: &[Item],
        _ctx: &DiscoveryContext,
    ) -> Result<Vec<PatternCandidate>, AnalyzerError> {
        let baseline = item_stats(items).avg;
        if baseline <= 0.0 {
            return Ok(Vec::new());
        }

        let mut candidates = Vec::new();
        for (format, members) in &group_by(items, |i| Some(i.format_type)) {
            if members.len() < self.config.format_min_items {
                continue;
            }
            let evidence = Evidence::collect(members, self.config.max_examples);
            let lift = evidence.stats.avg / baseline;
            if lift <= self.config.format_min_lift {
                continue;
            }
            candidates.push(
                PatternCandidate::new(
                    PatternType::Format,
                    format.name(),
                    format!("{} format", capitalize(format.name())),
                    format!("format:{format}"),
                    self.config.confidence_for_lift(lift),
                    evidence.stats,
                    evidence.examples,
                    evidence.item_ids,
                )
                .with_metadata("lift", json!(lift))
                .with_metadata("baseline_avg", json!(baseline)),
            );
        }
        Ok(candidates)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
