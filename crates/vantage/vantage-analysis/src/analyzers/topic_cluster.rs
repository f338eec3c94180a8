//! Topic cluster analyzer: large topic clusters with their format mix.

use std::collections::BTreeMap;

use serde_json::json;
use vantage_core::config::AnalyzerConfig;
use vantage_core::errors::AnalyzerError;
use vantage_core::types::{DiscoveryContext, FormatType, Item, PatternCandidate, PatternType};

use super::grouping::{group_by, Evidence};
use super::PatternAnalyzer;

pub struct TopicClusterAnalyzer {
    config: AnalyzerConfig,
}

impl TopicClusterAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }
}

/// Share of each format within a group, keyed by format name.
fn format_distribution(members: &[&Item]) -> (BTreeMap<&'static str, f64>, Option<FormatType>) {
    let mut counts: BTreeMap<FormatType, usize> = BTreeMap::new();
    for item in members {
        *counts.entry(item.format_type).or_default() += 1;
    }
    let total = members.len().max(1) as f64;
    // Ties resolve to the earlier format in declaration order.
    let dominant = counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(f, _)| *f);
    let shares = counts
        .into_iter()
        .map(|(f, n)| (f.name(), n as f64 / total))
        .collect();
    (shares, dominant)
}

impl PatternAnalyzer for TopicClusterAnalyzer {
    fn name(&self) -> &'static str {
        "topic_cluster"
    }

    fn pattern_type(&self) -> PatternType {
        PatternType::TopicCluster
    }

    fn discover(
        &self,
        items: &[Item],
        _ctx: &DiscoveryContext,
    ) -> Result<Vec<PatternCandidate>, AnalyzerError> {
        let mut candidates = Vec::new();
        for (cluster, members) in &group_by(items, |i| i.topic_cluster_id.clone()) {
            if members.len() < self.config.topic_min_items {
                continue;
            }
            let (distribution, dominant) = format_distribution(members);
            let evidence = Evidence::collect(members, self.config.max_examples);
            let mut candidate = PatternCandidate::new(
                PatternType::TopicCluster,
                cluster,
                format!("Topic cluster {cluster}"),
                format!("topic:{cluster}"),
                self.config.confidence_for_lift(evidence.stats.avg),
                evidence.stats,
                evidence.examples,
                evidence.item_ids,
            )
            .with_metadata("cluster_id", json!(cluster))
            .with_metadata("format_distribution", json!(distribution));
            if let Some(format) = dominant {
                candidate = candidate.with_metadata("dominant_format", json!(format.name()));
            }
            candidates.push(candidate);
        }
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_support::items;

    fn in_cluster(mut v: Vec<Item>, cluster: &str, format: FormatType) -> Vec<Item> {
        for i in &mut v {
            i.topic_cluster_id = Some(cluster.to_string());
            i.format_type = format;
        }
        v
    }

    #[test]
    fn large_cluster_is_emitted_with_format_mix() {
        let mut corpus = in_cluster(items("a", 20, "x", 1.5), "c1", FormatType::Review);
        corpus.extend(in_cluster(items("b", 10, "y", 1.5), "c1", FormatType::Tutorial));
        corpus.extend(in_cluster(items("c", 29, "z", 5.0), "c2", FormatType::Vlog));
        let found = TopicClusterAnalyzer::new(AnalyzerConfig::default())
            .discover(&corpus, &DiscoveryContext::default())
            .unwrap();
        assert_eq!(found.len(), 1);
        let c = &found[0];
        assert_eq!(c.id, "topic_cluster:c1");
        assert_eq!(c.evidence_count, 30);
        assert_eq!(c.metadata["dominant_format"], json!("review"));
        let share = c.metadata["format_distribution"]["tutorial"].as_f64().unwrap();
        assert!((share - 1.0 / 3.0).abs() < 1e-9);
        assert!((c.confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn unclustered_items_are_ignored() {
        let corpus = items("a", 50, "x", 3.0);
        let found = TopicClusterAnalyzer::new(AnalyzerConfig::default())
            .discover(&corpus, &DiscoveryContext::default())
            .unwrap();
        assert!(found.is_empty());
    }
}
