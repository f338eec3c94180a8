//! Pattern candidates produced by analyzers and refined by dedup/interpretation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::collections::BTreeMap;

/// Category of recurring signal an analyzer scans for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    TitleNgram,
    TitleStructure,
    Format,
    Duration,
    Timing,
    TopicCluster,
}

impl PatternType {
    pub const ALL: [PatternType; 6] = [
        Self::TitleNgram,
        Self::TitleStructure,
        Self::Format,
        Self::Duration,
        Self::Timing,
        Self::TopicCluster,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TitleNgram => "title_ngram",
            Self::TitleStructure => "title_structure",
            Self::Format => "format",
            Self::Duration => "duration",
            Self::Timing => "timing",
            Self::TopicCluster => "topic_cluster",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Summary statistics over the performance ratios of a group of items.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceStats {
    pub avg: f64,
    pub median: f64,
    /// Mean squared deviation from `avg`.
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// A recurring signal found in the item corpus.
///
/// Created by analyzers, mutated only by the deduplicator (merge) and the
/// interpreter (annotation), immutable once selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternCandidate {
    /// Deterministic identifier, `<pattern_type>:<key>`.
    pub id: String,
    pub pattern_type: PatternType,
    /// Human label.
    pub name: String,
    /// Generalized descriptor string.
    pub template: String,
    /// Always equals `associated_item_ids.len()`.
    pub evidence_count: usize,
    /// Statistical confidence in [0, 1], monotonic in performance lift.
    pub confidence: f64,
    pub performance_stats: PerformanceStats,
    /// Bounded sample of supporting item titles.
    pub examples: Vec<String>,
    pub associated_item_ids: Vec<String>,
    /// Analyzer-specific extras (lift, format distribution, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl PatternCandidate {
    /// Build a candidate whose evidence count is derived from its item ids.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pattern_type: PatternType,
        key: &str,
        name: impl Into<String>,
        template: impl Into<String>,
        confidence: f64,
        performance_stats: PerformanceStats,
        examples: Vec<String>,
        associated_item_ids: Vec<String>,
    ) -> Self {
        Self {
            id: format!("{}:{}", pattern_type.name(), key),
            pattern_type,
            name: name.into(),
            template: template.into(),
            evidence_count: associated_item_ids.len(),
            confidence: confidence.clamp(0.0, 1.0),
            performance_stats,
            examples,
            associated_item_ids,
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: &str, value: serde_json::Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    /// The quantity merge and selection rank by. Same as `performance_stats.avg`.
    pub fn performance_metric(&self) -> f64 {
        self.performance_stats.avg
    }

    /// `performance_metric × confidence`.
    pub fn score(&self) -> f64 {
        self.performance_metric() * self.confidence
    }

    /// Restore `evidence_count == associated_item_ids.len()` after mutation.
    pub fn reconcile(&mut self) {
        self.evidence_count = self.associated_item_ids.len();
    }

    /// Whether the evidence invariant holds.
    pub fn is_consistent(&self) -> bool {
        self.evidence_count == self.associated_item_ids.len()
    }
}

impl AsRef<PatternCandidate> for PatternCandidate {
    fn as_ref(&self) -> &PatternCandidate {
        self
    }
}
