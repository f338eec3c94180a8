use serde::{Deserialize, Serialize};

use super::defaults;

/// Similarity cutoffs and merge caps for the deduplicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    pub template_similarity: f64,
    pub name_similarity: f64,
    pub example_similarity: f64,
    /// Relaxed template cutoff when both candidates share a keyword group.
    pub group_template_similarity: f64,
    /// Relaxed name cutoff when both candidates share a keyword group.
    pub group_name_similarity: f64,
    pub max_examples: usize,
    pub max_item_ids: usize,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            template_similarity: defaults::DEFAULT_TEMPLATE_SIMILARITY,
            name_similarity: defaults::DEFAULT_NAME_SIMILARITY,
            example_similarity: defaults::DEFAULT_EXAMPLE_SIMILARITY,
            group_template_similarity: defaults::DEFAULT_GROUP_TEMPLATE_SIMILARITY,
            group_name_similarity: defaults::DEFAULT_GROUP_NAME_SIMILARITY,
            max_examples: defaults::DEFAULT_MERGED_MAX_EXAMPLES,
            max_item_ids: defaults::DEFAULT_MERGED_MAX_ITEM_IDS,
        }
    }
}
