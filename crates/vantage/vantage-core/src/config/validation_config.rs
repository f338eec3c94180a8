use serde::{Deserialize, Serialize};

use super::defaults;

/// Minimum-evidence and confidence gate applied to raw candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_evidence: usize,
    pub min_confidence: f64,
    /// Together with `min_median`: reject when `variance > max_variance && median < min_median`.
    pub max_variance: f64,
    pub min_median: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_evidence: defaults::DEFAULT_MIN_EVIDENCE,
            min_confidence: defaults::DEFAULT_MIN_CONFIDENCE,
            max_variance: defaults::DEFAULT_MAX_VARIANCE,
            min_median: defaults::DEFAULT_MIN_MEDIAN,
        }
    }
}
