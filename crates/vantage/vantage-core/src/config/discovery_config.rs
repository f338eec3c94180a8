use serde::{Deserialize, Serialize};

use super::defaults;

/// Discovery orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Default `min_videos` for contexts built from config.
    pub min_videos: usize,
    /// Items shorter than this are excluded (short-form exclusion).
    pub min_duration_seconds: u32,
    /// Age at which item sampling confidence reaches 1.0.
    pub sampling_maturity_days: f64,
    /// Run analyzers on the rayon pool instead of sequentially.
    pub parallel_analyzers: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            min_videos: defaults::DEFAULT_MIN_VIDEOS,
            min_duration_seconds: defaults::DEFAULT_MIN_DURATION_SECONDS,
            sampling_maturity_days: defaults::DEFAULT_SAMPLING_MATURITY_DAYS,
            parallel_analyzers: defaults::DEFAULT_PARALLEL_ANALYZERS,
        }
    }
}
