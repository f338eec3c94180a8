//! Per-run discovery context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filters and thresholds for one discovery run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryContext {
    /// Topic filter forwarded to the item source.
    pub topic: Option<String>,
    /// Items below this performance ratio are not considered.
    pub min_performance_ratio: f64,
    /// Age-based sampling-confidence gate on items (not pattern confidence).
    pub min_sampling_confidence: f64,
    /// Below this many qualifying items the run returns nothing.
    pub min_videos: usize,
    /// Reference time for age computations.
    pub now: DateTime<Utc>,
}

impl DiscoveryContext {
    pub fn new(min_videos: usize) -> Self {
        Self {
            topic: None,
            min_performance_ratio: 0.0,
            min_sampling_confidence: 0.0,
            min_videos,
            now: Utc::now(),
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

impl Default for DiscoveryContext {
    fn default() -> Self {
        Self::new(crate::config::defaults::DEFAULT_MIN_VIDEOS)
    }
}

impl From<&crate::config::DiscoveryConfig> for DiscoveryContext {
    fn from(config: &crate::config::DiscoveryConfig) -> Self {
        Self::new(config.min_videos)
    }
}
