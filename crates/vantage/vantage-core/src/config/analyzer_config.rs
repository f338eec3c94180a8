use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for the analyzer set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub ngram_min_len: usize,
    pub ngram_max_len: usize,
    pub ngram_min_items: usize,
    pub ngram_min_avg: f64,
    /// Drop n-grams made only of stop words ("how to", "you").
    pub ngram_skip_stop_word_only: bool,
    pub word_count_min_items: usize,
    pub word_count_min_avg: f64,
    pub feature_min_group: usize,
    /// Required `avg(has) / avg(has-not)`.
    pub feature_min_lift: f64,
    pub format_min_items: usize,
    /// Required `group_avg / baseline_avg`.
    pub format_min_lift: f64,
    pub duration_min_items: usize,
    pub duration_min_avg: f64,
    pub timing_min_items: usize,
    pub timing_min_avg: f64,
    pub topic_min_items: usize,
    /// Lift at which confidence reaches 1.0: `confidence = min(lift / scale, 1)`.
    pub confidence_scale: f64,
    /// Example titles kept per candidate.
    pub max_examples: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            ngram_min_len: defaults::DEFAULT_NGRAM_MIN_LEN,
            ngram_max_len: defaults::DEFAULT_NGRAM_MAX_LEN,
            ngram_min_items: defaults::DEFAULT_NGRAM_MIN_ITEMS,
            ngram_min_avg: defaults::DEFAULT_NGRAM_MIN_AVG,
            ngram_skip_stop_word_only: defaults::DEFAULT_NGRAM_SKIP_STOP_WORD_ONLY,
            word_count_min_items: defaults::DEFAULT_WORD_COUNT_MIN_ITEMS,
            word_count_min_avg: defaults::DEFAULT_WORD_COUNT_MIN_AVG,
            feature_min_group: defaults::DEFAULT_FEATURE_MIN_GROUP,
            feature_min_lift: defaults::DEFAULT_FEATURE_MIN_LIFT,
            format_min_items: defaults::DEFAULT_FORMAT_MIN_ITEMS,
            format_min_lift: defaults::DEFAULT_FORMAT_MIN_LIFT,
            duration_min_items: defaults::DEFAULT_DURATION_MIN_ITEMS,
            duration_min_avg: defaults::DEFAULT_DURATION_MIN_AVG,
            timing_min_items: defaults::DEFAULT_TIMING_MIN_ITEMS,
            timing_min_avg: defaults::DEFAULT_TIMING_MIN_AVG,
            topic_min_items: defaults::DEFAULT_TOPIC_MIN_ITEMS,
            confidence_scale: defaults::DEFAULT_CONFIDENCE_SCALE,
            max_examples: defaults::DEFAULT_MAX_EXAMPLES,
        }
    }
}

impl AnalyzerConfig {
    /// Confidence for a given lift, monotonic and capped at 1.0.
    pub fn confidence_for_lift(&self, lift: f64) -> f64 {
        if !lift.is_finite() || lift <= 0.0 || self.confidence_scale <= 0.0 {
            return 0.0;
        }
        (lift / self.confidence_scale).min(1.0)
    }
}
