//! Compiled defaults for every tunable threshold.

// ---- Discovery ----

/// Runs with fewer qualifying items return no patterns.
pub const DEFAULT_MIN_VIDEOS: usize = 50;
/// Short-form exclusion: items shorter than this are dropped.
pub const DEFAULT_MIN_DURATION_SECONDS: u32 = 60;
/// Age at which an item's sampling confidence reaches 1.0.
pub const DEFAULT_SAMPLING_MATURITY_DAYS: f64 = 14.0;
pub const DEFAULT_PARALLEL_ANALYZERS: bool = true;

// ---- Analyzers ----

pub const DEFAULT_NGRAM_MIN_LEN: usize = 1;
pub const DEFAULT_NGRAM_MAX_LEN: usize = 3;
pub const DEFAULT_NGRAM_MIN_ITEMS: usize = 10;
pub const DEFAULT_NGRAM_MIN_AVG: f64 = 2.0;
pub const DEFAULT_NGRAM_SKIP_STOP_WORD_ONLY: bool = false;
pub const DEFAULT_WORD_COUNT_MIN_ITEMS: usize = 20;
pub const DEFAULT_WORD_COUNT_MIN_AVG: f64 = 1.5;
pub const DEFAULT_FEATURE_MIN_GROUP: usize = 20;
pub const DEFAULT_FEATURE_MIN_LIFT: f64 = 1.3;
pub const DEFAULT_FORMAT_MIN_ITEMS: usize = 15;
pub const DEFAULT_FORMAT_MIN_LIFT: f64 = 1.5;
pub const DEFAULT_DURATION_MIN_ITEMS: usize = 20;
pub const DEFAULT_DURATION_MIN_AVG: f64 = 1.8;
pub const DEFAULT_TIMING_MIN_ITEMS: usize = 15;
pub const DEFAULT_TIMING_MIN_AVG: f64 = 1.5;
pub const DEFAULT_TOPIC_MIN_ITEMS: usize = 30;
/// Lift at which analyzer confidence saturates at 1.0.
pub const DEFAULT_CONFIDENCE_SCALE: f64 = 2.0;
pub const DEFAULT_MAX_EXAMPLES: usize = 20;

// ---- Validation ----

pub const DEFAULT_MIN_EVIDENCE: usize = 30;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.8;
pub const DEFAULT_MAX_VARIANCE: f64 = 2.0;
pub const DEFAULT_MIN_MEDIAN: f64 = 1.0;

// ---- Dedup ----

pub const DEFAULT_TEMPLATE_SIMILARITY: f64 = 0.5;
pub const DEFAULT_NAME_SIMILARITY: f64 = 0.6;
pub const DEFAULT_EXAMPLE_SIMILARITY: f64 = 0.3;
pub const DEFAULT_GROUP_TEMPLATE_SIMILARITY: f64 = 0.3;
pub const DEFAULT_GROUP_NAME_SIMILARITY: f64 = 0.4;
pub const DEFAULT_MERGED_MAX_EXAMPLES: usize = 20;
pub const DEFAULT_MERGED_MAX_ITEM_IDS: usize = 30;

// ---- Selection ----

pub const DEFAULT_MAX_PATTERNS: usize = 10;

// ---- Interpreter ----

pub const DEFAULT_INTERPRETER_ENABLED: bool = true;
pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_MAX_CONCURRENT_BATCHES: usize = 3;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 8_000;
pub const DEFAULT_BATCH_TIMEOUT_MS: u64 = 30_000;

// ---- Lifecycle ----

pub const DEFAULT_SATURATION_WINDOW_DAYS: i64 = 30;
/// Saturation considered "taken over". Used by classification and the window estimate.
pub const DEFAULT_SATURATION_TARGET: f64 = 50.0;
pub const DEFAULT_EMERGING_MAX_SATURATION: f64 = 5.0;
pub const DEFAULT_EMERGING_MIN_GROWTH: f64 = 0.5;
pub const DEFAULT_GROWING_MAX_SATURATION: f64 = 20.0;
pub const DEFAULT_GROWING_MIN_GROWTH: f64 = 0.2;
pub const DEFAULT_SATURATED_TREND: f64 = -0.1;
pub const DEFAULT_DECLINING_GROWTH: f64 = -0.1;
pub const DEFAULT_DECLINING_TREND: f64 = -0.2;
pub const DEFAULT_TREND_WINDOW_WEEKS: usize = 3;
pub const DEFAULT_FORECAST_GROWTH_DECAY: f64 = 0.9;
pub const DEFAULT_FORECAST_UNCERTAINTY_STEP: f64 = 0.1;
/// Saturation (percentage points) the band is sized from when current saturation is lower.
pub const DEFAULT_FORECAST_BAND_FLOOR: f64 = 1.0;
pub const DEFAULT_CONFIDENCE_TIMELINE_CAP_WEEKS: usize = 20;
pub const DEFAULT_CONFIDENCE_POPULATION_CAP: usize = 1000;
