use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Batching, concurrency, and retry policy for the semantic interpreter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    pub enabled: bool,
    pub batch_size: usize,
    pub max_concurrent_batches: usize,
    /// Retries after the first attempt, transient failures only.
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    /// Per-attempt timeout.
    pub timeout_ms: u64,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_INTERPRETER_ENABLED,
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            max_concurrent_batches: defaults::DEFAULT_MAX_CONCURRENT_BATCHES,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_MAX_BACKOFF_MS,
            timeout_ms: defaults::DEFAULT_BATCH_TIMEOUT_MS,
        }
    }
}

impl InterpreterConfig {
    /// Exponential backoff before retry `attempt` (1-based), capped at `max_backoff_ms`.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(20);
        let ms = self
            .initial_backoff_ms
            .saturating_mul(1u64 << exp)
            .min(self.max_backoff_ms);
        Duration::from_millis(ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
