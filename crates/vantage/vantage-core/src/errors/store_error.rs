//! Pattern store errors.

use super::error_code::{self, VantageErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to persist pattern {pattern_id}: {reason}")]
    PersistFailed { pattern_id: String, reason: String },
}

impl VantageErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        error_code::STORE_ERROR
    }
}
