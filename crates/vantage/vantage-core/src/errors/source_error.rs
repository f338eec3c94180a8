//! Item source errors.

use super::error_code::{self, VantageErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("item source unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("item query failed: {reason}")]
    QueryFailed { reason: String },
}

impl VantageErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        error_code::SOURCE_ERROR
    }
}
