//! Semantic interpreter errors.

use super::error_code::{self, VantageErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpreterError {
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("rate limited by upstream")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("batch timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("response has {actual} entries, batch has {expected}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("request rejected: {reason}")]
    Rejected { reason: String },
}

impl InterpreterError {
    /// Transient failures are retried with backoff; the rest fail the batch at once.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::RateLimited { .. } | Self::Timeout { .. }
        )
    }
}

impl VantageErrorCode for InterpreterError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => error_code::INTERPRETER_TIMEOUT,
            _ => error_code::INTERPRETER_ERROR,
        }
    }
}
