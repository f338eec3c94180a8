//! Analyzer errors. Always isolated to the failing analyzer.

use super::error_code::{self, VantageErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Analyzer {analyzer} failed: {message}")]
    Failed { analyzer: String, message: String },

    #[error("Analyzer {analyzer} panicked: {message}")]
    Panicked { analyzer: String, message: String },

    #[error("Analyzer {analyzer} received invalid input: {message}")]
    InvalidInput { analyzer: String, message: String },
}

impl AnalyzerError {
    pub fn analyzer(&self) -> &str {
        match self {
            Self::Failed { analyzer, .. }
            | Self::Panicked { analyzer, .. }
            | Self::InvalidInput { analyzer, .. } => analyzer,
        }
    }
}

impl VantageErrorCode for AnalyzerError {
    fn error_code(&self) -> &'static str {
        error_code::ANALYZER_ERROR
    }
}
