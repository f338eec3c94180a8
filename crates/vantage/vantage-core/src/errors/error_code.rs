//! Stable error codes for callers that cross a process boundary.

/// Every error enum implements this to provide a structured code string.
pub trait VantageErrorCode {
    /// Returns the error code string (e.g., "ANALYZER_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const ANALYZER_ERROR: &str = "ANALYZER_ERROR";
pub const INTERPRETER_ERROR: &str = "INTERPRETER_ERROR";
pub const INTERPRETER_TIMEOUT: &str = "INTERPRETER_TIMEOUT";
pub const SOURCE_ERROR: &str = "SOURCE_ERROR";
pub const STORE_ERROR: &str = "STORE_ERROR";
