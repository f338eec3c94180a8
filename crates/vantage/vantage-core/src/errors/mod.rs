//! Error handling for Vantage.
//! One error enum per subsystem, `thiserror` only.

pub mod analyzer_error;
pub mod config_error;
pub mod error_code;
pub mod interpreter_error;
pub mod pipeline_error;
pub mod source_error;
pub mod store_error;

pub use analyzer_error::AnalyzerError;
pub use config_error::ConfigError;
pub use error_code::VantageErrorCode;
pub use interpreter_error::InterpreterError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use source_error::SourceError;
pub use store_error::StoreError;
