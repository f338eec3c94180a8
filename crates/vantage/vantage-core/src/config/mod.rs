//! Configuration system for Vantage.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod analyzer_config;
pub mod dedup_config;
pub mod defaults;
pub mod discovery_config;
pub mod interpreter_config;
pub mod lifecycle_config;
pub mod selection_config;
pub mod validation_config;
pub mod vantage_config;

pub use analyzer_config::AnalyzerConfig;
pub use dedup_config::DedupConfig;
pub use discovery_config::DiscoveryConfig;
pub use interpreter_config::InterpreterConfig;
pub use lifecycle_config::{LifecycleConfig, StageAdvantage};
pub use selection_config::SelectionConfig;
pub use validation_config::ValidationConfig;
pub use vantage_config::{CliOverrides, VantageConfig};
