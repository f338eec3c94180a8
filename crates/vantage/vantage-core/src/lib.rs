//! # vantage-core
//!
//! Foundation crate for the Vantage pattern engine.
//! Defines the data model, collaborator traits, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::VantageConfig;
pub use errors::{PipelineError, PipelineResult};
pub use types::{
    DiscoveryContext, FormatType, Interpretation, InterpretedPattern, Item, LifecycleStage,
    OpportunityWindow, PatternCandidate, PatternType, PerformanceStats, Stage,
};
