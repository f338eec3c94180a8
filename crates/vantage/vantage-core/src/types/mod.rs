//! Data model shared by every stage of the pattern engine.

pub mod collections;
pub mod context;
pub mod interpretation;
pub mod item;
pub mod lifecycle;
pub mod pattern;

pub use context::DiscoveryContext;
pub use interpretation::{InterpretationRequest, Interpretation, InterpretedPattern};
pub use item::{FormatType, Item};
pub use lifecycle::{
    ForecastPoint, LifecycleStage, OpportunityWindow, SaturationForecast, Stage, WeeklyBucket,
};
pub use pattern::{PatternCandidate, PatternType, PerformanceStats};
