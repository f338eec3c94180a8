//! Lifecycle tracker & forecaster.
//!
//! Weekly adoption timeline → growth/acceleration/trend → saturation against
//! the topic cluster → stage, competitive advantage, opportunity window, and
//! a decaying-growth saturation forecast.

pub mod forecast;
pub mod stage;
pub mod timeline;
pub mod tracker;

pub use forecast::project_saturation;
pub use stage::{
    analysis_confidence, classify_stage, competitive_advantage, opportunity_window, StageSignals,
};
pub use timeline::{acceleration, adoption_rate, growth_rate, performance_trend, weekly_timeline};
pub use tracker::{assess_lifecycle, dominant_cluster, saturation_percentage, LifecycleTracker};
