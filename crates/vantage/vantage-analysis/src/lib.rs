//! # vantage-analysis
//!
//! Mines recurring success patterns from a scored item corpus.
//!
//! Stages: analyzer set → discovery orchestrator (validation) → deduplicator →
//! optional semantic interpretation → diversity selector. The lifecycle
//! tracker is invoked independently per surviving pattern.

pub mod analyzers;
pub mod dedup;
pub mod discovery;
pub mod interpret;
pub mod lifecycle;
pub mod pipeline;
pub mod selection;
pub mod stats;
pub mod text;

pub use analyzers::{default_analyzers, PatternAnalyzer};
pub use dedup::{Deduplicator, DedupOutcome};
pub use discovery::{CandidateValidator, DiscoveryReport, PatternDiscovery};
pub use interpret::{InterpretationRunner, PromptedInterpreter};
pub use lifecycle::LifecycleTracker;
pub use pipeline::{PatternPipeline, PipelineOutput, SelectedPattern};
pub use selection::DiversitySelector;
