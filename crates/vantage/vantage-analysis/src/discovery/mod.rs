//! Discovery orchestrator: qualify items, run the analyzer set, validate.

pub mod diagnostics;
pub mod filter;
pub mod orchestrator;
pub mod validation;

pub use diagnostics::DiscoveryDiagnostics;
pub use filter::{qualify_items, Exclusion};
pub use orchestrator::{DiscoveryReport, PatternDiscovery};
pub use validation::{CandidateValidator, Rejection};
