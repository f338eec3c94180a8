//! Semantic interpretation: batching, retry, fail-safe degradation, and the
//! response adapter for text-completion backends.

pub mod prompted;
pub mod response;
pub mod runner;

pub use prompted::{build_prompt, PromptedInterpreter};
pub use response::parse_interpretation_response;
pub use runner::{InterpretationContext, InterpretationRunner};
