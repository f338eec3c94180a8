use async_trait::async_trait;

use crate::errors::InterpreterError;
use crate::types::{Interpretation, InterpretationRequest};

/// Batch scorer for real-world meaningfulness of patterns.
///
/// The response must correspond positionally to `request.patterns`:
/// entry `i` annotates pattern `i`.
#[async_trait]
pub trait SemanticInterpreter: Send + Sync {
    async fn interpret_batch(
        &self,
        request: &InterpretationRequest,
    ) -> Result<Vec<Interpretation>, InterpreterError>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

/// Free-text completion backend (an LLM endpoint).
///
/// Only reachable through the interpretation response adapter, so raw text
/// never flows into the rest of the pipeline.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, InterpreterError>;

    fn name(&self) -> &str;
}
