//! [`SemanticInterpreter`] over a free-text completion backend.

use std::fmt::Write;

use async_trait::async_trait;
use tracing::debug;
use vantage_core::errors::InterpreterError;
use vantage_core::traits::{SemanticInterpreter, TextCompletion};
use vantage_core::types::{Interpretation, InterpretationRequest};

use super::response::parse_interpretation_response;

/// Example titles shown per pattern in the prompt.
const PROMPT_EXAMPLES: usize = 3;

/// Render the batch prompt. Patterns are numbered so the backend can keep
/// positional correspondence.
pub fn build_prompt(request: &InterpretationRequest) -> String {
    let mut prompt = String::from(
        "You evaluate statistically discovered content patterns and judge whether each \
         reflects a real, actionable reason for audience interest or is a statistical artifact.\n\n",
    );

    if let Some(topic) = &request.topic {
        let _ = writeln!(prompt, "Topic: {topic}");
    }
    if let Some(count) = request.item_count {
        let _ = writeln!(prompt, "Items analyzed: {count}");
    }
    if let Some(baseline) = request.baseline_performance {
        let _ = writeln!(prompt, "Baseline performance ratio: {baseline:.2}");
    }

    let _ = writeln!(prompt, "\nPatterns:");
    for (i, p) in request.patterns.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "{}. {} | template: {} | evidence: {} items | avg performance: {:.2}x | confidence: {:.2}",
            i + 1,
            p.name,
            p.template,
            p.evidence_count,
            p.performance_stats.avg,
            p.confidence,
        );
        for example in p.examples.iter().take(PROMPT_EXAMPLES) {
            let _ = writeln!(prompt, "   - {example}");
        }
    }

    let _ = write!(
        prompt,
        "\nRespond with only a JSON array of exactly {} objects, one per pattern in order, each with: \
         \"is_meaningful\" (bool), \"actionability_score\" (integer 1-10), \"semantic_category\" (string), \
         \"why_it_works\" (string), \"best_use_cases\" (array of strings), \"warnings\" (array of strings), \
         \"interpretation_confidence\" (number 0-1).",
        request.patterns.len()
    );
    prompt
}

/// Interprets batches by prompting a [`TextCompletion`] backend and parsing
/// its reply through [`parse_interpretation_response`].
pub struct PromptedInterpreter<C> {
    backend: C,
    name: String,
}

impl<C: TextCompletion> PromptedInterpreter<C> {
    pub fn new(backend: C) -> Self {
        let name = format!("prompted:{}", backend.name());
        Self { backend, name }
    }
}

#[async_trait]
impl<C: TextCompletion> SemanticInterpreter for PromptedInterpreter<C> {
    async fn interpret_batch(
        &self,
        request: &InterpretationRequest,
    ) -> Result<Vec<Interpretation>, InterpreterError> {
        let prompt = build_prompt(request);
        debug!(
            backend = self.backend.name(),
            patterns = request.patterns.len(),
            prompt_len = prompt.len(),
            "requesting interpretation"
        );
        let raw = self.backend.complete(&prompt).await?;
        parse_interpretation_response(&raw, request.patterns.len())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
