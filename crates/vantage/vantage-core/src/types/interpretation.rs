//! Semantic annotations returned by the external interpreter.

use serde::{Deserialize, Serialize};

use super::pattern::PatternCandidate;

/// A batch of validated patterns sent to the interpreter, with optional corpus context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterpretationRequest {
    pub patterns: Vec<PatternCandidate>,
    pub topic: Option<String>,
    pub item_count: Option<usize>,
    pub baseline_performance: Option<f64>,
}

/// Interpreter verdict for one pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub is_meaningful: bool,
    /// 1-10 for a real verdict, 0 for the fail-safe annotation.
    pub actionability_score: u8,
    #[serde(default)]
    pub semantic_category: String,
    #[serde(default)]
    pub why_it_works: String,
    #[serde(default)]
    pub best_use_cases: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub interpretation_confidence: f64,
}

impl Interpretation {
    /// Annotation applied to every pattern of a failed batch.
    /// Non-meaningful, so the pattern is excluded downstream.
    pub fn fail_safe(reason: &str) -> Self {
        Self {
            is_meaningful: false,
            actionability_score: 0,
            semantic_category: String::new(),
            why_it_works: String::new(),
            best_use_cases: Vec::new(),
            warnings: vec![format!("interpretation failed: {reason}")],
            interpretation_confidence: 0.0,
        }
    }

    /// Clamp scores into their documented ranges.
    pub fn normalized(mut self) -> Self {
        self.actionability_score = self.actionability_score.clamp(1, 10);
        self.interpretation_confidence = if self.interpretation_confidence.is_finite() {
            self.interpretation_confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }
}

/// A validated pattern plus its semantic annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretedPattern {
    pub pattern: PatternCandidate,
    pub interpretation: Interpretation,
}

impl InterpretedPattern {
    pub fn is_meaningful(&self) -> bool {
        self.interpretation.is_meaningful
    }
}

impl AsRef<PatternCandidate> for InterpretedPattern {
    fn as_ref(&self) -> &PatternCandidate {
        &self.pattern
    }
}
