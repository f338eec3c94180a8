//! End-to-end run: fetch → discover → dedup → interpret → select → persist.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use vantage_core::config::VantageConfig;
use vantage_core::errors::{PipelineError, PipelineResult};
use vantage_core::traits::{ItemSource, PatternStore, SemanticInterpreter};
use vantage_core::types::{DiscoveryContext, Interpretation, PatternCandidate};

use crate::dedup::{DedupDiagnostics, Deduplicator};
use crate::discovery::{DiscoveryDiagnostics, PatternDiscovery};
use crate::interpret::{InterpretationContext, InterpretationRunner};
use crate::lifecycle::LifecycleTracker;
use crate::selection::DiversitySelector;

/// A pattern chosen by the diversity selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedPattern {
    pub pattern: PatternCandidate,
    /// Present when an interpreter ran; always meaningful.
    pub interpretation: Option<Interpretation>,
}

impl AsRef<PatternCandidate> for SelectedPattern {
    fn as_ref(&self) -> &PatternCandidate {
        &self.pattern
    }
}

/// Output of one pipeline run.
#[derive(Debug, Default)]
pub struct PipelineOutput {
    pub selected: Vec<SelectedPattern>,
    pub discovery: DiscoveryDiagnostics,
    pub dedup: DedupDiagnostics,
    /// Patterns sent to the interpreter.
    pub interpreted: usize,
    /// Interpreted patterns judged meaningful.
    pub meaningful: usize,
    pub persisted: usize,
}

/// The full pattern engine.
pub struct PatternPipeline {
    config: VantageConfig,
    discovery: PatternDiscovery,
    deduplicator: Deduplicator,
    selector: DiversitySelector,
    interpreter: Option<InterpretationRunner>,
    store: Option<Arc<dyn PatternStore>>,
}

impl PatternPipeline {
    pub fn new(config: VantageConfig) -> Self {
        Self {
            discovery: PatternDiscovery::new(&config),
            deduplicator: Deduplicator::new(config.dedup.clone()),
            selector: DiversitySelector::new(config.selection.clone()),
            interpreter: None,
            store: None,
            config,
        }
    }

    /// Attach a semantic interpreter. Ignored when `interpreter.enabled` is false.
    pub fn with_interpreter(mut self, interpreter: Arc<dyn SemanticInterpreter>) -> Self {
        self.interpreter = Some(InterpretationRunner::new(
            interpreter,
            self.config.interpreter.clone(),
        ));
        self
    }

    pub fn with_store(mut self, store: Arc<dyn PatternStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn config(&self) -> &VantageConfig {
        &self.config
    }

    /// A lifecycle tracker sharing this pipeline's configuration.
    pub fn lifecycle_tracker(&self, source: Arc<dyn ItemSource>) -> LifecycleTracker {
        LifecycleTracker::new(source, self.config.lifecycle.clone())
    }

    /// Run the pipeline. Only a failure to fetch the initial item set is
    /// fatal; analyzer, interpreter and store failures are collected.
    pub async fn run(
        &self,
        source: &dyn ItemSource,
        ctx: &DiscoveryContext,
    ) -> Result<PipelineResult<PipelineOutput>, PipelineError> {
        let discovered = self.discovery.discover_patterns(source, ctx)?;
        let mut result = PipelineResult::<PipelineOutput>::default();
        result.errors.extend(discovered.errors);
        let report = discovered.data;
        result.data.discovery = report.diagnostics;

        let dedup = self.deduplicator.run(report.candidates);
        result.data.dedup = dedup.diagnostics;

        let candidates: Vec<SelectedPattern> = match &self.interpreter {
            Some(runner) if self.config.interpreter.enabled && !dedup.patterns.is_empty() => {
                let context = InterpretationContext {
                    topic: ctx.topic.clone(),
                    item_count: Some(result.data.discovery.items_qualifying),
                    baseline_performance: Some(result.data.discovery.baseline_performance),
                };
                let interpreted = runner.interpret_all(dedup.patterns, &context).await;
                result.data.interpreted = interpreted.data.len();
                result.errors.extend(interpreted.errors);
                interpreted
                    .data
                    .into_iter()
                    .filter(|p| p.is_meaningful())
                    .map(|p| SelectedPattern {
                        pattern: p.pattern,
                        interpretation: Some(p.interpretation),
                    })
                    .collect()
            }
            _ => dedup
                .patterns
                .into_iter()
                .map(|pattern| SelectedPattern {
                    pattern,
                    interpretation: None,
                })
                .collect(),
        };
        result.data.meaningful = candidates.len();

        let selected = self.selector.select(&candidates);

        if let Some(store) = &self.store {
            for s in &selected {
                match store.persist(&s.pattern, &s.pattern.associated_item_ids) {
                    Ok(()) => result.data.persisted += 1,
                    Err(e) => {
                        warn!(pattern = %s.pattern.id, error = %e, "failed to persist pattern");
                        result.add_error(e);
                    }
                }
            }
        }

        info!(
            selected = selected.len(),
            candidates = result.data.discovery.validated,
            after_dedup = result.data.dedup.output,
            meaningful = result.data.meaningful,
            persisted = result.data.persisted,
            errors = result.error_count(),
            "pattern pipeline complete"
        );
        result.data.selected = selected;
        Ok(result)
    }
}
