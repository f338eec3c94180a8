//! Runs every analyzer over the qualifying item set and validates the output.

use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use tracing::{debug, info, warn};
use vantage_core::config::{DiscoveryConfig, VantageConfig};
use vantage_core::errors::{AnalyzerError, PipelineResult, SourceError};
use vantage_core::traits::ItemSource;
use vantage_core::types::{DiscoveryContext, Item, PatternCandidate};

use super::diagnostics::DiscoveryDiagnostics;
use super::filter::{qualify_items, Exclusion};
use super::validation::CandidateValidator;
use crate::analyzers::{default_analyzers, PatternAnalyzer};
use crate::stats::item_stats;

/// Validated candidates plus run diagnostics.
#[derive(Debug, Default)]
pub struct DiscoveryReport {
    pub candidates: Vec<PatternCandidate>,
    pub diagnostics: DiscoveryDiagnostics,
}

/// The discovery orchestrator.
pub struct PatternDiscovery {
    analyzers: Vec<Box<dyn PatternAnalyzer>>,
    config: DiscoveryConfig,
    validator: CandidateValidator,
}

impl PatternDiscovery {
    /// Orchestrator with the default analyzer set.
    pub fn new(config: &VantageConfig) -> Self {
        Self::with_analyzers(
            default_analyzers(&config.analyzers),
            config.discovery.clone(),
            CandidateValidator::new(config.validation.clone()),
        )
    }

    pub fn with_analyzers(
        analyzers: Vec<Box<dyn PatternAnalyzer>>,
        config: DiscoveryConfig,
        validator: CandidateValidator,
    ) -> Self {
        Self {
            analyzers,
            config,
            validator,
        }
    }

    pub fn analyzer_names(&self) -> Vec<&'static str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    /// Fetch items from `source` and discover validated candidates.
    ///
    /// A source failure aborts the run. Analyzer failures are isolated and
    /// reported through the result's error list.
    pub fn discover_patterns(
        &self,
        source: &dyn ItemSource,
        ctx: &DiscoveryContext,
    ) -> Result<PipelineResult<DiscoveryReport>, SourceError> {
        let items = source.fetch_qualifying_items(ctx)?;
        Ok(self.discover_from_items(items, ctx))
    }

    /// Discovery over an already-fetched item set.
    pub fn discover_from_items(
        &self,
        items: Vec<Item>,
        ctx: &DiscoveryContext,
    ) -> PipelineResult<DiscoveryReport> {
        let mut diagnostics = DiscoveryDiagnostics {
            items_fetched: items.len(),
            ..Default::default()
        };

        let (items, excluded) = qualify_items(items, ctx, &self.config);
        for reason in excluded {
            match reason {
                Exclusion::MissingNormalization => diagnostics.excluded_missing_normalization += 1,
                Exclusion::ShortForm => diagnostics.excluded_short_form += 1,
                Exclusion::LowSamplingConfidence => {
                    diagnostics.excluded_low_sampling_confidence += 1
                }
                Exclusion::BelowPerformanceFloor => {
                    diagnostics.excluded_below_performance_floor += 1
                }
            }
        }
        diagnostics.items_qualifying = items.len();
        diagnostics.baseline_performance = item_stats(&items).avg;

        if items.len() < ctx.min_videos {
            info!(
                qualifying = items.len(),
                required = ctx.min_videos,
                "insufficient data for pattern discovery"
            );
            diagnostics.insufficient_data = true;
            return PipelineResult::new(DiscoveryReport {
                candidates: Vec::new(),
                diagnostics,
            });
        }

        let outputs = self.run_analyzers(&items, ctx);

        let mut result = PipelineResult::default();
        let mut raw = Vec::new();
        for (name, output) in outputs {
            match output {
                Ok(candidates) => {
                    debug!(analyzer = name, count = candidates.len(), "analyzer finished");
                    diagnostics.raw_candidates.insert(name.to_string(), candidates.len());
                    raw.extend(candidates);
                }
                Err(e) => {
                    warn!(analyzer = name, error = %e, "analyzer failed, continuing without it");
                    diagnostics.failed_analyzers.push(name.to_string());
                    result.add_error(e);
                }
            }
        }

        let mut candidates = Vec::with_capacity(raw.len());
        for candidate in raw {
            match self.validator.check(&candidate) {
                Ok(()) => candidates.push(candidate),
                Err(reason) => {
                    *diagnostics
                        .rejected
                        .entry(reason.name().to_string())
                        .or_default() += 1;
                }
            }
        }
        diagnostics.validated = candidates.len();

        info!(%diagnostics, "pattern discovery complete");
        result.data = DiscoveryReport {
            candidates,
            diagnostics,
        };
        result
    }

    /// Outputs are returned in analyzer registration order either way.
    fn run_analyzers(
        &self,
        items: &[Item],
        ctx: &DiscoveryContext,
    ) -> Vec<(&'static str, Result<Vec<PatternCandidate>, AnalyzerError>)> {
        if self.config.parallel_analyzers {
            self.analyzers
                .par_iter()
                .map(|a| (a.name(), run_isolated(a.as_ref(), items, ctx)))
                .collect()
        } else {
            self.analyzers
                .iter()
                .map(|a| (a.name(), run_isolated(a.as_ref(), items, ctx)))
                .collect()
        }
    }
}

/// Run one analyzer, converting a panic into an [`AnalyzerError`].
fn run_isolated(
    analyzer: &dyn PatternAnalyzer,
    items: &[Item],
    ctx: &DiscoveryContext,
) -> Result<Vec<PatternCandidate>, AnalyzerError> {
    match panic::catch_unwind(AssertUnwindSafe(|| analyzer.discover(items, ctx))) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(AnalyzerError::Panicked {
                analyzer: analyzer.name().to_string(),
                message,
            })
        }
    }
}
