//! Lifecycle tracker over an [`ItemSource`].

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;
use vantage_core::config::LifecycleConfig;
use vantage_core::errors::SourceError;
use vantage_core::traits::ItemSource;
use vantage_core::types::collections::FxHashMap;
use vantage_core::types::{Item, LifecycleStage, PatternCandidate, SaturationForecast};

use super::forecast::project_saturation;
use super::stage::{
    analysis_confidence, classify_stage, competitive_advantage, opportunity_window, StageSignals,
};
use super::timeline::{acceleration, adoption_rate, growth_rate, performance_trend, weekly_timeline};

/// Most common topic cluster among `items`; ties go to the smaller id.
pub fn dominant_cluster(items: &[Item]) -> Option<String> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for item in items {
        if let Some(cluster) = item.topic_cluster_id.as_deref() {
            *counts.entry(cluster).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(cluster, _)| cluster.to_string())
}

/// `min(100, 100 × evidence / population)`; 0 for an empty population.
pub fn saturation_percentage(evidence_count: usize, cluster_population: usize) -> f64 {
    if cluster_population == 0 {
        return 0.0;
    }
    (100.0 * evidence_count as f64 / cluster_population as f64).min(100.0)
}

/// Lifecycle classification from already-resolved inputs. Deterministic.
pub fn assess_lifecycle(
    pattern: &PatternCandidate,
    items: &[Item],
    cluster_population: usize,
    config: &LifecycleConfig,
) -> LifecycleStage {
    let timeline = weekly_timeline(items);
    let signals = StageSignals {
        saturation: saturation_percentage(pattern.evidence_count, cluster_population),
        growth_rate: growth_rate(&timeline),
        acceleration: acceleration(&timeline),
        performance_trend: performance_trend(&timeline, config.trend_window_weeks),
    };
    let stage = classify_stage(&signals, config);

    LifecycleStage {
        stage,
        adoption_rate: adoption_rate(&timeline),
        saturation_percentage: signals.saturation,
        competitive_advantage: competitive_advantage(
            stage,
            signals.saturation,
            signals.performance_trend,
            config,
        ),
        estimated_window: opportunity_window(stage, signals.saturation, signals.growth_rate, config),
        analysis_confidence: analysis_confidence(timeline.len(), cluster_population, config),
        growth_rate: signals.growth_rate,
        acceleration: signals.acceleration,
        performance_trend: signals.performance_trend,
        timeline,
    }
}

/// Resolves a pattern's items and cluster population through an
/// [`ItemSource`] and classifies its lifecycle.
pub struct LifecycleTracker {
    source: Arc<dyn ItemSource>,
    config: LifecycleConfig,
    now: Option<DateTime<Utc>>,
}

impl LifecycleTracker {
    pub fn new(source: Arc<dyn ItemSource>, config: LifecycleConfig) -> Self {
        Self {
            source,
            config,
            now: None,
        }
    }

    /// Pin the reference time used for the trailing saturation window.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn analyze_lifecycle(
        &self,
        pattern: &PatternCandidate,
        item_ids: &[String],
    ) -> Result<LifecycleStage, SourceError> {
        let (items, population) = self.observe(item_ids)?;
        let lifecycle = assess_lifecycle(pattern, &items, population, &self.config);
        debug!(
            pattern = %pattern.id,
            stage = %lifecycle.stage,
            saturation = lifecycle.saturation_percentage,
            "lifecycle analyzed"
        );
        Ok(lifecycle)
    }

    pub fn forecast_saturation(
        &self,
        pattern: &PatternCandidate,
        item_ids: &[String],
        weeks_ahead: u32,
    ) -> Result<SaturationForecast, SourceError> {
        let (items, population) = self.observe(item_ids)?;
        let current = saturation_percentage(pattern.evidence_count, population);
        let growth = growth_rate(&weekly_timeline(&items));
        Ok(SaturationForecast {
            pattern_id: pattern.id.clone(),
            current_saturation: current,
            growth_rate: growth,
            points: project_saturation(current, growth, weeks_ahead, &self.config),
        })
    }

    /// The pattern's items and the trailing-window population of its cluster.
    fn observe(&self, item_ids: &[String]) -> Result<(Vec<Item>, usize), SourceError> {
        let items = self.source.fetch_items(item_ids)?;
        let population = match dominant_cluster(&items) {
            Some(cluster) => {
                let now = self.now.unwrap_or_else(Utc::now);
                let since = now - Duration::days(self.config.saturation_window_days);
                self.source.count_cluster_items(&cluster, since)?
            }
            None => 0,
        };
        Ok((items, population))
    }
}
