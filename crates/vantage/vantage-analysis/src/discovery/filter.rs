//! Local item qualification, applied on top of whatever the source filtered.

use vantage_core::config::DiscoveryConfig;
use vantage_core::types::{DiscoveryContext, Item};

/// Why an item was excluded from analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    MissingNormalization,
    ShortForm,
    LowSamplingConfidence,
    BelowPerformanceFloor,
}

/// Check a single item, returning the first exclusion that applies.
pub fn check_item(
    item: &Item,
    ctx: &DiscoveryContext,
    config: &DiscoveryConfig,
) -> Result<(), Exclusion> {
    if !item.has_normalization() {
        return Err(Exclusion::MissingNormalization);
    }
    if item.duration_seconds < config.min_duration_seconds {
        return Err(Exclusion::ShortForm);
    }
    if item.sampling_confidence(ctx.now, config.sampling_maturity_days)
        < ctx.min_sampling_confidence
    {
        return Err(Exclusion::LowSamplingConfidence);
    }
    if item.performance_ratio() < ctx.min_performance_ratio {
        return Err(Exclusion::BelowPerformanceFloor);
    }
    Ok(())
}

/// Split items into the qualifying set and per-reason exclusion tallies.
pub fn qualify_items(
    items: Vec<Item>,
    ctx: &DiscoveryContext,
    config: &DiscoveryConfig,
) -> (Vec<Item>, Vec<Exclusion>) {
    let mut kept = Vec::with_capacity(items.len());
    let mut excluded = Vec::new();
    for item in items {
        match check_item(&item, ctx, config) {
            Ok(()) => kept.push(item),
            Err(reason) => excluded.push(reason),
        }
    }
    (kept, excluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_support::{base_time, item};
    use chrono::Duration;

    #[test]
    fn excludes_in_priority_order() {
        let ctx = DiscoveryContext::default().at(base_time() + Duration::days(30));
        let config = DiscoveryConfig::default();

        let mut missing = item("a", "x", 2.0);
        missing.baseline_views = None;
        missing.duration_seconds = 10;
        assert_eq!(check_item(&missing, &ctx, &config), Err(Exclusion::MissingNormalization));

        let mut short = item("b", "x", 2.0);
        short.duration_seconds = 45;
        assert_eq!(check_item(&short, &ctx, &config), Err(Exclusion::ShortForm));

        assert_eq!(check_item(&item("c", "x", 2.0), &ctx, &config), Ok(()));
    }

    #[test]
    fn context_floors_apply() {
        let ctx = DiscoveryContext {
            min_performance_ratio: 1.5,
            min_sampling_confidence: 0.5,
            ..DiscoveryContext::default().at(base_time() + Duration::days(3))
        };
        let config = DiscoveryConfig::default();
        // 3 days of 14 → sampling confidence ~0.21
        assert_eq!(
            check_item(&item("a", "x", 2.0), &ctx, &config),
            Err(Exclusion::LowSamplingConfidence)
        );

        let ctx = DiscoveryContext {
            now: base_time() + Duration::days(20),
            ..ctx
        };
        assert_eq!(
            check_item(&item("b", "x", 1.0), &ctx, &config),
            Err(Exclusion::BelowPerformanceFloor)
        );

        let (kept, excluded) =
            qualify_items(vec![item("c", "x", 2.0), item("d", "x", 1.0)], &ctx, &config);
        assert_eq!(kept.len(), 1);
        assert_eq!(excluded, vec![Exclusion::BelowPerformanceFloor]);
    }
}
