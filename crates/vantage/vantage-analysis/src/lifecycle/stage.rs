//! Stage classification, competitive advantage, opportunity window.

use vantage_core::config::LifecycleConfig;
use vantage_core::types::{OpportunityWindow, Stage};

/// Inputs to stage classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageSignals {
    /// 0-100.
    pub saturation: f64,
    pub growth_rate: f64,
    pub acceleration: f64,
    pub performance_trend: f64,
}

/// Ordered rules, first match wins.
///
/// With default thresholds the `declining` rule is shadowed by `saturated`
/// (any trend below -0.2 is also below -0.1); it becomes reachable when
/// `saturated_trend` is configured below `declining_trend`.
pub fn classify_stage(s: &StageSignals, config: &LifecycleConfig) -> Stage {
    if s.saturation < config.emerging_max_saturation && s.growth_rate > config.emerging_min_growth
    {
        Stage::Emerging
    } else if s.saturation < config.growing_max_saturation
        && s.growth_rate > config.growing_min_growth
    {
        Stage::Growing
    } else if s.saturation < config.saturation_target && s.acceleration >= 0.0 {
        Stage::Mature
    } else if s.saturation >= config.saturation_target
        || s.performance_trend < config.saturated_trend
    {
        Stage::Saturated
    } else if s.growth_rate < config.declining_growth
        && s.performance_trend < config.declining_trend
    {
        Stage::Declining
    } else {
        Stage::Mature
    }
}

/// Remaining edge for a new adopter, in [0, 1].
pub fn competitive_advantage(
    stage: Stage,
    saturation: f64,
    performance_trend: f64,
    config: &LifecycleConfig,
) -> f64 {
    let multiplier = match stage {
        Stage::Emerging => config.advantage.emerging,
        Stage::Growing => config.advantage.growing,
        Stage::Mature => config.advantage.mature,
        Stage::Saturated => config.advantage.saturated,
        Stage::Declining => config.advantage.declining,
    };
    let mut advantage = (1.0 - saturation / 100.0) * multiplier;
    if performance_trend < 0.0 {
        advantage *= 1.0 + performance_trend;
    }
    if advantage.is_finite() {
        advantage.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Time left before the pattern reaches the saturation target at its
/// current growth rate.
pub fn opportunity_window(
    stage: Stage,
    saturation: f64,
    growth_rate: f64,
    config: &LifecycleConfig,
) -> OpportunityWindow {
    match stage {
        Stage::Saturated | Stage::Declining => return OpportunityWindow::Closed,
        Stage::Emerging => return OpportunityWindow::EarlyMover,
        Stage::Growing | Stage::Mature => {}
    }
    if saturation >= config.saturation_target {
        return OpportunityWindow::UnderOneWeek;
    }
    if growth_rate <= 0.0 || saturation <= 0.0 {
        return OpportunityWindow::OverFourWeeks;
    }

    let weeks = (config.saturation_target / saturation).ln() / (1.0 + growth_rate).ln();
    match weeks {
        w if w < 1.0 => OpportunityWindow::UnderOneWeek,
        w if w < 2.0 => OpportunityWindow::OneToTwoWeeks,
        w if w < 4.0 => OpportunityWindow::TwoToFourWeeks,
        _ => OpportunityWindow::OverFourWeeks,
    }
}

/// `0.5 + 0.3 × timeline share + 0.2 × population share`, each share capped at 1.
pub fn analysis_confidence(weeks: usize, population: usize, config: &LifecycleConfig) -> f64 {
    let share = |n: usize, cap: usize| {
        if cap == 0 {
            1.0
        } else {
            n.min(cap) as f64 / cap as f64
        }
    };
    0.5 + 0.3 * share(weeks, config.confidence_timeline_cap_weeks)
        + 0.2 * share(population, config.confidence_population_cap)
}
