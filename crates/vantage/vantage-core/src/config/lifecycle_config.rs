use serde::{Deserialize, Serialize};

use super::defaults;

/// Stage thresholds and forecasting constants for the lifecycle tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Trailing window used to size the cluster population.
    pub saturation_window_days: i64,
    pub saturation_target: f64,
    pub emerging_max_saturation: f64,
    pub emerging_min_growth: f64,
    pub growing_max_saturation: f64,
    pub growing_min_growth: f64,
    /// `performance_trend` below this marks a pattern saturated.
    pub saturated_trend: f64,
    pub declining_growth: f64,
    pub declining_trend: f64,
    /// Weeks averaged at each end of the timeline for the performance trend.
    pub trend_window_weeks: usize,
    pub forecast_growth_decay: f64,
    pub forecast_uncertainty_step: f64,
    /// Minimum saturation the band half-width is scaled by.
    pub forecast_band_floor: f64,
    pub confidence_timeline_cap_weeks: usize,
    pub confidence_population_cap: usize,
    pub advantage: StageAdvantage,
}

/// Per-stage multiplier applied to competitive advantage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StageAdvantage {
    pub emerging: f64,
    pub growing: f64,
    pub mature: f64,
    pub saturated: f64,
    pub declining: f64,
}

impl Default for StageAdvantage {
    fn default() -> Self {
        Self {
            emerging: 1.0,
            growing: 0.8,
            mature: 0.5,
            saturated: 0.2,
            declining: 0.1,
        }
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            saturation_window_days: defaults::DEFAULT_SATURATION_WINDOW_DAYS,
            saturation_target: defaults::DEFAULT_SATURATION_TARGET,
            emerging_max_saturation: defaults::DEFAULT_EMERGING_MAX_SATURATION,
            emerging_min_growth: defaults::DEFAULT_EMERGING_MIN_GROWTH,
            growing_max_saturation: defaults::DEFAULT_GROWING_MAX_SATURATION,
            growing_min_growth: defaults::DEFAULT_GROWING_MIN_GROWTH,
            saturated_trend: defaults::DEFAULT_SATURATED_TREND,
            declining_growth: defaults::DEFAULT_DECLINING_GROWTH,
            declining_trend: defaults::DEFAULT_DECLINING_TREND,
            trend_window_weeks: defaults::DEFAULT_TREND_WINDOW_WEEKS,
            forecast_growth_decay: defaults::DEFAULT_FORECAST_GROWTH_DECAY,
            forecast_uncertainty_step: defaults::DEFAULT_FORECAST_UNCERTAINTY_STEP,
            forecast_band_floor: defaults::DEFAULT_FORECAST_BAND_FLOOR,
            confidence_timeline_cap_weeks: defaults::DEFAULT_CONFIDENCE_TIMELINE_CAP_WEEKS,
            confidence_population_cap: defaults::DEFAULT_CONFIDENCE_POPULATION_CAP,
            advantage: StageAdvantage::default(),
        }
    }
}
