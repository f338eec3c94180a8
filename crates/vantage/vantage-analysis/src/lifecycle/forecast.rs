//! Decaying-growth saturation projection with a widening band.

use vantage_core::config::LifecycleConfig;
use vantage_core::types::ForecastPoint;

/// Project saturation for weeks `1..=weeks_ahead`.
///
/// Week `w` applies growth `growth_rate × decay^w` to the previous projection.
/// `uncertainty = w × step` and the band half-width is
/// `uncertainty × max(current_saturation, band_floor)`. Every value is
/// clamped to [0, 100], and the band is shifted inside that range rather
/// than cut off, so its width never shrinks from one week to the next.
pub fn project_saturation(
    current_saturation: f64,
    growth_rate: f64,
    weeks_ahead: u32,
    config: &LifecycleConfig,
) -> Vec<ForecastPoint> {
    let clamp = |v: f64| if v.is_finite() { v.clamp(0.0, 100.0) } else { 100.0 };
    let base = clamp(current_saturation);
    let scale = base.max(config.forecast_band_floor);
    let mut projected = base;

    (1..=weeks_ahead)
        .map(|week| {
            let weekly_growth = growth_rate * config.forecast_growth_decay.powi(week as i32);
            projected = clamp(projected * (1.0 + weekly_growth));
            let uncertainty = week as f64 * config.forecast_uncertainty_step;
            let (lower, upper) = band(projected, uncertainty * scale);
            ForecastPoint {
                week,
                projected_saturation: projected,
                uncertainty,
                lower,
                upper,
            }
        })
        .collect()
}

/// Band of width `min(2 × half_width, 100)` around `projected`, shifted
/// inside [0, 100] instead of cut off at the edges. The width is therefore
/// non-decreasing whenever `half_width` is.
fn band(projected: f64, half_width: f64) -> (f64, f64) {
    let half_width = if half_width.is_finite() { half_width.max(0.0) } else { 50.0 };
    let width = (2.0 * half_width).min(100.0);
    let lower = (projected - half_width).clamp(0.0, 100.0 - width);
    (lower, (lower + width).min(100.0))
}
