//! Adoption lifecycle annotations. Derived views, never persisted with a pattern.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Emerging,
    Growing,
    Mature,
    Saturated,
    Declining,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Emerging => "emerging",
            Self::Growing => "growing",
            Self::Mature => "mature",
            Self::Saturated => "saturated",
            Self::Declining => "declining",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative remaining-opportunity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityWindow {
    Closed,
    EarlyMover,
    UnderOneWeek,
    OneToTwoWeeks,
    TwoToFourWeeks,
    OverFourWeeks,
}

impl OpportunityWindow {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Closed => "window closed",
            Self::EarlyMover => "4-8 weeks",
            Self::UnderOneWeek => "<1 week",
            Self::OneToTwoWeeks => "1-2 weeks",
            Self::TwoToFourWeeks => "2-4 weeks",
            Self::OverFourWeeks => "4+ weeks",
        }
    }
}

impl fmt::Display for OpportunityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// One ISO week of a pattern's adoption timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBucket {
    pub iso_year: i32,
    pub iso_week: u32,
    pub count: usize,
    pub avg_performance: f64,
}

/// Lifecycle classification of one pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleStage {
    pub stage: Stage,
    /// Items per observed week.
    pub adoption_rate: f64,
    /// 0-100.
    pub saturation_percentage: f64,
    /// 0-1.
    pub competitive_advantage: f64,
    pub estimated_window: OpportunityWindow,
    /// 0-1.
    pub analysis_confidence: f64,
    pub growth_rate: f64,
    pub acceleration: f64,
    pub performance_trend: f64,
    pub timeline: Vec<WeeklyBucket>,
}

/// One projected week of saturation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub week: u32,
    pub projected_saturation: f64,
    /// `week × step`; grows monotonically.
    pub uncertainty: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Saturation projection for a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaturationForecast {
    pub pattern_id: String,
    pub current_saturation: f64,
    pub growth_rate: f64,
    pub points: Vec<ForecastPoint>,
}

impl SaturationForecast {
    /// First projected week at or above `target` saturation.
    pub fn week_reaching(&self, target: f64) -> Option<u32> {
        self.points
            .iter()
            .find(|p| p.projected_saturation >= target)
            .map(|p| p.week)
    }
}
