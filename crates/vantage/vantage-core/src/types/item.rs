//! Scored content items, the read-only input of every discovery run.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content format of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatType {
    Tutorial,
    Review,
    Vlog,
    Listicle,
    Reaction,
    Interview,
    Documentary,
    Shorts,
    Livestream,
    Other,
}

impl FormatType {
    pub const ALL: [FormatType; 10] = [
        Self::Tutorial,
        Self::Review,
        Self::Vlog,
        Self::Listicle,
        Self::Reaction,
        Self::Interview,
        Self::Documentary,
        Self::Shorts,
        Self::Livestream,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tutorial => "tutorial",
            Self::Review => "review",
            Self::Vlog => "vlog",
            Self::Listicle => "listicle",
            Self::Reaction => "reaction",
            Self::Interview => "interview",
            Self::Documentary => "documentary",
            Self::Shorts => "shorts",
            Self::Livestream => "livestream",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scored content unit (e.g. a video).
///
/// Items are immutable snapshots for the duration of one discovery run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    pub format_type: FormatType,
    pub duration_seconds: u32,
    pub topic_cluster_id: Option<String>,
    /// Rolling reference value used to normalize `view_count`.
    /// `None` means the normalization field is missing.
    pub baseline_views: Option<f64>,
}

impl Item {
    /// `view_count / max(baseline_views, 1)`.
    pub fn performance_ratio(&self) -> f64 {
        let baseline = self.baseline_views.unwrap_or(1.0).max(1.0);
        self.view_count as f64 / baseline
    }

    /// Whether the item carries the fields needed to normalize its performance.
    pub fn has_normalization(&self) -> bool {
        matches!(self.baseline_views, Some(b) if b.is_finite())
    }

    /// Age-based sampling confidence in [0, 1].
    ///
    /// A freshly published item has not accumulated its views yet, so its
    /// ratio is less trustworthy. Reaches 1.0 once the item is
    /// `maturity_days` old. This is a property of the item, unrelated to a
    /// pattern's statistical confidence.
    pub fn sampling_confidence(&self, now: DateTime<Utc>, maturity_days: f64) -> f64 {
        if maturity_days <= 0.0 {
            return 1.0;
        }
        let age_days = (now - self.published_at).num_seconds() as f64 / 86_400.0;
        (age_days / maturity_days).clamp(0.0, 1.0)
    }

    /// Duration in minutes (fractional).
    pub fn duration_minutes(&self) -> f64 {
        self.duration_seconds as f64 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn item(views: u64, baseline: Option<f64>) -> Item {
        Item {
            id: "v1".to_string(),
            title: "How I built a desk".to_string(),
            published_at: Utc::now() - Duration::days(3),
            view_count: views,
            format_type: FormatType::Tutorial,
            duration_seconds: 600,
            topic_cluster_id: None,
            baseline_views: baseline,
        }
    }

    #[test]
    fn ratio_divides_by_baseline() {
        assert!((item(3000, Some(1000.0)).performance_ratio() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_floors_baseline_at_one() {
        assert!((item(5, Some(0.0)).performance_ratio() - 5.0).abs() < 1e-9);
        assert!((item(5, None).performance_ratio() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn missing_baseline_is_not_normalized() {
        assert!(!item(5, None).has_normalization());
        assert!(!item(5, Some(f64::NAN)).has_normalization());
        assert!(item(5, Some(10.0)).has_normalization());
    }

    #[test]
    fn sampling_confidence_grows_with_age() {
        let it = item(10, Some(10.0));
        let now = it.published_at + Duration::days(7);
        assert!((it.sampling_confidence(now, 14.0) - 0.5).abs() < 1e-6);
        let later = it.published_at + Duration::days(30);
        assert_eq!(it.sampling_confidence(later, 14.0), 1.0);
        let before = it.published_at - Duration::days(1);
        assert_eq!(it.sampling_confidence(before, 14.0), 0.0);
    }
}
