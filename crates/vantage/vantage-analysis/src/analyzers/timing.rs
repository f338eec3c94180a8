//! Timing analyzer: publish weekday.

use chrono::{Datelike, Weekday};
use vantage_core::config::AnalyzerConfig;
use vantage_core::errors::AnalyzerError;
use vantage_core::types::{DiscoveryContext, Item, PatternCandidate, PatternType};

use super::grouping::{group_by, Evidence};
use super::PatternAnalyzer;

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

pub struct TimingAnalyzer {
    config: AnalyzerConfig,
}

impl TimingAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }
}

impl PatternAnalyzer for TimingAnalyzer {
    fn name(&self) -> &'static str {
        "timing"
    }

    fn pattern_type(&self) -> PatternType {
        PatternType::Timing
    }

    fn discover(
        &self,
        items: &[Item],
        _ctx: &DiscoveryContext,
    ) -> Result<Vec<PatternCandidate>, AnalyzerError> {
        // Keyed by weekday number so iteration runs Monday..Sunday.
        let groups = group_by(items, |i| Some(i.published_at.weekday().num_days_from_monday()));

        let mut candidates = Vec::new();
        for members in groups.values() {
            if members.len() < self.config.timing_min_items {
                continue;
            }
            let evidence = Evidence::collect(members, self.config.max_examples);
            if evidence.stats.avg <= self.config.timing_min_avg {
                continue;
            }
            let day = weekday_name(members[0].published_at.weekday());
            let mut label = day.to_string();
            label[..1].make_ascii_uppercase();
            candidates.push(PatternCandidate::new(
                PatternType::Timing,
                day,
                format!("Published on {label}"),
                format!("publish:{day}"),
                self.config.confidence_for_lift(evidence.stats.avg),
                evidence.stats,
                evidence.examples,
                evidence.item_ids,
            ));
        }
        Ok(candidates)
    }
}
