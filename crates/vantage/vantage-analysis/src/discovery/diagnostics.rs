use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Counters describing one discovery run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscoveryDiagnostics {
    pub items_fetched: usize,
    pub items_qualifying: usize,
    /// Mean performance ratio of the qualifying items.
    pub baseline_performance: f64,
    pub excluded_missing_normalization: usize,
    pub excluded_short_form: usize,
    pub excluded_low_sampling_confidence: usize,
    pub excluded_below_performance_floor: usize,
    /// Set when fewer than `min_videos` items qualified.
    pub insufficient_data: bool,
    /// Raw candidates per analyzer name.
    pub raw_candidates: BTreeMap<String, usize>,
    pub failed_analyzers: Vec<String>,
    /// Rejections per reason name.
    pub rejected: BTreeMap<String, usize>,
    pub validated: usize,
}

impl DiscoveryDiagnostics {
    pub fn total_raw(&self) -> usize {
        self.raw_candidates.values().sum()
    }

    pub fn total_rejected(&self) -> usize {
        self.rejected.values().sum()
    }
}

impl fmt::Display for DiscoveryDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DiscoveryDiagnostics {{ fetched={}, qualifying={}, raw={}, rejected={}, validated={}, failed_analyzers={}, insufficient_data={} }}",
            self.items_fetched,
            self.items_qualifying,
            self.total_raw(),
            self.total_rejected(),
            self.validated,
            self.failed_analyzers.len(),
            self.insufficient_data,
        )
    }
}
