//! Candidate validation: minimum evidence, confidence, and stability.

use vantage_core::config::ValidationConfig;
use vantage_core::types::PatternCandidate;

/// Why a raw candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rejection {
    InsufficientEvidence,
    LowConfidence,
    /// High variance with a low median: a few outliers carry the average.
    Unstable,
}

impl Rejection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsufficientEvidence => "insufficient_evidence",
            Self::LowConfidence => "low_confidence",
            Self::Unstable => "unstable",
        }
    }
}

/// Gate every raw candidate must pass before deduplication.
#[derive(Debug, Clone, Default)]
pub struct CandidateValidator {
    config: ValidationConfig,
}

impl CandidateValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn check(&self, candidate: &PatternCandidate) -> Result<(), Rejection> {
        if candidate.evidence_count < self.config.min_evidence {
            return Err(Rejection::InsufficientEvidence);
        }
        if candidate.confidence < self.config.min_confidence {
            return Err(Rejection::LowConfidence);
        }
        let stats = &candidate.performance_stats;
        if stats.variance > self.config.max_variance && stats.median < self.config.min_median {
            return Err(Rejection::Unstable);
        }
        Ok(())
    }

    pub fn is_valid(&self, candidate: &PatternCandidate) -> bool {
        self.check(candidate).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::types::{PatternType, PerformanceStats};

    fn candidate(evidence: usize, confidence: f64, variance: f64, median: f64) -> PatternCandidate {
        PatternCandidate::new(
            PatternType::TitleNgram,
            "k",
            "n",
            "t",
            confidence,
            PerformanceStats {
                avg: 2.5,
                median,
                variance,
                count: evidence,
                ..Default::default()
            },
            vec![],
            (0..evidence).map(|i| i.to_string()).collect(),
        )
    }

    #[test]
    fn accepts_strong_candidate() {
        assert!(CandidateValidator::default().is_valid(&candidate(30, 0.8, 0.5, 2.0)));
    }

    #[test]
    fn rejects_each_failure_mode() {
        let v = CandidateValidator::default();
        assert_eq!(v.check(&candidate(29, 0.9, 0.1, 2.0)), Err(Rejection::InsufficientEvidence));
        assert_eq!(v.check(&candidate(40, 0.79, 0.1, 2.0)), Err(Rejection::LowConfidence));
        assert_eq!(v.check(&candidate(40, 0.9, 2.5, 0.9)), Err(Rejection::Unstable));
    }

    #[test]
    fn high_variance_alone_is_tolerated() {
        let v = CandidateValidator::default();
        assert!(v.is_valid(&candidate(40, 0.9, 5.0, 1.0)));
        assert!(v.is_valid(&candidate(40, 0.9, 2.0, 0.5)));
    }
}
