//! Left-to-right absorbing scan over candidates.

use std::fmt;

use tracing::debug;
use vantage_core::config::DedupConfig;
use vantage_core::types::PatternCandidate;

use super::merge::merge_candidates;
use super::similarity::SimilarityPolicy;

/// Counters for one deduplication call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupDiagnostics {
    pub input: usize,
    pub output: usize,
    pub merges: usize,
    /// Scans run until a scan merged nothing.
    pub passes: usize,
}

impl fmt::Display for DedupDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DedupDiagnostics {{ input={}, output={}, merges={}, passes={} }}",
            self.input, self.output, self.merges, self.passes
        )
    }
}

#[derive(Debug, Default)]
pub struct DedupOutcome {
    /// Surviving candidates, descending by `performance_metric × confidence`.
    pub patterns: Vec<PatternCandidate>,
    pub diagnostics: DedupDiagnostics,
}

/// Collapses near-duplicate candidates.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    policy: SimilarityPolicy,
    config: DedupConfig,
}

impl Deduplicator {
    pub fn new(config: DedupConfig) -> Self {
        Self {
            policy: SimilarityPolicy::new(config.clone()),
            config,
        }
    }

    pub fn deduplicate(&self, candidates: Vec<PatternCandidate>) -> Vec<PatternCandidate> {
        self.run(candidates).patterns
    }

    /// Deterministic given input order, and idempotent: the scan repeats
    /// over its own output until it merges nothing, so the result contains
    /// no similar pair.
    pub fn run(&self, candidates: Vec<PatternCandidate>) -> DedupOutcome {
        let mut diagnostics = DedupDiagnostics {
            input: candidates.len(),
            ..Default::default()
        };

        let mut current = candidates;
        loop {
            let (next, merges) = self.scan(current);
            diagnostics.passes += 1;
            diagnostics.merges += merges;
            current = next;
            if merges == 0 {
                break;
            }
        }

        current.sort_by(|a, b| b.score().total_cmp(&a.score()));
        diagnostics.output = current.len();
        debug!(%diagnostics, "deduplication complete");

        DedupOutcome {
            patterns: current,
            diagnostics,
        }
    }

    /// One scan. Survivors keep first-occurrence order.
    fn scan(&self, candidates: Vec<PatternCandidate>) -> (Vec<PatternCandidate>, usize) {
        let n = candidates.len();
        let mut processed = vec![false; n];
        let mut survivors = Vec::with_capacity(n);
        let mut merges = 0;

        for i in 0..n {
            if processed[i] {
                continue;
            }
            processed[i] = true;
            let mut running = candidates[i].clone();

            // A merge can make the running result similar to a candidate it
            // was not similar to before, so rescan until nothing is absorbed.
            loop {
                let mut absorbed = false;
                for j in (i + 1)..n {
                    if processed[j] || !self.policy.are_similar(&running, &candidates[j]) {
                        continue;
                    }
                    running = merge_candidates(&running, &candidates[j], &self.config);
                    processed[j] = true;
                    merges += 1;
                    absorbed = true;
                }
                if !absorbed {
                    break;
                }
            }
            survivors.push(running);
        }
        (survivors, merges)
    }
}
