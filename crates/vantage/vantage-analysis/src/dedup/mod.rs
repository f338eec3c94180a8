//! Deduplicator / merger: collapses near-duplicate candidates.

pub mod deduplicator;
pub mod merge;
pub mod similarity;

pub use deduplicator::{DedupDiagnostics, DedupOutcome, Deduplicator};
pub use merge::merge_candidates;
pub use similarity::{jaccard_similarity, KeywordGroup, PatternSimilarity, SimilarityPolicy};
