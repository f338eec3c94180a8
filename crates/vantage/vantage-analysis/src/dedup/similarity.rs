//! Lexical similarity between candidates.
//!
//! Jaccard similarity of stop-word-filtered keyword sets over templates,
//! names and example titles, with relaxed cutoffs for domain keyword groups.

use vantage_core::types::collections::FxHashSet;
use vantage_core::config::DedupConfig;
use vantage_core::types::PatternCandidate;

use crate::text::{keywords, keywords_of};

/// Compute exact Jaccard similarity between two keyword sets.
///
/// J(A, B) = |A ∩ B| / |A ∪ B|
/// Returns 0.0 if both sets are empty.
pub fn jaccard_similarity(set_a: &FxHashSet<String>, set_b: &FxHashSet<String>) -> f64 {
    if set_a.is_empty() && set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(set_b).count();
    let union = set_a.union(set_b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Domain keyword groups whose members are treated as near-synonyms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordGroup {
    Money,
    Project,
}

impl KeywordGroup {
    pub const ALL: [KeywordGroup; 2] = [Self::Money, Self::Project];

    /// Keywords in folded form (see [`keywords`]).
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Money => &[
                "money",
                "monetization",
                "monetize",
                "income",
                "earn",
                "earning",
                "revenue",
                "profit",
                "paid",
                "cash",
                "dollar",
                "rich",
            ],
            Self::Project => &[
                "project", "making", "make", "build", "building", "diy", "craft", "create",
            ],
        }
    }

    pub fn matches(&self, keywords: &FxHashSet<String>) -> bool {
        self.keywords().iter().any(|k| keywords.contains(*k))
    }
}

/// The three similarity components for a candidate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternSimilarity {
    pub template: f64,
    pub name: f64,
    pub example: f64,
    /// Both candidates match at least one common keyword group.
    pub shared_group: bool,
}

/// The similarity predicate used by the deduplicator.
#[derive(Debug, Clone, Default)]
pub struct SimilarityPolicy {
    config: DedupConfig,
}

impl SimilarityPolicy {
    pub fn new(config: DedupConfig) -> Self {
        Self { config }
    }

    pub fn measure(&self, a: &PatternCandidate, b: &PatternCandidate) -> PatternSimilarity {
        let (ta, tb) = (keywords(&a.template), keywords(&b.template));
        let (na, nb) = (keywords(&a.name), keywords(&b.name));
        let ea = keywords_of(&a.examples);
        let eb = keywords_of(&b.examples);

        let all_a: FxHashSet<String> = ta.union(&na).cloned().collect();
        let all_b: FxHashSet<String> = tb.union(&nb).cloned().collect();
        let shared_group = KeywordGroup::ALL
            .iter()
            .any(|g| g.matches(&all_a) && g.matches(&all_b));

        PatternSimilarity {
            template: jaccard_similarity(&ta, &tb),
            name: jaccard_similarity(&na, &nb),
            example: jaccard_similarity(&ea, &eb),
            shared_group,
        }
    }

    /// The group rule relaxes the general rule; it never tightens it.
    pub fn is_similar(&self, sim: &PatternSimilarity) -> bool {
        let c = &self.config;
        let relaxed = sim.shared_group
            && (sim.template > c.group_template_similarity || sim.name > c.group_name_similarity);
        relaxed
            || sim.template > c.template_similarity
            || sim.name > c.name_similarity
            || sim.example > c.example_similarity
    }

    pub fn are_similar(&self, a: &PatternCandidate, b: &PatternCandidate) -> bool {
        self.is_similar(&self.measure(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::types::{PatternType, PerformanceStats};

    fn set(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn candidate(key: &str, name: &str, template: &str, examples: &[&str]) -> PatternCandidate {
        PatternCandidate::new(
            PatternType::TitleNgram,
            key,
            name,
            template,
            0.9,
            PerformanceStats::default(),
            examples.iter().map(|e| e.to_string()).collect(),
            vec![],
        )
    }

    #[test]
    fn jaccard_basics() {
        assert_eq!(jaccard_similarity(&set(&[]), &set(&[])), 0.0);
        assert_eq!(jaccard_similarity(&set(&["a", "b"]), &set(&["a", "b"])), 1.0);
        assert!((jaccard_similarity(&set(&["a", "b"]), &set(&["b", "c"])) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn unrelated_candidates_are_not_similar() {
        let policy = SimilarityPolicy::default();
        let a = candidate("a", "Titles containing \"desk\"", "[...] desk [...]", &["standing desk setup"]);
        let b = candidate("b", "Published on Friday", "publish:friday", &["lake trip vlog"]);
        assert!(!policy.are_similar(&a, &b));
    }

    #[test]
    fn money_group_relaxes_cutoffs() {
        let policy = SimilarityPolicy::default();
        let a = candidate("a", "Monetization tips fast", "[...] monetization [...]", &[]);
        let b = candidate("b", "Income tips now", "[...] income [...]", &[]);
        let sim = policy.measure(&a, &b);
        assert!(sim.shared_group);
        // name: {monetization, tips, fast} vs {income, tips, now} → 1/5
        assert!(sim.name < 0.4);
        assert!(!policy.is_similar(&sim));

        let c = candidate("c", "Monetization tips", "[...] monetization [...]", &[]);
        let d = candidate("d", "Earn tips", "[...] earn [...]", &[]);
        let sim = policy.measure(&c, &d);
        // name: {monetization, tips} vs {earn, tips} → 1/3, below 0.4 and 0.6
        assert!(!policy.is_similar(&sim));

        let e = candidate("e", "Money tips", "money [Topic] tips", &[]);
        let f = candidate("f", "Cash tips", "cash [Topic] tips", &[]);
        let sim = policy.measure(&e, &f);
        // template: {money, topic, tips} vs {cash, topic, tips} → 2/4 = 0.5
        assert!(sim.template > 0.3 && sim.template <= 0.5);
        assert!(policy.is_similar(&sim));
    }

    #[test]
    fn example_overlap_alone_can_match() {
        let policy = SimilarityPolicy::default();
        let shared = ["learn rust fast", "rust in a weekend", "rust tips"];
        let a = candidate("a", "Alpha", "[x]", &shared);
        let b = candidate("b", "Beta", "[y]", &shared);
        assert!(policy.are_similar(&a, &b));
    }
}
