//! Title structure analyzer: word-count buckets and punctuation/number features.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;
use vantage_core::config::AnalyzerConfig;
use vantage_core::errors::AnalyzerError;
use vantage_core::types::{DiscoveryContext, Item, PatternCandidate, PatternType};

use super::grouping::{group_by, Evidence};
use super::PatternAnalyzer;
use crate::stats::item_stats;
use crate::text::words;

static DIGIT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d").ok());
static BRACKETS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[\(\[].*[\)\]]").ok());
static HASHTAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"#\w+").ok());
static SPACED_DASH: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s[-–—]\s").ok());

/// Word-count buckets as `(low, high, label)`; `high` is inclusive.
const WORD_COUNT_BUCKETS: [(usize, usize, &str); 5] = [
    (1, 3, "1-3"),
    (4, 6, "4-6"),
    (7, 9, "7-9"),
    (10, 12, "10-12"),
    (13, usize::MAX, "13+"),
];

/// Fixed title features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleFeature {
    Question,
    Exclamation,
    Number,
    Colon,
    Brackets,
    Pipe,
    Hashtag,
    Dash,
}

impl TitleFeature {
    pub const ALL: [TitleFeature; 8] = [
        Self::Question,
        Self::Exclamation,
        Self::Number,
        Self::Colon,
        Self::Brackets,
        Self::Pipe,
        Self::Hashtag,
        Self::Dash,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Exclamation => "exclamation",
            Self::Number => "number",
            Self::Colon => "colon",
            Self::Brackets => "brackets",
            Self::Pipe => "pipe",
            Self::Hashtag => "hashtag",
            Self::Dash => "dash",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Question => "Titles phrased as a question",
            Self::Exclamation => "Titles with an exclamation mark",
            Self::Number => "Titles containing a number",
            Self::Colon => "Titles with a colon",
            Self::Brackets => "Titles with a bracketed aside",
            Self::Pipe => "Titles with a pipe separator",
            Self::Hashtag => "Titles with hashtags",
            Self::Dash => "Titles with a dash separator",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Self::Question => "[Question]?",
            Self::Exclamation => "[Statement]!",
            Self::Number => "[Number] [Topic]",
            Self::Colon => "[Topic]: [Detail]",
            Self::Brackets => "[Topic] (Detail)",
            Self::Pipe => "[Topic] | [Series]",
            Self::Hashtag => "[Topic] #hashtag",
            Self::Dash => "[Topic] - [Detail]",
        }
    }

    pub fn present_in(&self, title: &str) -> bool {
        match self {
            Self::Question => title.contains('?'),
            Self::Exclamation => title.contains('!'),
            Self::Number => regex_match(&DIGIT, title),
            Self::Colon => title.contains(':'),
            Self::Brackets => regex_match(&BRACKETS, title),
            Self::Pipe => title.contains('|'),
            Self::Hashtag => regex_match(&HASHTAG, title),
            Self::Dash => regex_match(&SPACED_DASH, title),
        }
    }
}

fn regex_match(re: &Option<Regex>, title: &str) -> bool {
    re.as_ref().is_some_and(|r| r.is_match(title))
}

pub struct TitleStructureAnalyzer {
    config: AnalyzerConfig,
}

impl TitleStructureAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    fn word_count_candidates(&self, items: &[Item]) -> Vec<PatternCandidate> {
        let groups = group_by(items, |item| {
            let count = words(&item.title).len();
            WORD_COUNT_BUCKETS
                .iter()
                .position(|(lo, hi, _)| count >= *lo && count <= *hi)
        });

        let mut out = Vec::new();
        for (bucket, members) in &groups {
            if members.len() < self.config.word_count_min_items {
                continue;
            }
            let evidence = Evidence::collect(members, self.config.max_examples);
            if evidence.stats.avg <= self.config.word_count_min_avg {
                continue;
            }
            let label = WORD_COUNT_BUCKETS[*bucket].2;
            out.push(PatternCandidate::new(
                PatternType::TitleStructure,
                &format!("words_{label}"),
                format!("Titles with {label} words"),
                format!("[{label} word title]"),
                self.config.confidence_for_lift(evidence.stats.avg),
                evidence.stats,
                evidence.examples,
                evidence.item_ids,
            ));
        }
        out
    }

    fn feature_candidates(&self, items: &[Item]) -> Vec<PatternCandidate> {
        let mut out = Vec::new();
        for feature in TitleFeature::ALL {
            let (has, has_not): (Vec<&Item>, Vec<&Item>) =
                items.iter().partition(|i| feature.present_in(&i.title));
            let min_group = self.config.feature_min_group;
            if has.len() < min_group || has_not.len() < min_group {
                continue;
            }
            let control = item_stats(has_not.iter().copied());
            if control.avg <= 0.0 {
                continue;
            }
            let evidence = Evidence::collect(&has, self.config.max_examples);
            let lift = evidence.stats.avg / control.avg;
            if lift <= self.config.feature_min_lift {
                continue;
            }
            out.push(
                PatternCandidate::new(
                    PatternType::TitleStructure,
                    feature.key(),
                    feature.label(),
                    feature.template(),
                    self.config.confidence_for_lift(lift),
                    evidence.stats,
                    evidence.examples,
                    evidence.item_ids,
                )
                .with_metadata("lift", json!(lift))
                .with_metadata("control_avg", json!(control.avg)),
            );
        }
        out
    }
}

impl PatternAnalyzer for TitleStructureAnalyzer {
    fn name(&self) -> &'static str {
        "title_structure"
    }

    fn pattern_type(&self) -> PatternType {
        PatternType::TitleStructure
    }

    fn discover(
        &self,
        items: &[Item],
        _ctx: &DiscoveryContext,
    ) -> Result<Vec<PatternCandidate>, AnalyzerError> {
        let mut candidates = self.word_count_candidates(items);
        candidates.extend(self.feature_candidates(items));
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_support::items;

    fn analyzer() -> TitleStructureAnalyzer {
        TitleStructureAnalyzer::new(AnalyzerConfig::default())
    }

    #[test]
    fn features_detect_punctuation() {
        assert!(TitleFeature::Question.present_in("Is this worth it?"));
        assert!(TitleFeature::Number.present_in("Top 10 tools"));
        assert!(TitleFeature::Brackets.present_in("Desk build (part 2)"));
        assert!(TitleFeature::Hashtag.present_in("Morning routine #shorts"));
        assert!(TitleFeature::Dash.present_in("Review - one year later"));
        assert!(!TitleFeature::Dash.present_in("long-term review"));
        assert!(!TitleFeature::Pipe.present_in("plain title"));
    }

    #[test]
    fn feature_with_lift_is_emitted() {
        let mut corpus = items("q", 20, "Is it worth it?", 3.0);
        corpus.extend(items("p", 20, "it is worth it", 1.0));
        let found = analyzer()
            .discover(&corpus, &DiscoveryContext::default())
            .unwrap();
        let c = found
            .iter()
            .find(|c| c.id == "title_structure:question")
            .expect("question candidate");
        assert_eq!(c.evidence_count, 20);
        assert_eq!(c.metadata["lift"], json!(3.0));
        assert_eq!(c.confidence, 1.0);
    }

    #[test]
    fn feature_needs_both_groups_populated() {
        let corpus = items("q", 40, "Worth it?", 3.0);
        let found = analyzer()
            .discover(&corpus, &DiscoveryContext::default())
            .unwrap();
        assert!(found.iter().all(|c| c.id != "title_structure:question"));
    }

    #[test]
    fn word_count_bucket_is_emitted() {
        let corpus = items("w", 20, "five words in this title", 2.0);
        let found = analyzer()
            .discover(&corpus, &DiscoveryContext::default())
            .unwrap();
        let c = found
            .iter()
            .find(|c| c.id == "title_structure:words_4-6")
            .expect("word count candidate");
        assert_eq!(c.template, "[4-6 word title]");
    }
}
