//! Fixed ordered semantic categories for candidates.

use std::fmt;

use vantage_core::types::collections::FxHashSet;
use vantage_core::types::PatternCandidate;

use crate::text::words;

/// Semantic category of a candidate. Declaration order is match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SemanticCategory {
    Monetization,
    Project,
    Curiosity,
    Numeric,
    Hashtag,
    Punctuation,
    Length,
    Format,
    Duration,
    Timing,
    Topic,
    Other,
}

impl SemanticCategory {
    pub const ALL: [SemanticCategory; 12] = [
        Self::Monetization,
        Self::Project,
        Self::Curiosity,
        Self::Numeric,
        Self::Hashtag,
        Self::Punctuation,
        Self::Length,
        Self::Format,
        Self::Duration,
        Self::Timing,
        Self::Topic,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Monetization => "monetization",
            Self::Project => "project",
            Self::Curiosity => "curiosity",
            Self::Numeric => "numeric",
            Self::Hashtag => "hashtag",
            Self::Punctuation => "punctuation",
            Self::Length => "length",
            Self::Format => "format",
            Self::Duration => "duration",
            Self::Timing => "timing",
            Self::Topic => "topic",
            Self::Other => "other",
        }
    }

    /// Whole-word keywords.
    fn words(&self) -> &'static [&'static str] {
        match self {
            Self::Monetization => &[
                "money", "monetization", "monetize", "income", "earn", "earning", "earnings",
                "revenue", "profit", "paid", "cash", "dollar", "dollars", "rich",
            ],
            Self::Project => &[
                "project", "projects", "making", "make", "build", "building", "built", "diy",
                "craft", "create",
            ],
            Self::Curiosity => &["question", "how", "why", "what", "secret", "secrets", "truth"],
            Self::Numeric => &["number", "top", "list"],
            Self::Hashtag => &["hashtag", "hashtags"],
            Self::Punctuation => &["exclamation", "colon", "pipe", "bracketed", "dash"],
            Self::Length => &["word", "words"],
            Self::Format => &["format"],
            Self::Duration => &["minute", "duration"],
            Self::Timing => &["published", "publish"],
            Self::Topic => &["topic", "cluster"],
            Self::Other => &[],
        }
    }

    /// Substring markers, for symbols and `type:` prefixes.
    fn markers(&self) -> &'static [&'static str] {
        match self {
            Self::Curiosity => &["?"],
            Self::Hashtag => &["#"],
            Self::Punctuation => &["!", " | "],
            Self::Format => &["format:"],
            Self::Duration => &["duration:"],
            Self::Timing => &["publish:"],
            Self::Topic => &["topic:"],
            _ => &[],
        }
    }

    fn matches(&self, text: &str, tokens: &FxHashSet<String>) -> bool {
        self.markers().iter().any(|m| text.contains(m))
            || self.words().iter().any(|w| tokens.contains(*w))
    }
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First matching category over `name + template`; [`SemanticCategory::Other`] if none.
pub fn classify(candidate: &PatternCandidate) -> SemanticCategory {
    let text = format!("{} {}", candidate.name, candidate.template).to_lowercase();
    let tokens: FxHashSet<String> = words(&text).into_iter().collect();
    SemanticCategory::ALL
        .into_iter()
        .find(|c| c.matches(&text, &tokens))
        .unwrap_or(SemanticCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::types::{PatternType, PerformanceStats};

    fn candidate(name: &str, template: &str) -> PatternCandidate {
        PatternCandidate::new(
            PatternType::TitleNgram,
            name,
            name,
            template,
            0.9,
            PerformanceStats::default(),
            vec![],
            vec![],
        )
    }

    #[test]
    fn first_matching_category_wins() {
        // Both money and question markers: monetization is declared first.
        let c = candidate("Titles containing \"money\"", "How much money?");
        assert_eq!(classify(&c), SemanticCategory::Monetization);
    }

    #[test]
    fn analyzer_templates_classify() {
        assert_eq!(classify(&candidate("Tutorial format", "format:tutorial")), SemanticCategory::Format);
        assert_eq!(classify(&candidate("5-10 minute videos", "duration:5-10min")), SemanticCategory::Duration);
        assert_eq!(classify(&candidate("Published on Tuesday", "publish:tuesday")), SemanticCategory::Timing);
        assert_eq!(classify(&candidate("Topic cluster c1", "topic:c1")), SemanticCategory::Topic);
        assert_eq!(classify(&candidate("Titles with 4-6 words", "[4-6 word title]")), SemanticCategory::Length);
        assert_eq!(classify(&candidate("Titles phrased as a question", "[Question]?")), SemanticCategory::Curiosity);
        assert_eq!(classify(&candidate("Titles with hashtags", "[Topic] #hashtag")), SemanticCategory::Hashtag);
        assert_eq!(classify(&candidate("Titles containing a number", "[Number] [Topic]")), SemanticCategory::Numeric);
    }

    #[test]
    fn whole_words_only() {
        // "today" must not match "top"/"day"-style keywords by substring.
        assert_eq!(classify(&candidate("Titles containing \"today\"", "[...] today [...]")), SemanticCategory::Other);
    }
}
