//! Title n-gram analyzer: recurring word sequences in high-performing titles.

use std::collections::BTreeMap;

use vantage_core::types::collections::FxHashSet;
use tracing::debug;
use vantage_core::config::AnalyzerConfig;
use vantage_core::errors::AnalyzerError;
use vantage_core::types::{DiscoveryContext, Item, PatternCandidate, PatternType};

use super::grouping::Evidence;
use super::PatternAnalyzer;
use crate::text::{is_stop_word, words};

pub struct TitleNgramAnalyzer {
    config: AnalyzerConfig,
}

impl TitleNgramAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }
}

/// Distinct n-grams of length `min..=max` in a title. With
/// `skip_stop_word_only`, n-grams made only of stop words are left out.
pub fn title_ngrams(
    title: &str,
    min: usize,
    max: usize,
    skip_stop_word_only: bool,
) -> FxHashSet<String> {
    let tokens = words(title);
    let mut grams = FxHashSet::default();
    for n in min..=max {
        if n == 0 || n > tokens.len() {
            continue;
        }
        for window in tokens.windows(n) {
            if skip_stop_word_only && window.iter().all(|w| is_stop_word(w)) {
                continue;
            }
            grams.insert(window.join(" "));
        }
    }
    grams
}

impl PatternAnalyzer for TitleNgramAnalyzer {
    fn name(&self) -> &'static str {
        "title_ngram"
    }

    fn pattern_type(&self) -> PatternType {
        PatternType::TitleNgram
    }

    fn discover(
        &self,
        items: &[Item],
        _ctx: &DiscoveryContext,
    ) -> Result<Vec<PatternCandidate>, AnalyzerError> {
        let (min, max) = (self.config.ngram_min_len, self.config.ngram_max_len);
        let skip = self.config.ngram_skip_stop_word_only;
        if min == 0 || min > max {
            return Err(AnalyzerError::InvalidInput {
                analyzer: self.name().to_string(),
                message: format!("invalid n-gram range {min}..={max}"),
            });
        }

        // Each item counts once per n-gram regardless of repeats in its title.
        let mut index: BTreeMap<String, Vec<&Item>> = BTreeMap::new();
        for item in items {
            for gram in title_ngrams(&item.title, min, max, skip) {
                index.entry(gram).or_default().push(item);
            }
        }

        let mut candidates = Vec::new();
        for (gram, members) in &index {
            if members.len() < self.config.ngram_min_items {
                continue;
            }
            let evidence = Evidence::collect(members, self.config.max_examples);
            if evidence.stats.avg <= self.config.ngram_min_avg {
                continue;
            }
            candidates.push(PatternCandidate::new(
                PatternType::TitleNgram,
                gram,
                format!("Titles containing \"{gram}\""),
                format!("[...] {gram} [...]"),
                self.config.confidence_for_lift(evidence.stats.avg),
                evidence.stats,
                evidence.examples,
                evidence.item_ids,
            ));
        }

        debug!(
            distinct_ngrams = index.len(),
            candidates = candidates.len(),
            "title n-gram scan complete"
        );
        Ok(candidates)
    }
}
