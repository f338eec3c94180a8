//! Diverse top-N selection.

use vantage_core::types::collections::FxHashSet;
use vantage_core::config::SelectionConfig;
use vantage_core::types::PatternCandidate;

use super::categories::{classify, SemanticCategory};

/// Pick at most `max_patterns` candidates, favoring one per category.
///
/// 1. The top scorer of each category, in category order.
/// 2. Remaining slots by overall score.
///
/// The output never exceeds `max_patterns` and never repeats a candidate id.
pub fn select_diverse<T>(candidates: &[T], max_patterns: usize) -> Vec<T>
where
    T: AsRef<PatternCandidate> + Clone,
{
    if max_patterns == 0 || candidates.is_empty() {
        return Vec::new();
    }

    // Stable sort by score: ties keep input order.
    let mut ranked: Vec<(usize, SemanticCategory)> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| (i, classify(c.as_ref())))
        .collect();
    ranked.sort_by(|(a, _), (b, _)| {
        candidates[*b]
            .as_ref()
            .score()
            .total_cmp(&candidates[*a].as_ref().score())
    });

    let mut chosen: Vec<usize> = Vec::with_capacity(max_patterns);
    let mut chosen_ids: FxHashSet<&str> = FxHashSet::default();
    let mut take = |i: usize, chosen: &mut Vec<usize>| {
        let id = candidates[i].as_ref().id.as_str();
        if chosen_ids.insert(id) {
            chosen.push(i);
        }
    };

    for category in SemanticCategory::ALL {
        if chosen.len() >= max_patterns {
            break;
        }
        if let Some((i, _)) = ranked.iter().find(|(_, c)| *c == category) {
            take(*i, &mut chosen);
        }
    }

    for (i, _) in &ranked {
        if chosen.len() >= max_patterns {
            break;
        }
        take(*i, &mut chosen);
    }

    chosen.into_iter().map(|i| candidates[i].clone()).collect()
}

/// Configured wrapper around [`select_diverse`].
#[derive(Debug, Clone, Default)]
pub struct DiversitySelector {
    config: SelectionConfig,
}

impl DiversitySelector {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    pub fn max_patterns(&self) -> usize {
        self.config.max_patterns
    }

    pub fn select<T>(&self, candidates: &[T]) -> Vec<T>
    where
        T: AsRef<PatternCandidate> + Clone,
    {
        select_diverse(candidates, self.config.max_patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::types::{PatternType, PerformanceStats};

    fn candidate(key: &str, name: &str, template: &str, avg: f64) -> PatternCandidate {
        PatternCandidate::new(
            PatternType::TitleNgram,
            key,
            name,
            template,
            1.0,
            PerformanceStats {
                avg,
                ..Default::default()
            },
            vec![],
            vec![],
        )
    }

    fn pool() -> Vec<PatternCandidate> {
        vec![
            candidate("m1", "Titles containing \"money\"", "[...] money [...]", 5.0),
            candidate("m2", "Titles containing \"income\"", "[...] income [...]", 4.5),
            candidate("m3", "Titles containing \"cash\"", "[...] cash [...]", 4.0),
            candidate("f1", "Tutorial format", "format:tutorial", 2.0),
            candidate("t1", "Published on Friday", "publish:friday", 1.5),
        ]
    }

    #[test]
    fn one_per_category_first() {
        let picked = select_diverse(&pool(), 3);
        let ids: Vec<&str> = picked.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["title_ngram:m1", "title_ngram:f1", "title_ngram:t1"]);
    }

    #[test]
    fn remaining_slots_fill_by_score() {
        let picked = select_diverse(&pool(), 4);
        let ids: Vec<&str> = picked.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["title_ngram:m1", "title_ngram:f1", "title_ngram:t1", "title_ngram:m2"]
        );
    }

    #[test]
    fn never_exceeds_limit_or_repeats() {
        let mut candidates = pool();
        candidates.push(candidates[0].clone());
        assert!(select_diverse(&candidates, 0).is_empty());
        let all = select_diverse(&candidates, 50);
        assert_eq!(all.len(), 5);
        let selector = DiversitySelector::new(SelectionConfig { max_patterns: 2 });
        assert_eq!(selector.select(&candidates).len(), 2);
    }
}
