//! Shared grouping and candidate-assembly helpers.

use std::collections::BTreeMap;

use vantage_core::types::{Item, PerformanceStats};

use crate::stats::item_stats;

/// Group items by key. Keys iterate in sorted order, members keep input order.
pub fn group_by<'a, K, F>(items: &'a [Item], mut key: F) -> BTreeMap<K, Vec<&'a Item>>
where
    K: Ord,
    F: FnMut(&Item) -> Option<K>,
{
    let mut groups: BTreeMap<K, Vec<&Item>> = BTreeMap::new();
    for item in items {
        if let Some(k) = key(item) {
            groups.entry(k).or_default().push(item);
        }
    }
    groups
}

/// Stats, example titles and item ids for a candidate built from `members`.
pub struct Evidence {
    pub stats: PerformanceStats,
    pub examples: Vec<String>,
    pub item_ids: Vec<String>,
}

impl Evidence {
    /// Examples are the best-performing distinct titles, capped at `max_examples`.
    pub fn collect(members: &[&Item], max_examples: usize) -> Self {
        let stats = item_stats(members.iter().copied());
        let item_ids = members.iter().map(|i| i.id.clone()).collect();

        let mut ranked: Vec<&Item> = members.to_vec();
        ranked.sort_by(|a, b| {
            b.performance_ratio()
                .total_cmp(&a.performance_ratio())
                .then_with(|| a.id.cmp(&b.id))
        });
        let mut examples: Vec<String> = Vec::new();
        for item in ranked {
            if examples.len() >= max_examples {
                break;
            }
            if !examples.contains(&item.title) {
                examples.push(item.title.clone());
            }
        }

        Self {
            stats,
            examples,
            item_ids,
        }
    }
}
