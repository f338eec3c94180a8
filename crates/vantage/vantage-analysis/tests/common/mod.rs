//! Shared in-memory fixtures for integration tests.
#![allow(dead_code)]

use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use vantage_core::errors::{SourceError, StoreError};
use vantage_core::traits::{ItemSource, PatternStore};
use vantage_core::types::{DiscoveryContext, FormatType, Item, PatternCandidate};

/// A Monday, well after every fixture item is published.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap()
}

pub fn context() -> DiscoveryContext {
    DiscoveryContext::default().at(now())
}

pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            item: Item {
                id: id.to_string(),
                title: title.to_string(),
                published_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
                view_count: 1000,
                format_type: FormatType::Other,
                duration_seconds: 480,
                topic_cluster_id: None,
                baseline_views: Some(1000.0),
            },
        }
    }

    pub fn ratio(mut self, ratio: f64) -> Self {
        self.item.view_count = (ratio * 1000.0).round() as u64;
        self
    }

    pub fn format(mut self, format: FormatType) -> Self {
        self.item.format_type = format;
        self
    }

    pub fn duration(mut self, seconds: u32) -> Self {
        self.item.duration_seconds = seconds;
        self
    }

    pub fn cluster(mut self, cluster: &str) -> Self {
        self.item.topic_cluster_id = Some(cluster.to_string());
        self
    }

    pub fn week(mut self, week: i64) -> Self {
        self.item.published_at += Duration::weeks(week);
        self
    }

    pub fn day(mut self, day: i64) -> Self {
        self.item.published_at += Duration::days(day);
        self
    }

    pub fn build(self) -> Item {
        self.item
    }
}

/// `n` items with distinct ids `{prefix}{i}` sharing a title and ratio.
pub fn batch(prefix: &str, n: usize, title: &str, ratio: f64) -> Vec<Item> {
    (0..n)
        .map(|i| ItemBuilder::new(&format!("{prefix}{i}"), title).ratio(ratio).build())
        .collect()
}

/// Filler items with unique titles and unremarkable performance, spread
/// across the week so no weekday crosses the timing threshold.
pub fn filler(n: usize) -> Vec<Item> {
    const WORDS: [&str; 10] = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    ];
    (0..n)
        .map(|i| {
            let title = format!("{} {} {}", WORDS[i % 10], WORDS[(i / 10) % 10], i);
            ItemBuilder::new(&format!("filler{i}"), &title)
                .ratio(0.8)
                .day((i % 7) as i64)
                .build()
        })
        .collect()
}

/// In-memory [`ItemSource`].
#[derive(Default)]
pub struct MemorySource {
    pub items: Vec<Item>,
    /// Cluster population reported regardless of window, when set.
    pub cluster_population: Option<usize>,
    pub fail: bool,
}

impl MemorySource {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }
}

impl ItemSource for MemorySource {
    fn fetch_qualifying_items(&self, _ctx: &DiscoveryContext) -> Result<Vec<Item>, SourceError> {
        if self.fail {
            return Err(SourceError::Unavailable {
                reason: "database offline".to_string(),
            });
        }
        Ok(self.items.clone())
    }

    fn fetch_items(&self, ids: &[String]) -> Result<Vec<Item>, SourceError> {
        Ok(self
            .items
            .iter()
            .filter(|i| ids.contains(&i.id))
            .cloned()
            .collect())
    }

    fn count_cluster_items(
        &self,
        cluster_id: &str,
        since: DateTime<Utc>,
    ) -> Result<usize, SourceError> {
        if let Some(n) = self.cluster_population {
            return Ok(n);
        }
        Ok(self
            .items
            .iter()
            .filter(|i| i.topic_cluster_id.as_deref() == Some(cluster_id) && i.published_at >= since)
            .count())
    }
}

/// In-memory [`PatternStore`]; rejects ids listed in `reject`.
#[derive(Default)]
pub struct MemoryStore {
    pub saved: Mutex<Vec<(String, usize)>>,
    pub reject: Vec<String>,
}

impl PatternStore for MemoryStore {
    fn persist(
        &self,
        pattern: &PatternCandidate,
        associated_item_ids: &[String],
    ) -> Result<(), StoreError> {
        if self.reject.contains(&pattern.id) {
            return Err(StoreError::PersistFailed {
                pattern_id: pattern.id.clone(),
                reason: "constraint violation".to_string(),
            });
        }
        self.saved
            .lock()
            .unwrap()
            .push((pattern.id.clone(), associated_item_ids.len()));
        Ok(())
    }
}
