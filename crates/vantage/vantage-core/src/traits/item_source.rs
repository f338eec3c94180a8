use chrono::{DateTime, Utc};

use crate::errors::SourceError;
use crate::types::{DiscoveryContext, Item};

/// Provider of already-fetched, already-scored items.
pub trait ItemSource: Send + Sync {
    /// Items matching the context filters, filtered server-side where possible.
    fn fetch_qualifying_items(&self, ctx: &DiscoveryContext) -> Result<Vec<Item>, SourceError>;

    /// Resolve items by id. Unknown ids are skipped.
    fn fetch_items(&self, ids: &[String]) -> Result<Vec<Item>, SourceError>;

    /// Number of items in `cluster_id` published at or after `since`.
    fn count_cluster_items(
        &self,
        cluster_id: &str,
        since: DateTime<Utc>,
    ) -> Result<usize, SourceError>;
}
