use crate::errors::StoreError;
use crate::types::PatternCandidate;

/// Destination for selected patterns. Eventual consistency is enough.
pub trait PatternStore: Send + Sync {
    fn persist(
        &self,
        pattern: &PatternCandidate,
        associated_item_ids: &[String],
    ) -> Result<(), StoreError>;
}
