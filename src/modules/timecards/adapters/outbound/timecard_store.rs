// Port for keeping timecards, without deciding anything about them.
//
// Responsibilities
// - Hand out live handles: a lookup returns the stored timecard behind its own lock, not a copy.
// - Enumerate in `opened` order.
//
// Boundaries
// - No status or ownership checks. Callers verify eligibility (for example before deleting).

use crate::modules::timecards::core::timecard::Timecard;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// One lock per timecard, so operations on different timecards never wait on each other.
pub type SharedTimecard = Arc<RwLock<Timecard>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("timecard {0} already exists")]
    Duplicate(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TimecardStore: Send + Sync {
    async fn insert(&self, timecard: Timecard) -> Result<SharedTimecard, StoreError>;
    async fn find(&self, id: &str) -> Result<Option<SharedTimecard>, StoreError>;
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
    async fn all(&self) -> Result<Vec<SharedTimecard>, StoreError>;
}
