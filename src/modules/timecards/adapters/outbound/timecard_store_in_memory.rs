// In memory implementation of the TimecardStore port.
//
// Purpose
// - Serve the API and the handler tests without a database.
//
// Responsibilities
// - Map identifiers to per-timecard lock handles.
// - Never hold the map lock while waiting on a timecard lock.

use crate::modules::timecards::adapters::outbound::timecard_store::{
    SharedTimecard, StoreError, TimecardStore,
};
use crate::modules::timecards::core::timecard::Timecard;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTimecardStore {
    inner: RwLock<BTreeMap<String, SharedTimecard>>,
    is_offline: bool,
}

impl InMemoryTimecardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Timecard store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimecardStore for InMemoryTimecardStore {
    async fn insert(&self, timecard: Timecard) -> Result<SharedTimecard, StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        if guard.contains_key(timecard.id()) {
            return Err(StoreError::Duplicate(timecard.id().to_string()));
        }
        let id = timecard.id().to_string();
        let handle = Arc::new(RwLock::new(timecard));
        guard.insert(id, handle.clone());
        Ok(handle)
    }

    async fn find(&self, id: &str) -> Result<Option<SharedTimecard>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.write().await.remove(id).is_some())
    }

    async fn all(&self) -> Result<Vec<SharedTimecard>, StoreError> {
        self.ensure_online()?;
        let handles: Vec<SharedTimecard> = self.inner.read().await.values().cloned().collect();
        let mut keyed = Vec::with_capacity(handles.len());
        for handle in handles {
            let opened = handle.read().await.opened();
            keyed.push((opened, handle));
        }
        // Stable, so equal `opened` values keep identifier order.
        keyed.sort_by_key(|(opened, _)| *opened);
        Ok(keyed.into_iter().map(|(_, handle)| handle).collect())
    }
}
