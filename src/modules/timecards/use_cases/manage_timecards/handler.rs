use crate::modules::timecards::adapters::outbound::timecard_store::TimecardStore;
use crate::modules::timecards::core::timecard::Timecard;
use crate::modules::timecards::use_cases::errors::{ApplicationError, read_timecard, write_timecard};
use crate::shared::core::primitives::{Clock, IdGenerator};
use std::sync::Arc;

pub struct ManageTimecardsHandler<TStore>
where
    TStore: TimecardStore + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl<TStore> ManageTimecardsHandler<TStore>
where
    TStore: TimecardStore + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, clock, ids }
    }

    pub async fn create(&self, resource: &str) -> Result<Timecard, ApplicationError> {
        let timecard = Timecard::open(self.ids.next_id(), resource, self.clock.now_millis());
        let handle = self.store.insert(timecard).await?;
        let snapshot = handle.read().await.clone();
        tracing::info!(timecard_id = %snapshot.id(), resource, "timecard opened");
        Ok(snapshot)
    }

    pub async fn find(&self, id: &str) -> Result<Timecard, ApplicationError> {
        let snapshot = read_timecard(&*self.store, id).await?.clone();
        Ok(snapshot)
    }

    pub async fn list(&self) -> Result<Vec<Timecard>, ApplicationError> {
        let handles = self.store.all().await?;
        let mut timecards = Vec::with_capacity(handles.len());
        for handle in handles {
            timecards.push(handle.read().await.clone());
        }
        Ok(timecards)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApplicationError> {
        // Held until the entry is gone, so nobody moves the timecard out of a deletable status meanwhile.
        let timecard = write_timecard(&*self.store, id).await?;
        if let Err(reason) = timecard.ensure_deletable() {
            tracing::debug!(timecard_id = id, error = %reason, "delete refused");
            return Err(reason.into());
        }
        self.store.delete(id).await?;
        tracing::info!(timecard_id = id, "timecard deleted");
        Ok(())
    }
}
