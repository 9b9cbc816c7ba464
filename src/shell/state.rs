use crate::modules::timecards::adapters::outbound::timecard_store_in_memory::InMemoryTimecardStore;
use crate::modules::timecards::use_cases::manage_lines::handler::ManageLinesHandler;
use crate::modules::timecards::use_cases::manage_timecards::handler::ManageTimecardsHandler;
use crate::modules::timecards::use_cases::transition_timecard::handler::TransitionTimecardHandler;
use crate::shared::core::primitives::{Clock, IdGenerator, SystemClock, UuidV7Ids};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub timecards: Arc<ManageTimecardsHandler<InMemoryTimecardStore>>,
    pub lines: Arc<ManageLinesHandler<InMemoryTimecardStore>>,
    pub transitions: Arc<TransitionTimecardHandler<InMemoryTimecardStore>>,
}

impl AppState {
    pub fn new(
        store: Arc<InMemoryTimecardStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            timecards: Arc::new(ManageTimecardsHandler::new(
                store.clone(),
                clock.clone(),
                ids,
            )),
            lines: Arc::new(ManageLinesHandler::new(store.clone(), clock.clone())),
            transitions: Arc::new(TransitionTimecardHandler::new(store, clock)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryTimecardStore::new()),
            Arc::new(SystemClock),
            Arc::new(UuidV7Ids),
        )
    }
}
