use crate::modules::timecards::adapters::outbound::timecard_store::TimecardStore;
use crate::modules::timecards::core::command::TransitionCommand;
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::transition::Transition;
use crate::modules::timecards::use_cases::errors::{ApplicationError, read_timecard, write_timecard};
use crate::shared::core::primitives::Clock;
use std::sync::Arc;

pub struct TransitionTimecardHandler<TStore>
where
    TStore: TimecardStore + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
}

impl<TStore> TransitionTimecardHandler<TStore>
where
    TStore: TimecardStore + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(
        &self,
        id: &str,
        command: TransitionCommand,
    ) -> Result<Transition, ApplicationError> {
        let mut timecard = write_timecard(&*self.store, id).await?;
        match timecard.transition(&command, self.clock.now_millis()) {
            Ok(transition) => {
                tracing::info!(
                    timecard_id = id,
                    kind = ?transition.kind,
                    resource = %transition.resource,
                    "transition recorded"
                );
                Ok(transition)
            }
            Err(reason) => {
                tracing::debug!(
                    timecard_id = id,
                    operation = command.operation(),
                    resource = command.resource(),
                    error = %reason,
                    "transition refused"
                );
                Err(reason.into())
            }
        }
    }

    pub async fn transitions(&self, id: &str) -> Result<Vec<Transition>, ApplicationError> {
        let timecard = read_timecard(&*self.store, id).await?;
        Ok(timecard.transitions().all().to_vec())
    }

    /// Most recent transition into `status`, while the timecard is still in it.
    pub async fn current(
        &self,
        id: &str,
        status: TimecardStatus,
    ) -> Result<Transition, ApplicationError> {
        let timecard = read_timecard(&*self.store, id).await?;
        let transition = timecard.current_transition(status)?.clone();
        Ok(transition)
    }
}
