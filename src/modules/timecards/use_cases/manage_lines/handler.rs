use crate::modules::timecards::adapters::outbound::timecard_store::TimecardStore;
use crate::modules::timecards::core::errors::TimecardError;
use crate::modules::timecards::core::line::{AnnotatedTimecardLine, TimecardLine, TimecardLinePatch};
use crate::modules::timecards::use_cases::errors::{ApplicationError, read_timecard, write_timecard};
use crate::shared::core::primitives::Clock;
use std::sync::Arc;

pub struct ManageLinesHandler<TStore>
where
    TStore: TimecardStore + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
}

impl<TStore> ManageLinesHandler<TStore>
where
    TStore: TimecardStore + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn lines(&self, id: &str) -> Result<Vec<AnnotatedTimecardLine>, ApplicationError> {
        let timecard = read_timecard(&*self.store, id).await?;
        Ok(timecard.lines().all().to_vec())
    }

    pub async fn add_line(
        &self,
        id: &str,
        line: TimecardLine,
    ) -> Result<AnnotatedTimecardLine, ApplicationError> {
        let mut timecard = write_timecard(&*self.store, id).await?;
        let result = timecard.add_line(line, self.clock.now_millis());
        Self::log_outcome(id, "line added", result)
    }

    pub async fn replace_line(
        &self,
        id: &str,
        index: usize,
        line: TimecardLine,
    ) -> Result<AnnotatedTimecardLine, ApplicationError> {
        let mut timecard = write_timecard(&*self.store, id).await?;
        let result = timecard.replace_line(index, line, self.clock.now_millis());
        Self::log_outcome(id, "line replaced", result)
    }

    pub async fn update_line(
        &self,
        id: &str,
        index: usize,
        patch: TimecardLinePatch,
    ) -> Result<AnnotatedTimecardLine, ApplicationError> {
        let mut timecard = write_timecard(&*self.store, id).await?;
        let result = timecard.update_line(index, patch, self.clock.now_millis());
        Self::log_outcome(id, "line updated", result)
    }

    fn log_outcome(
        id: &str,
        message: &'static str,
        result: Result<AnnotatedTimecardLine, TimecardError>,
    ) -> Result<AnnotatedTimecardLine, ApplicationError> {
        match result {
            Ok(line) => {
                tracing::info!(timecard_id = id, index = line.index, "{message}");
                Ok(line)
            }
            Err(reason) => {
                tracing::debug!(timecard_id = id, error = %reason, "line change refused");
                Err(reason.into())
            }
        }
    }
}
