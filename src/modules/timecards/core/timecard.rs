// Timecard aggregate: identity, owner, lines and transition history.
//
// Purpose
// - Apply the workflow rules to one timecard.
//
// Responsibilities
// - Status is only ever changed by `record`, the single place a transition is appended.
// - Every operation validates fully before mutating, so a failure leaves no trace.
// - Transition queries scan the log instead of caching a pointer to the last transition.
//
// Boundaries
// - No input or output, no locking. The caller supplies the time and serialises access.

use crate::modules::timecards::core::command::TransitionCommand;
use crate::modules::timecards::core::decide::{decide_transition, ensure_deletable, ensure_draft};
use crate::modules::timecards::core::errors::TimecardError;
use crate::modules::timecards::core::line::{
    AnnotatedTimecardLine, LineTable, TimecardLine, TimecardLinePatch,
};
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::transition::{Transition, TransitionLog};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timecard {
    id: String,
    resource: String,
    opened: i64,
    status: TimecardStatus,
    lines: LineTable,
    transitions: TransitionLog,
}

impl Timecard {
    /// A new draft, with the `Entered` event recorded for its owner.
    pub fn open(id: impl Into<String>, resource: impl Into<String>, opened: i64) -> Self {
        let resource = resource.into();
        let mut timecard = Self {
            id: id.into(),
            resource: resource.clone(),
            opened,
            status: TimecardStatus::Draft,
            lines: LineTable::new(),
            transitions: TransitionLog::new(),
        };
        timecard.record(Transition::entered(resource, opened));
        timecard
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn opened(&self) -> i64 {
        self.opened
    }

    pub fn status(&self) -> TimecardStatus {
        self.status
    }

    pub fn lines(&self) -> &LineTable {
        &self.lines
    }

    pub fn transitions(&self) -> &TransitionLog {
        &self.transitions
    }

    pub fn add_line(
        &mut self,
        line: TimecardLine,
        recorded: i64,
    ) -> Result<AnnotatedTimecardLine, TimecardError> {
        ensure_draft(self, "add a line to")?;
        self.lines.append(line, recorded)
    }

    pub fn replace_line(
        &mut self,
        index: usize,
        line: TimecardLine,
        recorded: i64,
    ) -> Result<AnnotatedTimecardLine, TimecardError> {
        ensure_draft(self, "replace a line of")?;
        self.lines.replace_at(index, line, recorded)
    }

    pub fn update_line(
        &mut self,
        index: usize,
        patch: TimecardLinePatch,
        recorded: i64,
    ) -> Result<AnnotatedTimecardLine, TimecardError> {
        ensure_draft(self, "update a line of")?;
        self.lines.update_at(index, patch, recorded)
    }

    pub fn transition(
        &mut self,
        command: &TransitionCommand,
        occurred_at: i64,
    ) -> Result<Transition, TimecardError> {
        let transition = decide_transition(self, command, occurred_at)?;
        Ok(self.record(transition))
    }

    pub fn ensure_deletable(&self) -> Result<(), TimecardError> {
        ensure_deletable(self)
    }

    /// Most recent transition into `status`, available only while the timecard is in it.
    pub fn current_transition(&self, status: TimecardStatus) -> Result<&Transition, TimecardError> {
        if self.status != status {
            return Err(TimecardError::MissingTransition { status });
        }
        self.transitions
            .most_recent_where(status)
            .ok_or(TimecardError::MissingTransition { status })
    }

    pub fn submittal(&self) -> Result<&Transition, TimecardError> {
        self.current_transition(TimecardStatus::Submitted)
    }

    pub fn cancellation(&self) -> Result<&Transition, TimecardError> {
        self.current_transition(TimecardStatus::Cancelled)
    }

    pub fn rejection(&self) -> Result<&Transition, TimecardError> {
        self.current_transition(TimecardStatus::Rejected)
    }

    pub fn approval(&self) -> Result<&Transition, TimecardError> {
        self.current_transition(TimecardStatus::Approved)
    }

    fn record(&mut self, transition: Transition) -> Transition {
        let recorded = self.transitions.append(transition);
        self.status = recorded.resulting_status();
        recorded.clone()
    }
}
