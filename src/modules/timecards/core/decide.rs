// Pure decision functions.
//
// Purpose
// - Validate a request against the current timecard and produce the transition to record.
//
// Responsibilities
// - Check in this order: status, then emptiness (submit only), then the actor.
// - Never mutate. The aggregate records what is decided here.

use crate::modules::timecards::core::command::TransitionCommand;
use crate::modules::timecards::core::errors::TimecardError;
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::timecard::Timecard;
use crate::modules::timecards::core::transition::Transition;

pub fn decide_transition(
    timecard: &Timecard,
    command: &TransitionCommand,
    occurred_at: i64,
) -> Result<Transition, TimecardError> {
    let status = timecard.status();
    let allowed_from: &[TimecardStatus] = match command {
        TransitionCommand::Submit { .. } => &[TimecardStatus::Draft],
        TransitionCommand::Cancel { .. } => &[TimecardStatus::Draft, TimecardStatus::Submitted],
        TransitionCommand::Reject { .. } | TransitionCommand::Approve { .. } => {
            &[TimecardStatus::Submitted]
        }
    };
    if !allowed_from.contains(&status) {
        return Err(TimecardError::InvalidState {
            operation: command.operation(),
            status,
        });
    }

    if matches!(command, TransitionCommand::Submit { .. }) && timecard.lines().is_empty() {
        return Err(TimecardError::EmptyTimecard);
    }

    // Owners submit and cancel their own time; somebody else rejects or approves it.
    let is_owner = command.resource() == timecard.resource();
    let authorized = match command {
        TransitionCommand::Submit { .. } | TransitionCommand::Cancel { .. } => is_owner,
        TransitionCommand::Reject { .. } | TransitionCommand::Approve { .. } => !is_owner,
    };
    if !authorized {
        return Err(TimecardError::NotAuthorized {
            resource: command.resource().to_string(),
        });
    }

    Ok(Transition::new(
        command.kind(),
        command.resource(),
        occurred_at,
    ))
}

pub fn ensure_draft(timecard: &Timecard, operation: &'static str) -> Result<(), TimecardError> {
    match timecard.status() {
        TimecardStatus::Draft => Ok(()),
        status => Err(TimecardError::InvalidState { operation, status }),
    }
}

pub fn ensure_deletable(timecard: &Timecard) -> Result<(), TimecardError> {
    match timecard.status() {
        TimecardStatus::Draft | TimecardStatus::Cancelled => Ok(()),
        status => Err(TimecardError::InvalidState {
            operation: "delete",
            status,
        }),
    }
}
