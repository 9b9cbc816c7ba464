// Requests to move a timecard through its workflow.
//
// Each carries the already-authenticated acting resource, trusted verbatim.

use crate::modules::timecards::core::transition::TransitionKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionCommand {
    Submit { resource: String },
    Cancel { resource: String },
    Reject { resource: String },
    Approve { resource: String },
}

impl TransitionCommand {
    pub fn resource(&self) -> &str {
        match self {
            TransitionCommand::Submit { resource }
            | TransitionCommand::Cancel { resource }
            | TransitionCommand::Reject { resource }
            | TransitionCommand::Approve { resource } => resource,
        }
    }

    pub fn kind(&self) -> TransitionKind {
        match self {
            TransitionCommand::Submit { .. } => TransitionKind::Submittal,
            TransitionCommand::Cancel { .. } => TransitionKind::Cancellation,
            TransitionCommand::Reject { .. } => TransitionKind::Rejection,
            TransitionCommand::Approve { .. } => TransitionKind::Approval,
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            TransitionCommand::Submit { .. } => "submit",
            TransitionCommand::Cancel { .. } => "cancel",
            TransitionCommand::Reject { .. } => "reject",
            TransitionCommand::Approve { .. } => "approve",
        }
    }
}
