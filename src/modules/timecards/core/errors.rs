use crate::modules::timecards::core::status::TimecardStatus;

/// Expected outcomes of misuse. Every variant is returned before anything is mutated.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TimecardError {
    #[error("cannot {operation} a timecard in status {status}")]
    InvalidState {
        operation: &'static str,
        status: TimecardStatus,
    },

    #[error("cannot submit a timecard without lines")]
    EmptyTimecard,

    #[error("resource {resource} is not authorized for this transition")]
    NotAuthorized { resource: String },

    #[error("timecard has no current {status} transition")]
    MissingTransition { status: TimecardStatus },

    #[error("line {index} not found")]
    LineNotFound { index: usize },

    #[error("invalid line: {0}")]
    InvalidLine(String),
}
