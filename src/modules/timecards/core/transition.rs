// Transitions and the append-only log that records them.
//
// Purpose
// - Remember who moved a timecard where, and when, including the initial entry event.
//
// Responsibilities
// - Keep append order equal to chronological order: `occurred_at` never decreases.
// - Answer "most recent transition into status X" as a scan over history.
//
// Boundaries
// - Entries are never edited or removed.

use crate::modules::timecards::core::status::TimecardStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    Entered,
    Submittal,
    Cancellation,
    Rejection,
    Approval,
}

impl TransitionKind {
    /// Status a transition of this kind leads to. `Entered` implies Draft without recording it.
    pub fn target(self) -> Option<TimecardStatus> {
        match self {
            TransitionKind::Entered => None,
            TransitionKind::Submittal => Some(TimecardStatus::Submitted),
            TransitionKind::Cancellation => Some(TimecardStatus::Cancelled),
            TransitionKind::Rejection => Some(TimecardStatus::Rejected),
            TransitionKind::Approval => Some(TimecardStatus::Approved),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub kind: TransitionKind,
    pub resource: String,
    pub occurred_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitioned_to: Option<TimecardStatus>,
}

impl Transition {
    pub fn new(kind: TransitionKind, resource: impl Into<String>, occurred_at: i64) -> Self {
        Self {
            kind,
            resource: resource.into(),
            occurred_at,
            transitioned_to: kind.target(),
        }
    }

    pub fn entered(resource: impl Into<String>, occurred_at: i64) -> Self {
        Self::new(TransitionKind::Entered, resource, occurred_at)
    }

    pub fn resulting_status(&self) -> TimecardStatus {
        self.transitioned_to.unwrap_or(TimecardStatus::Draft)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TransitionLog {
    transitions: Vec<Transition>,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, mut transition: Transition) -> &Transition {
        if let Some(last) = self.transitions.last() {
            transition.occurred_at = transition.occurred_at.max(last.occurred_at);
        }
        self.transitions.push(transition);
        &self.transitions[self.transitions.len() - 1]
    }

    pub fn all(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&Transition> {
        self.transitions.last()
    }

    /// Latest by `occurred_at`; among equal timestamps the later append wins.
    pub fn most_recent_where(&self, transitioned_to: TimecardStatus) -> Option<&Transition> {
        self.transitions
            .iter()
            .filter(|t| t.transitioned_to == Some(transitioned_to))
            .max_by_key(|t| t.occurred_at)
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
