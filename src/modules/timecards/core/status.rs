use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimecardStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    Cancelled,
}

impl fmt::Display for TimecardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimecardStatus::Draft => "Draft",
            TimecardStatus::Submitted => "Submitted",
            TimecardStatus::Approved => "Approved",
            TimecardStatus::Rejected => "Rejected",
            TimecardStatus::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}
