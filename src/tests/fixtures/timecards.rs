// Timecards parked in each workflow status, owned by `OWNER`, each with one line.

use crate::modules::timecards::core::command::TransitionCommand;
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::timecard::Timecard;
use crate::tests::fixtures::lines::TimecardLineBuilder;

pub const OWNER: &str = "res-owner-0001";
pub const OTHER: &str = "res-manager-0002";

pub fn draft_with_line() -> Timecard {
    let mut timecard = Timecard::open("tc-fixed-0001", OWNER, 1_000);
    timecard
        .add_line(TimecardLineBuilder::new().build(), 2_000)
        .unwrap();
    timecard
}

pub fn timecard_in(status: TimecardStatus) -> Timecard {
    let mut timecard = draft_with_line();
    let owner = || OWNER.to_string();
    let other = || OTHER.to_string();
    let steps = match status {
        TimecardStatus::Draft => vec![],
        TimecardStatus::Submitted => vec![TransitionCommand::Submit { resource: owner() }],
        TimecardStatus::Approved => vec![
            TransitionCommand::Submit { resource: owner() },
            TransitionCommand::Approve { resource: other() },
        ],
        TimecardStatus::Rejected => vec![
            TransitionCommand::Submit { resource: owner() },
            TransitionCommand::Reject { resource: other() },
        ],
        TimecardStatus::Cancelled => vec![TransitionCommand::Cancel { resource: owner() }],
    };
    for (step, command) in steps.iter().enumerate() {
        timecard
            .transition(command, 3_000 + step as i64 * 1_000)
            .unwrap();
    }
    timecard
}
