use crate::modules::timecards::core::command::TransitionCommand;
use crate::modules::timecards::core::errors::TimecardError;
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::transition::TransitionKind;
use crate::modules::timecards::use_cases::errors::ApplicationError;
use crate::tests::fixtures::lines::TimecardLineBuilder;
use crate::tests::fixtures::state::make_test_state;

const R1: &str = "res-0001";
const R2: &str = "res-0002";

#[tokio::test]
async fn approves_a_submitted_timecard_only_for_another_resource() {
    let state = make_test_state();
    let timecard = state.timecards.create(R1).await.unwrap();
    let id = timecard.id();

    state
        .lines
        .add_line(id, TimecardLineBuilder::new().hours(40.0).project("P").build())
        .await
        .unwrap();
    state
        .transitions
        .handle(id, TransitionCommand::Submit { resource: R1.into() })
        .await
        .unwrap();
    assert_eq!(
        state.timecards.find(id).await.unwrap().status(),
        TimecardStatus::Submitted
    );

    let self_approval = state
        .transitions
        .handle(id, TransitionCommand::Approve { resource: R1.into() })
        .await;
    assert!(matches!(
        self_approval,
        Err(ApplicationError::Domain(TimecardError::NotAuthorized { .. }))
    ));
    assert_eq!(
        state.timecards.find(id).await.unwrap().status(),
        TimecardStatus::Submitted
    );

    state
        .transitions
        .handle(id, TransitionCommand::Approve { resource: R2.into() })
        .await
        .unwrap();
    let approved = state.timecards.find(id).await.unwrap();
    assert_eq!(approved.status(), TimecardStatus::Approved);
    let kinds: Vec<_> = approved.transitions().all().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TransitionKind::Entered,
            TransitionKind::Submittal,
            TransitionKind::Approval
        ]
    );
    let approval = state
        .transitions
        .current(id, TimecardStatus::Approved)
        .await
        .unwrap();
    assert_eq!(approval.resource, R2);
}

#[tokio::test]
async fn refuses_to_submit_an_empty_timecard() {
    let state = make_test_state();
    let timecard = state.timecards.create(R1).await.unwrap();
    let id = timecard.id();

    let result = state
        .transitions
        .handle(id, TransitionCommand::Submit { resource: R1.into() })
        .await;
    assert!(matches!(
        result,
        Err(ApplicationError::Domain(TimecardError::EmptyTimecard))
    ));

    let unchanged = state.timecards.find(id).await.unwrap();
    assert_eq!(unchanged.status(), TimecardStatus::Draft);
    assert_eq!(unchanged.transitions().len(), 1);
}

#[tokio::test]
async fn cancels_a_submitted_timecard_and_then_deletes_it() {
    let state = make_test_state();
    let timecard = state.timecards.create(R1).await.unwrap();
    let id = timecard.id();
    state
        .lines
        .add_line(id, TimecardLineBuilder::new().build())
        .await
        .unwrap();
    state
        .transitions
        .handle(id, TransitionCommand::Submit { resource: R1.into() })
        .await
        .unwrap();

    let by_other = state
        .transitions
        .handle(id, TransitionCommand::Cancel { resource: R2.into() })
        .await;
    assert!(matches!(
        by_other,
        Err(ApplicationError::Domain(TimecardError::NotAuthorized { .. }))
    ));
    assert!(matches!(
        state.timecards.delete(id).await,
        Err(ApplicationError::Domain(TimecardError::InvalidState { .. }))
    ));

    let cancellation = state
        .transitions
        .handle(id, TransitionCommand::Cancel { resource: R1.into() })
        .await
        .unwrap();
    assert_eq!(
        state
            .transitions
            .current(id, TimecardStatus::Cancelled)
            .await
            .unwrap(),
        cancellation
    );
    assert!(matches!(
        state
            .transitions
            .current(id, TimecardStatus::Submitted)
            .await,
        Err(ApplicationError::Domain(TimecardError::MissingTransition { .. }))
    ));

    state.timecards.delete(id).await.unwrap();
    assert!(matches!(
        state.timecards.find(id).await,
        Err(ApplicationError::TimecardNotFound(_))
    ));
}

#[tokio::test]
async fn keeps_transition_times_monotonic() {
    let state = make_test_state();
    let timecard = state.timecards.create(R1).await.unwrap();
    let id = timecard.id();
    state
        .lines
        .add_line(id, TimecardLineBuilder::new().build())
        .await
        .unwrap();
    state
        .transitions
        .handle(id, TransitionCommand::Submit { resource: R1.into() })
        .await
        .unwrap();
    state
        .transitions
        .handle(id, TransitionCommand::Reject { resource: R2.into() })
        .await
        .unwrap();

    let transitions = state.transitions.transitions(id).await.unwrap();
    assert!(
        transitions
            .windows(2)
            .all(|w| w[0].occurred_at <= w[1].occurred_at)
    );
    assert_eq!(
        transitions.last().unwrap().transitioned_to,
        Some(TimecardStatus::Rejected)
    );
}
