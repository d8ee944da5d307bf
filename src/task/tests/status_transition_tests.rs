//! Unit tests for the task status transition matrix.

use crate::task::domain::TaskStatus;
use rstest::rstest;

#[rstest]
#[case(TaskStatus::NotStarted, TaskStatus::NotStarted, false)]
#[case(TaskStatus::NotStarted, TaskStatus::InProgress, true)]
#[case(TaskStatus::NotStarted, TaskStatus::WaitingReview, false)]
#[case(TaskStatus::NotStarted, TaskStatus::RevisionNeeded, false)]
#[case(TaskStatus::NotStarted, TaskStatus::Completed, false)]
#[case(TaskStatus::InProgress, TaskStatus::NotStarted, false)]
#[case(TaskStatus::InProgress, TaskStatus::InProgress, false)]
#[case(TaskStatus::InProgress, TaskStatus::WaitingReview, true)]
#[case(TaskStatus::InProgress, TaskStatus::RevisionNeeded, false)]
#[case(TaskStatus::InProgress, TaskStatus::Completed, false)]
#[case(TaskStatus::WaitingReview, TaskStatus::NotStarted, false)]
#[case(TaskStatus::WaitingReview, TaskStatus::InProgress, false)]
#[case(TaskStatus::WaitingReview, TaskStatus::WaitingReview, false)]
#[case(TaskStatus::WaitingReview, TaskStatus::RevisionNeeded, true)]
#[case(TaskStatus::WaitingReview, TaskStatus::Completed, true)]
#[case(TaskStatus::RevisionNeeded, TaskStatus::NotStarted, false)]
#[case(TaskStatus::RevisionNeeded, TaskStatus::InProgress, true)]
#[case(TaskStatus::RevisionNeeded, TaskStatus::WaitingReview, false)]
#[case(TaskStatus::RevisionNeeded, TaskStatus::RevisionNeeded, false)]
#[case(TaskStatus::RevisionNeeded, TaskStatus::Completed, false)]
#[case(TaskStatus::Completed, TaskStatus::NotStarted, false)]
#[case(TaskStatus::Completed, TaskStatus::InProgress, false)]
#[case(TaskStatus::Completed, TaskStatus::WaitingReview, false)]
#[case(TaskStatus::Completed, TaskStatus::RevisionNeeded, false)]
#[case(TaskStatus::Completed, TaskStatus::Completed, false)]
fn can_transition_to_returns_expected(
    #[case] from: TaskStatus,
    #[case] to: TaskStatus,
    #[case] expected: bool,
) {
    assert_eq!(from.can_transition_to(to), expected);
}

#[rstest]
#[case(TaskStatus::NotStarted, false)]
#[case(TaskStatus::InProgress, false)]
#[case(TaskStatus::WaitingReview, false)]
#[case(TaskStatus::RevisionNeeded, false)]
#[case(TaskStatus::Completed, true)]
fn is_terminal_returns_expected(#[case] status: TaskStatus, #[case] expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[rstest]
#[case(TaskStatus::NotStarted, false)]
#[case(TaskStatus::InProgress, true)]
#[case(TaskStatus::WaitingReview, true)]
#[case(TaskStatus::RevisionNeeded, true)]
#[case(TaskStatus::Completed, false)]
fn is_active_returns_expected(#[case] status: TaskStatus, #[case] expected: bool) {
    assert_eq!(status.is_active(), expected);
}

#[rstest]
#[case(TaskStatus::NotStarted, "not_started")]
#[case(TaskStatus::InProgress, "in_progress")]
#[case(TaskStatus::WaitingReview, "waiting_review")]
#[case(TaskStatus::RevisionNeeded, "revision_needed")]
#[case(TaskStatus::Completed, "completed")]
fn storage_form_round_trips(#[case] status: TaskStatus, #[case] storage: &str) {
    assert_eq!(status.as_str(), storage);
    assert_eq!(TaskStatus::try_from(storage), Ok(status));
}

#[rstest]
fn parse_normalises_case_and_whitespace() {
    assert_eq!(
        TaskStatus::try_from("  Waiting_Review "),
        Ok(TaskStatus::WaitingReview)
    );
}

#[rstest]
fn parse_rejects_unknown_status() {
    let result = TaskStatus::try_from("overdue");
    assert!(result.is_err(), "overdue must not parse as a stored status");
}
