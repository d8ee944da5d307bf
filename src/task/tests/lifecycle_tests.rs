//! Unit tests for lifecycle transitions and work-duration accounting.

use super::fixtures::{ManualClock, fresh_task, nov_at};
use crate::task::domain::{ProofOfWork, RevisionFeedback, TaskDomainError, TaskStatus};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> ManualClock {
    ManualClock::starting_at(nov_at(12, 9, 0))
}

#[rstest]
fn start_records_first_start_and_moves_in_progress(clock: ManualClock) {
    let mut task = fresh_task("Rashid", &clock);
    assert!(task.actual_start_time().is_none());

    task.start(&clock).expect("start from not-started");

    assert_eq!(task.status(), TaskStatus::InProgress);
    assert_eq!(task.actual_start_time(), Some(nov_at(12, 9, 0)));
    assert_eq!(task.duration_minutes(), 0);
}

#[rstest]
fn submit_banks_elapsed_minutes_and_records_end(clock: ManualClock) {
    let mut task = fresh_task("Rashid", &clock);
    task.start(&clock).expect("start");

    clock.set(nov_at(12, 10, 35));
    let proof = ProofOfWork::link("https://figma.example.com/kv-draft").expect("valid proof");
    task.submit(proof, &clock).expect("submit from in-progress");

    assert_eq!(task.status(), TaskStatus::WaitingReview);
    assert_eq!(task.actual_end_time(), Some(nov_at(12, 10, 35)));
    assert_eq!(task.duration_minutes(), 95);
    assert!(task.proof().is_some_and(ProofOfWork::is_link));
}

#[rstest]
fn immediate_submit_accumulates_zero_minutes(clock: ManualClock) {
    let mut task = fresh_task("Rashid", &clock);
    task.start(&clock).expect("start");

    let proof = ProofOfWork::image("data:image/png;base64,AAAA").expect("valid proof");
    task.submit(proof, &clock).expect("submit");

    assert_eq!(task.duration_minutes(), 0);
}

#[rstest]
fn revision_cycle_adds_only_its_own_elapsed_time(clock: ManualClock) {
    let mut task = fresh_task("Rashid", &clock);

    // First cycle: 09:00 to 10:30, 90 minutes.
    task.start(&clock).expect("first start");
    clock.set(nov_at(12, 10, 30));
    let first_proof = ProofOfWork::link("https://figma.example.com/v1").expect("valid proof");
    task.submit(first_proof, &clock).expect("first submit");
    assert_eq!(task.duration_minutes(), 90);

    let feedback = RevisionFeedback::new("fix colors").expect("valid feedback");
    task.request_revision(feedback, &clock).expect("revision");

    // Second cycle starts two hours later and runs 30 minutes. The gap
    // between cycles must not be billed.
    clock.set(nov_at(12, 12, 30));
    task.start(&clock).expect("restart");
    clock.set(nov_at(12, 13, 0));
    let second_proof = ProofOfWork::link("https://figma.example.com/v2").expect("valid proof");
    task.submit(second_proof, &clock).expect("second submit");

    assert_eq!(task.duration_minutes(), 120);
}

#[rstest]
fn duration_never_decreases_across_repeated_cycles(clock: ManualClock) {
    let mut task = fresh_task("Rashid", &clock);
    let mut previous = 0;

    for round in 0..4_u32 {
        task.start(&clock).expect("start");
        clock.set(nov_at(13, 9 + round, 15));
        let proof = ProofOfWork::link("https://figma.example.com/next").expect("valid proof");
        task.submit(proof, &clock).expect("submit");

        assert!(task.duration_minutes() >= previous);
        previous = task.duration_minutes();

        let feedback = RevisionFeedback::new("tighten the layout").expect("valid feedback");
        task.request_revision(feedback, &clock).expect("revision");
    }
}

#[rstest]
fn request_revision_clears_end_time_and_keeps_start(clock: ManualClock) {
    let mut task = fresh_task("Rashid", &clock);
    task.start(&clock).expect("start");
    clock.set(nov_at(12, 11, 0));
    let proof = ProofOfWork::link("https://figma.example.com/v1").expect("valid proof");
    task.submit(proof, &clock).expect("submit");
    assert!(task.actual_end_time().is_some());

    let feedback = RevisionFeedback::new("fix colors").expect("valid feedback");
    task.request_revision(feedback, &clock).expect("revision");

    assert_eq!(task.status(), TaskStatus::RevisionNeeded);
    assert!(task.actual_end_time().is_none());
    assert_eq!(
        task.revision_feedback().map(AsRef::as_ref),
        Some("fix colors")
    );

    // Restarting resumes the lifecycle without touching the first start.
    clock.set(nov_at(12, 14, 0));
    task.start(&clock).expect("restart");
    assert_eq!(task.actual_start_time(), Some(nov_at(12, 9, 0)));
}

#[rstest]
fn approve_completes_without_touching_time_fields(clock: ManualClock) {
    let mut task = fresh_task("Rashid", &clock);
    task.start(&clock).expect("start");
    clock.set(nov_at(12, 10, 0));
    let proof = ProofOfWork::link("https://figma.example.com/final").expect("valid proof");
    task.submit(proof, &clock).expect("submit");
    let end_before = task.actual_end_time();
    let minutes_before = task.duration_minutes();

    clock.set(nov_at(12, 16, 0));
    task.approve(&clock).expect("approve from waiting-review");

    assert_eq!(task.status(), TaskStatus::Completed);
    assert_eq!(task.actual_end_time(), end_before);
    assert_eq!(task.duration_minutes(), minutes_before);
}

#[rstest]
fn approve_outside_review_fails_and_leaves_task_unmodified(clock: ManualClock) {
    let mut task = fresh_task("Rashid", &clock);
    let before = task.clone();

    let result = task.approve(&clock);

    assert_eq!(
        result,
        Err(TaskDomainError::InvalidTransition {
            task_id: before.id(),
            from: TaskStatus::NotStarted,
            to: TaskStatus::Completed,
        })
    );
    assert_eq!(task, before);
}

#[rstest]
fn submit_outside_in_progress_fails_and_leaves_task_unmodified(clock: ManualClock) {
    let mut task = fresh_task("Rashid", &clock);
    let before = task.clone();
    let proof = ProofOfWork::link("https://figma.example.com/early").expect("valid proof");

    let result = task.submit(proof, &clock);

    assert_eq!(
        result,
        Err(TaskDomainError::InvalidTransition {
            task_id: before.id(),
            from: TaskStatus::NotStarted,
            to: TaskStatus::WaitingReview,
        })
    );
    assert_eq!(task, before);
}

#[rstest]
fn completed_task_rejects_restart(clock: ManualClock) {
    let mut task = fresh_task("Rashid", &clock);
    task.start(&clock).expect("start");
    let proof = ProofOfWork::link("https://figma.example.com/final").expect("valid proof");
    task.submit(proof, &clock).expect("submit");
    task.approve(&clock).expect("approve");

    let result = task.start(&clock);

    assert!(matches!(
        result,
        Err(TaskDomainError::InvalidTransition { .. })
    ));
    assert_eq!(task.status(), TaskStatus::Completed);
}

#[rstest]
fn empty_proof_is_rejected_at_construction() {
    assert_eq!(ProofOfWork::link("   "), Err(TaskDomainError::MissingProof));
    assert_eq!(ProofOfWork::image(""), Err(TaskDomainError::MissingProof));
}

#[rstest]
fn empty_feedback_is_rejected_at_construction() {
    assert_eq!(
        RevisionFeedback::new("  "),
        Err(TaskDomainError::MissingFeedback)
    );
}

#[rstest]
fn overdue_is_derived_from_deadline_and_status(clock: ManualClock) {
    let mut task = fresh_task("Rashid", &clock);

    // Deadline 20 November: not overdue on the deadline day itself.
    assert!(!task.is_overdue(nov_at(20, 23, 0)));
    // Overdue once the deadline day has passed, whatever the stored status.
    assert!(task.is_overdue(nov_at(21, 0, 30)));
    assert_eq!(task.status(), TaskStatus::NotStarted);

    task.start(&clock).expect("start");
    assert!(task.is_overdue(nov_at(25, 9, 0)));

    // A completed task is never overdue, regardless of date.
    let proof = ProofOfWork::link("https://figma.example.com/final").expect("valid proof");
    task.submit(proof, &clock).expect("submit");
    task.approve(&clock).expect("approve");
    assert!(!task.is_overdue(nov_at(25, 9, 0)));
}
