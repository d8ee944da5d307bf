//! End-to-end task desk flows over the in-memory adapter.

mod support;

use std::sync::Arc;

use atelier::dashboard::compute_metrics;
use atelier::roster::{Roster, User};
use atelier::task::{
    adapters::{memory::InMemoryTaskRepository, seed::seed_tasks},
    domain::{ProofOfWork, RevisionFeedback, TaskStatus},
    services::{CreateTaskRequest, TaskDeskService},
};
use support::{ManualClock, nov, nov_at};

type TestService = TaskDeskService<InMemoryTaskRepository, ManualClock>;

struct Studio {
    service: TestService,
    clock: Arc<ManualClock>,
    roster: Arc<Roster>,
}

fn studio() -> Studio {
    let clock = Arc::new(ManualClock::starting_at(nov_at(12, 9, 0)));
    let roster = Arc::new(Roster::studio_default());
    let service = TaskDeskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::clone(&roster),
        Arc::clone(&clock),
    );
    Studio {
        service,
        clock,
        roster,
    }
}

fn seeded_studio() -> Studio {
    let clock = Arc::new(ManualClock::starting_at(nov_at(20, 12, 0)));
    let roster = Arc::new(Roster::studio_default());
    let service = TaskDeskService::new(
        Arc::new(InMemoryTaskRepository::with_tasks(seed_tasks())),
        Arc::clone(&roster),
        Arc::clone(&clock),
    );
    Studio {
        service,
        clock,
        roster,
    }
}

impl Studio {
    fn admin(&self) -> User {
        self.roster
            .find_by_name("Jane Doe")
            .expect("admin on roster")
            .clone()
    }

    fn member(&self, name: &str) -> User {
        self.roster
            .find_by_name(name)
            .expect("member on roster")
            .clone()
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_with_a_revision_loop() {
    let studio = studio();
    let admin = studio.admin();
    let rashid = studio.member("Rashid");

    let created = studio
        .service
        .create(
            &admin,
            CreateTaskRequest::new(
                "Product Launch Key Visual",
                "Samsung",
                "Brand Awareness",
                "Rashid",
                nov(10),
                nov(20),
            )
            .with_description("Main KV for the new Galaxy series."),
        )
        .await
        .expect("creation should succeed");

    // First working cycle: 09:00 to 10:30.
    studio
        .service
        .start(&rashid, created.id())
        .await
        .expect("assignee starts");
    studio.clock.set(nov_at(12, 10, 30));
    let first_proof = ProofOfWork::link("https://figma.example.com/v1").expect("valid proof");
    let submitted = studio
        .service
        .submit(&rashid, created.id(), first_proof)
        .await
        .expect("assignee submits");
    assert_eq!(submitted.duration_minutes(), 90);

    // The review sends it back.
    let feedback = RevisionFeedback::new("fix colors").expect("valid feedback");
    let revised = studio
        .service
        .request_revision(&admin, created.id(), feedback)
        .await
        .expect("admin requests revision");
    assert_eq!(revised.status(), TaskStatus::RevisionNeeded);
    assert!(revised.actual_end_time().is_none());

    // Second working cycle: 12:00 to 12:45 adds 45 minutes on top.
    studio.clock.set(nov_at(12, 12, 0));
    studio
        .service
        .start(&rashid, created.id())
        .await
        .expect("assignee resumes");
    studio.clock.set(nov_at(12, 12, 45));
    let second_proof = ProofOfWork::link("https://figma.example.com/v2").expect("valid proof");
    let resubmitted = studio
        .service
        .submit(&rashid, created.id(), second_proof)
        .await
        .expect("assignee resubmits");
    assert_eq!(resubmitted.duration_minutes(), 135);
    assert_eq!(resubmitted.actual_start_time(), Some(nov_at(12, 9, 0)));

    let approved = studio
        .service
        .approve(&admin, created.id())
        .await
        .expect("admin approves");
    assert_eq!(approved.status(), TaskStatus::Completed);
    assert_eq!(approved.duration_minutes(), 135);

    let metrics = compute_metrics(
        &studio.service.list().await.expect("listing should succeed"),
        &studio.roster,
        nov_at(12, 13, 0),
    );
    assert_eq!(metrics.total, 1);
    assert_eq!(metrics.completed, 1);
    assert_eq!(metrics.completion_rate, 100);
    assert_eq!(metrics.avg_minutes_per_task, 135);
}

#[tokio::test(flavor = "multi_thread")]
async fn seed_board_reports_the_expected_dashboard() {
    let studio = seeded_studio();
    let board = studio.service.list().await.expect("listing should succeed");
    assert_eq!(board.len(), 5);

    let metrics = compute_metrics(&board, &studio.roster, nov_at(20, 12, 0));

    assert_eq!(metrics.total, 5);
    assert_eq!(metrics.completed, 2);
    // Only the strategy deck (due 10 November) is past its deadline; the
    // key visual is due today and today is never overdue.
    assert_eq!(metrics.overdue, 1);
    assert_eq!(metrics.in_progress, 1);
    assert_eq!(metrics.not_started, 2);
    assert_eq!(metrics.completion_rate, 40);
    assert_eq!(metrics.on_time_rate, 100);
    assert_eq!(metrics.avg_minutes_per_task, 255);

    let vito = metrics
        .members
        .iter()
        .find(|row| row.name == "Vito")
        .expect("rollup row for Vito");
    assert_eq!(vito.assigned, 2);
    assert_eq!(vito.completed, 2);
    assert_eq!(vito.hours_logged, 8.5);
    assert_eq!(vito.completion_rate, 100);
}

#[tokio::test(flavor = "multi_thread")]
async fn seeded_in_progress_task_can_be_finished() {
    let studio = seeded_studio();
    let rashid = studio.member("Rashid");
    let admin = studio.admin();

    let board = studio.service.list().await.expect("listing should succeed");
    let key_visual = board
        .iter()
        .find(|task| task.status() == TaskStatus::InProgress)
        .expect("seed contains one in-progress task");

    // The seed recorded its start at 10:00 on 18 November; submitting on
    // the 20th at noon banks the open cycle.
    let proof = ProofOfWork::link("https://figma.example.com/kv-final").expect("valid proof");
    let submitted = studio
        .service
        .submit(&rashid, key_visual.id(), proof)
        .await
        .expect("assignee submits the seeded task");
    assert_eq!(submitted.status(), TaskStatus::WaitingReview);
    assert_eq!(submitted.duration_minutes(), 50 * 60);

    let approved = studio
        .service
        .approve(&admin, submitted.id())
        .await
        .expect("admin approves");
    assert_eq!(approved.status(), TaskStatus::Completed);
}
