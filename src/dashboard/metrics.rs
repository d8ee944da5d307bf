//! Pure aggregate metrics derived from a task collection snapshot.

use crate::roster::Roster;
use crate::task::domain::{Task, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-member workload and performance rollup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberPerformance {
    /// Member display name (the PIC the rollup covers).
    pub name: String,
    /// Number of tasks assigned to the member.
    pub assigned: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Hours of recorded work across completed tasks, one decimal.
    pub hours_logged: f64,
    /// Completed tasks whose submission landed past the end of the
    /// deadline day.
    pub late_completions: usize,
    /// Completed share of assigned tasks, rounded percentage.
    pub completion_rate: u8,
}

/// Aggregate dashboard metrics over a task collection snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    /// Total tasks in the snapshot.
    pub total: usize,
    /// Tasks whose stored status is completed.
    pub completed: usize,
    /// Tasks past their deadline and not completed (derived, never
    /// stored).
    pub overdue: usize,
    /// Tasks anywhere between first start and approval.
    pub in_progress: usize,
    /// Tasks not yet started.
    pub not_started: usize,
    /// Completed share of all tasks, rounded percentage; 0 when empty.
    pub completion_rate: u8,
    /// On-time share of completed tasks, rounded percentage; 100 when
    /// nothing is completed.
    pub on_time_rate: u8,
    /// Mean recorded minutes per completed task; 0 when nothing is
    /// completed.
    pub avg_minutes_per_task: u64,
    /// One rollup row per member-role roster user.
    pub members: Vec<MemberPerformance>,
}

/// Computes dashboard metrics from a snapshot of the task collection.
///
/// Pure: no side effects, no mutation of the input, safe to call
/// repeatedly and concurrently. `now` drives the derived overdue
/// condition, so callers control the observation instant.
#[must_use]
pub fn compute_metrics(tasks: &[Task], roster: &Roster, now: DateTime<Utc>) -> DashboardMetrics {
    let completed_tasks: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.status().is_terminal())
        .collect();
    let completed = completed_tasks.len();
    let overdue = tasks.iter().filter(|task| task.is_overdue(now)).count();
    let in_progress = tasks.iter().filter(|task| task.status().is_active()).count();
    let not_started = tasks
        .iter()
        .filter(|task| task.status() == TaskStatus::NotStarted)
        .count();

    let on_time = completed_tasks
        .iter()
        .filter(|&&task| completed_on_time(task))
        .count();
    let on_time_rate = if completed == 0 {
        // Vacuously on time: no completed tasks reports 100, not 0.
        100
    } else {
        percent(on_time, completed)
    };

    let total_minutes: u64 = completed_tasks
        .iter()
        .map(|task| task.duration_minutes())
        .sum();
    let avg_minutes_per_task = total_minutes
        .checked_div(u64::try_from(completed).unwrap_or(u64::MAX))
        .unwrap_or(0);

    let members = roster
        .members()
        .map(|member| member_performance(member.name(), tasks))
        .collect();

    DashboardMetrics {
        total: tasks.len(),
        completed,
        overdue,
        in_progress,
        not_started,
        completion_rate: percent(completed, tasks.len()),
        on_time_rate,
        avg_minutes_per_task,
        members,
    }
}

fn member_performance(name: &str, tasks: &[Task]) -> MemberPerformance {
    let assigned: Vec<&Task> = tasks.iter().filter(|task| task.pic() == name).collect();
    let completed: Vec<&Task> = assigned
        .iter()
        .copied()
        .filter(|task| task.status().is_terminal())
        .collect();
    let minutes: u64 = completed.iter().map(|task| task.duration_minutes()).sum();
    let late_completions = completed
        .iter()
        .filter(|&&task| completed_late(task))
        .count();

    MemberPerformance {
        name: name.to_owned(),
        assigned: assigned.len(),
        completed: completed.len(),
        hours_logged: hours_one_decimal(minutes),
        late_completions,
        completion_rate: percent(completed.len(), assigned.len()),
    }
}

/// A completed task with no recorded submission time counts as on time.
fn completed_on_time(task: &Task) -> bool {
    task.actual_end_time()
        .is_none_or(|end| end <= task.schedule().end_of_deadline_day())
}

fn completed_late(task: &Task) -> bool {
    task.actual_end_time()
        .is_some_and(|end| end > task.schedule().end_of_deadline_day())
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_arithmetic,
    reason = "display percentages over small task counts; rounding is the point"
)]
fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u8
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "hours logged is a display value rounded to one decimal place"
)]
fn hours_one_decimal(minutes: u64) -> f64 {
    ((minutes as f64) / 60.0 * 10.0).round() / 10.0
}
