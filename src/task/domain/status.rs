//! Stored task status and the lifecycle transition matrix.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored lifecycle status of a task.
///
/// Overdue is intentionally absent: it is a display condition derived from
/// the deadline and the current date, never a stored status. See
/// [`super::Task::is_overdue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been assigned but work has not begun.
    NotStarted,
    /// The assigned PIC is actively working the task.
    InProgress,
    /// Work has been submitted and awaits an admin verdict.
    WaitingReview,
    /// An admin requested changes; the task is back with the PIC.
    RevisionNeeded,
    /// Work has been approved.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::WaitingReview => "waiting_review",
            Self::RevisionNeeded => "revision_needed",
            Self::Completed => "completed",
        }
    }

    /// Returns whether transition to `target` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::NotStarted | Self::RevisionNeeded, Self::InProgress)
                | (Self::InProgress, Self::WaitingReview)
                | (Self::WaitingReview, Self::Completed | Self::RevisionNeeded)
        )
    }

    /// Returns whether this status ends the lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns whether this status counts as active work for the dashboard.
    ///
    /// Covers everything between the first start and final approval:
    /// in-progress work, submissions awaiting review, and revision loops.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(
            self,
            Self::InProgress | Self::WaitingReview | Self::RevisionNeeded
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "waiting_review" => Ok(Self::WaitingReview),
            "revision_needed" => Ok(Self::RevisionNeeded),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
