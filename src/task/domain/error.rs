//! Error types for task domain validation and lifecycle transitions.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned by task domain validation and transition methods.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The requested lifecycle transition is not allowed from the current
    /// status.
    #[error("task {task_id}: invalid transition from {from} to {to}")]
    InvalidTransition {
        /// The task whose transition was rejected.
        task_id: TaskId,
        /// The status the task currently holds.
        from: TaskStatus,
        /// The status the transition would have produced.
        to: TaskStatus,
    },

    /// A submission was attempted without a usable proof of work.
    #[error("proof of work must be a non-empty link or image payload")]
    MissingProof,

    /// A revision was requested without feedback for the assignee.
    #[error("revision feedback must not be empty")]
    MissingFeedback,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A reference was given an empty display name.
    #[error("reference name must not be empty")]
    EmptyReferenceName,

    /// A reference was given an empty URL or payload.
    #[error("reference URL must not be empty")]
    EmptyReferenceUrl,
}

/// Error returned while parsing stored task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing stored reference kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown reference kind: {0}")]
pub struct ParseReferenceKindError(pub String);
