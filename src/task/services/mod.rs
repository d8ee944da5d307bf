//! Orchestration services for the task context.

mod desk;

pub use desk::{CreateTaskRequest, DeskAction, TaskDeskError, TaskDeskResult, TaskDeskService};
