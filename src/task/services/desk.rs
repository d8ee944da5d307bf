//! Service layer orchestrating task CRUD and lifecycle transitions.
//!
//! Every entry point checks the acting user's permissions explicitly
//! before touching the repository, so the rules hold even when a caller
//! bypasses whatever affordances a UI happens to hide.

use crate::roster::{Role, Roster, User};
use crate::task::{
    domain::{
        ProofOfWork, Reference, RevisionFeedback, Schedule, Task, TaskDomainError, TaskDraft,
        TaskId, TaskPatch, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    brand: String,
    campaign: String,
    pic: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    description: String,
    subtasks: Vec<String>,
    references: Vec<Reference>,
}

impl CreateTaskRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        brand: impl Into<String>,
        campaign: impl Into<String>,
        pic: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            brand: brand.into(),
            campaign: campaign.into(),
            pic: pic.into(),
            start_date,
            end_date,
            description: String::new(),
            subtasks: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the subtask checklist.
    #[must_use]
    pub fn with_subtasks(mut self, subtasks: impl IntoIterator<Item = String>) -> Self {
        self.subtasks = subtasks.into_iter().collect();
        self
    }

    /// Sets the reference attachments.
    #[must_use]
    pub fn with_references(mut self, references: impl IntoIterator<Item = Reference>) -> Self {
        self.references = references.into_iter().collect();
        self
    }
}

/// Desk operation named in permission errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeskAction {
    /// Creating a task.
    Create,
    /// Editing descriptive or scheduling fields.
    UpdateDetails,
    /// Deleting a task.
    Delete,
    /// Starting or resuming work.
    Start,
    /// Submitting work for review.
    Submit,
    /// Approving submitted work.
    Approve,
    /// Requesting a revision.
    RequestRevision,
}

impl DeskAction {
    /// Returns a human-readable operation name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create a task",
            Self::UpdateDetails => "edit task details",
            Self::Delete => "delete a task",
            Self::Start => "start work on this task",
            Self::Submit => "submit work on this task",
            Self::Approve => "approve submitted work",
            Self::RequestRevision => "request a revision",
        }
    }
}

impl fmt::Display for DeskAction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Service-level errors for task desk operations.
#[derive(Debug, Error)]
pub enum TaskDeskError {
    /// Domain validation or transition failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// The acting user lacks permission for the operation.
    #[error("a {role} is not permitted to {action}")]
    NotPermitted {
        /// Role of the acting user.
        role: Role,
        /// The operation that was denied.
        action: DeskAction,
    },

    /// The named assignee is not on the roster.
    #[error("unknown assignee: {0}")]
    UnknownAssignee(String),
}

/// Result type for task desk operations.
pub type TaskDeskResult<T> = Result<T, TaskDeskError>;

/// Task desk orchestration service.
#[derive(Clone)]
pub struct TaskDeskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    roster: Arc<Roster>,
    clock: Arc<C>,
}

impl<R, C> TaskDeskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task desk service.
    #[must_use]
    pub const fn new(repository: Arc<R>, roster: Arc<Roster>, clock: Arc<C>) -> Self {
        Self {
            repository,
            roster,
            clock,
        }
    }

    /// Creates a task from the given request. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDeskError`] when the actor is not an admin, the title
    /// is empty, the assignee is not on the roster, or persistence fails.
    pub async fn create(&self, actor: &User, request: CreateTaskRequest) -> TaskDeskResult<Task> {
        require_admin(actor, DeskAction::Create)?;
        self.require_known_assignee(&request.pic)?;

        let title = TaskTitle::new(request.title)?;
        let schedule = Schedule::new(request.start_date, request.end_date);
        let draft = TaskDraft::new(title, request.brand, request.campaign, request.pic, schedule)
            .with_description(request.description)
            .with_subtasks(request.subtasks)
            .with_references(request.references);

        let task = Task::new(draft, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Patches descriptive and scheduling fields. Admin only.
    ///
    /// Lifecycle status and time-tracking fields are out of reach of this
    /// operation by construction.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDeskError`] when the actor is not an admin, the task
    /// is unknown, a reassigned PIC is not on the roster, or persistence
    /// fails.
    pub async fn update_details(
        &self,
        actor: &User,
        id: TaskId,
        patch: TaskPatch,
    ) -> TaskDeskResult<Task> {
        require_admin(actor, DeskAction::UpdateDetails)?;
        if let Some(pic) = patch.pic() {
            self.require_known_assignee(pic)?;
        }

        let mut task = self.load_required(id).await?;
        task.update_details(patch, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task permanently. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDeskError`] when the actor is not an admin or the
    /// task is unknown.
    pub async fn delete(&self, actor: &User, id: TaskId) -> TaskDeskResult<Task> {
        require_admin(actor, DeskAction::Delete)?;
        Ok(self.repository.remove(id).await?)
    }

    /// Starts (or resumes) work on a task. Assigned PIC only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDeskError`] when the actor is not the assignee, the
    /// task is unknown, or the task is not in a startable status.
    pub async fn start(&self, actor: &User, id: TaskId) -> TaskDeskResult<Task> {
        let mut task = self.load_required(id).await?;
        require_assignee(actor, &task, DeskAction::Start)?;
        task.start(&*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Submits work for review with proof. Assigned PIC only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDeskError`] when the actor is not the assignee, the
    /// task is unknown, or the task is not in progress.
    pub async fn submit(
        &self,
        actor: &User,
        id: TaskId,
        proof: ProofOfWork,
    ) -> TaskDeskResult<Task> {
        let mut task = self.load_required(id).await?;
        require_assignee(actor, &task, DeskAction::Submit)?;
        task.submit(proof, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Approves submitted work. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDeskError`] when the actor is not an admin, the task
    /// is unknown, or the task is not awaiting review.
    pub async fn approve(&self, actor: &User, id: TaskId) -> TaskDeskResult<Task> {
        require_admin(actor, DeskAction::Approve)?;
        let mut task = self.load_required(id).await?;
        task.approve(&*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Sends submitted work back with feedback. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDeskError`] when the actor is not an admin, the task
    /// is unknown, or the task is not awaiting review.
    pub async fn request_revision(
        &self,
        actor: &User,
        id: TaskId,
        feedback: RevisionFeedback,
    ) -> TaskDeskResult<Task> {
        require_admin(actor, DeskAction::RequestRevision)?;
        let mut task = self.load_required(id).await?;
        task.request_revision(feedback, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDeskError::Repository`] when the lookup fails.
    pub async fn task(&self, id: TaskId) -> TaskDeskResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns the whole collection in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDeskError::Repository`] when the listing fails.
    pub async fn list(&self) -> TaskDeskResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Returns the tasks visible to `actor`: the whole board for admins,
    /// only their own assignments for members.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDeskError::Repository`] when the listing fails.
    pub async fn visible_tasks(&self, actor: &User) -> TaskDeskResult<Vec<Task>> {
        let mut tasks = self.list().await?;
        if !actor.role().is_admin() {
            tasks.retain(|task| task.pic() == actor.name());
        }
        Ok(tasks)
    }

    async fn load_required(&self, id: TaskId) -> TaskDeskResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskDeskError::Repository(TaskRepositoryError::NotFound(id)))
    }

    fn require_known_assignee(&self, pic: &str) -> TaskDeskResult<()> {
        if self.roster.contains_name(pic) {
            return Ok(());
        }
        Err(TaskDeskError::UnknownAssignee(pic.to_owned()))
    }
}

fn require_admin(actor: &User, action: DeskAction) -> TaskDeskResult<()> {
    if actor.role().is_admin() {
        return Ok(());
    }
    Err(TaskDeskError::NotPermitted {
        role: actor.role(),
        action,
    })
}

fn require_assignee(actor: &User, task: &Task, action: DeskAction) -> TaskDeskResult<()> {
    if actor.name() == task.pic() {
        return Ok(());
    }
    Err(TaskDeskError::NotPermitted {
        role: actor.role(),
        action,
    })
}
