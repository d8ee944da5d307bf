//! Task aggregate root and its lifecycle transitions.

use super::{ProofOfWork, Reference, RevisionFeedback, Schedule, TaskDomainError, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated task title.
///
/// # Examples
///
///     use atelier::task::domain::TaskTitle;
///
///     let title = TaskTitle::new("Holiday Instagram Reels").expect("valid");
///     assert_eq!(title.as_str(), "Holiday Instagram Reels");
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is blank
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated inputs for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    brand: String,
    campaign: String,
    pic: String,
    description: String,
    subtasks: Vec<String>,
    references: Vec<Reference>,
    schedule: Schedule,
}

impl TaskDraft {
    /// Creates a draft with required fields.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        brand: impl Into<String>,
        campaign: impl Into<String>,
        pic: impl Into<String>,
        schedule: Schedule,
    ) -> Self {
        Self {
            title,
            brand: brand.into(),
            campaign: campaign.into(),
            pic: pic.into(),
            description: String::new(),
            subtasks: Vec::new(),
            references: Vec::new(),
            schedule,
        }
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the ordered subtask checklist.
    #[must_use]
    pub fn with_subtasks(mut self, subtasks: impl IntoIterator<Item = String>) -> Self {
        self.subtasks = subtasks.into_iter().collect();
        self
    }

    /// Sets the ordered reference attachments.
    #[must_use]
    pub fn with_references(mut self, references: impl IntoIterator<Item = Reference>) -> Self {
        self.references = references.into_iter().collect();
        self
    }

    /// Returns the assignee named by this draft.
    #[must_use]
    pub fn pic(&self) -> &str {
        &self.pic
    }
}

/// Partial update to a task's descriptive and scheduling fields.
///
/// Lifecycle status and time-tracking fields cannot be patched; they move
/// only through the transition methods on [`Task`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<TaskTitle>,
    brand: Option<String>,
    campaign: Option<String>,
    pic: Option<String>,
    description: Option<String>,
    subtasks: Option<Vec<String>>,
    references: Option<Vec<Reference>>,
    schedule: Option<Schedule>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces the brand.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Replaces the campaign.
    #[must_use]
    pub fn with_campaign(mut self, campaign: impl Into<String>) -> Self {
        self.campaign = Some(campaign.into());
        self
    }

    /// Reassigns the task to another PIC.
    #[must_use]
    pub fn with_pic(mut self, pic: impl Into<String>) -> Self {
        self.pic = Some(pic.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the subtask checklist.
    #[must_use]
    pub fn with_subtasks(mut self, subtasks: impl IntoIterator<Item = String>) -> Self {
        self.subtasks = Some(subtasks.into_iter().collect());
        self
    }

    /// Replaces the reference attachments.
    #[must_use]
    pub fn with_references(mut self, references: impl IntoIterator<Item = Reference>) -> Self {
        self.references = Some(references.into_iter().collect());
        self
    }

    /// Replaces the scheduling window.
    #[must_use]
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Returns the reassigned PIC, when the patch changes it.
    #[must_use]
    pub fn pic(&self) -> Option<&str> {
        self.pic.as_deref()
    }
}

/// Task aggregate root.
///
/// Status and the time-tracking fields move exclusively through the
/// lifecycle methods ([`Self::start`], [`Self::submit`], [`Self::approve`],
/// [`Self::request_revision`]); everything else is descriptive state
/// patched via [`Self::update_details`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    brand: String,
    campaign: String,
    pic: String,
    description: String,
    subtasks: Vec<String>,
    references: Vec<Reference>,
    schedule: Schedule,
    status: TaskStatus,
    actual_start_time: Option<DateTime<Utc>>,
    actual_end_time: Option<DateTime<Utc>>,
    duration_minutes: u64,
    #[serde(default)]
    cycle_started_at: Option<DateTime<Utc>>,
    proof: Option<ProofOfWork>,
    revision_feedback: Option<RevisionFeedback>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted brand.
    pub brand: String,
    /// Persisted campaign.
    pub campaign: String,
    /// Persisted assignee name.
    pub pic: String,
    /// Persisted description.
    pub description: String,
    /// Persisted subtask checklist.
    pub subtasks: Vec<String>,
    /// Persisted reference attachments.
    pub references: Vec<Reference>,
    /// Persisted scheduling window.
    pub schedule: Schedule,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted first-start timestamp.
    pub actual_start_time: Option<DateTime<Utc>>,
    /// Persisted submission timestamp.
    pub actual_end_time: Option<DateTime<Utc>>,
    /// Persisted accumulated work minutes.
    pub duration_minutes: u64,
    /// Persisted origin of the open work cycle, if one is running.
    pub cycle_started_at: Option<DateTime<Utc>>,
    /// Persisted proof of work.
    pub proof: Option<ProofOfWork>,
    /// Persisted reviewer feedback.
    pub revision_feedback: Option<RevisionFeedback>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from a validated draft.
    ///
    /// Status is forced to [`TaskStatus::NotStarted`] and all time-tracking
    /// fields start unset.
    #[must_use]
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: draft.title,
            brand: draft.brand,
            campaign: draft.campaign,
            pic: draft.pic,
            description: draft.description,
            subtasks: draft.subtasks,
            references: draft.references,
            schedule: draft.schedule,
            status: TaskStatus::NotStarted,
            actual_start_time: None,
            actual_end_time: None,
            duration_minutes: 0,
            cycle_started_at: None,
            proof: None,
            revision_feedback: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            brand: data.brand,
            campaign: data.campaign,
            pic: data.pic,
            description: data.description,
            subtasks: data.subtasks,
            references: data.references,
            schedule: data.schedule,
            status: data.status,
            actual_start_time: data.actual_start_time,
            actual_end_time: data.actual_end_time,
            duration_minutes: data.duration_minutes,
            cycle_started_at: data.cycle_started_at,
            proof: data.proof,
            revision_feedback: data.revision_feedback,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the brand.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the campaign.
    #[must_use]
    pub fn campaign(&self) -> &str {
        &self.campaign
    }

    /// Returns the assignee name.
    #[must_use]
    pub fn pic(&self) -> &str {
        &self.pic
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the ordered subtask checklist.
    #[must_use]
    pub fn subtasks(&self) -> &[String] {
        &self.subtasks
    }

    /// Returns the ordered reference attachments.
    #[must_use]
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Returns the scheduling window.
    #[must_use]
    pub const fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Returns the stored lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the first-ever start timestamp.
    #[must_use]
    pub const fn actual_start_time(&self) -> Option<DateTime<Utc>> {
        self.actual_start_time
    }

    /// Returns the latest submission timestamp.
    #[must_use]
    pub const fn actual_end_time(&self) -> Option<DateTime<Utc>> {
        self.actual_end_time
    }

    /// Returns the accumulated minutes of active work.
    #[must_use]
    pub const fn duration_minutes(&self) -> u64 {
        self.duration_minutes
    }

    /// Returns the attached proof of work, if submitted.
    #[must_use]
    pub const fn proof(&self) -> Option<&ProofOfWork> {
        self.proof.as_ref()
    }

    /// Returns the reviewer feedback from the latest revision request.
    #[must_use]
    pub const fn revision_feedback(&self) -> Option<&RevisionFeedback> {
        self.revision_feedback.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether the task is overdue at `now`.
    ///
    /// Derived, never stored: a task is overdue when its deadline day has
    /// passed and it is not completed, regardless of which stored status it
    /// holds.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.status.is_terminal() && self.schedule.deadline_has_passed(now)
    }

    /// Starts (or resumes) work on the task.
    ///
    /// The first start records `actual_start_time`; later starts after a
    /// revision request leave it untouched. Every start opens a fresh
    /// accounting cycle, so a revision loop adds only its own elapsed time
    /// to the accumulated duration.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] unless the task is
    /// `NotStarted` or `RevisionNeeded`.
    pub fn start(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::InProgress)?;
        let now = clock.utc();
        if self.actual_start_time.is_none() {
            self.actual_start_time = Some(now);
        }
        self.cycle_started_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Submits the task for review with the given proof of work.
    ///
    /// Banks the minutes elapsed since the current cycle opened (falling
    /// back to the first start for data recorded before cycle tracking
    /// existed) and records the submission timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] unless the task is
    /// `InProgress`.
    pub fn submit(&mut self, proof: ProofOfWork, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::WaitingReview)?;
        let now = clock.utc();
        let origin = self
            .cycle_started_at
            .or(self.actual_start_time)
            .unwrap_or(now);
        let elapsed_minutes = now.signed_duration_since(origin).num_minutes().max(0);
        self.duration_minutes = self
            .duration_minutes
            .saturating_add(u64::try_from(elapsed_minutes).unwrap_or(0));
        self.actual_end_time = Some(now);
        self.cycle_started_at = None;
        self.proof = Some(proof);
        self.updated_at = now;
        Ok(())
    }

    /// Approves the submitted work, completing the task.
    ///
    /// Time-tracking fields are left exactly as the submission recorded
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] unless the task is
    /// `WaitingReview`.
    pub fn approve(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::Completed)?;
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Sends the submitted work back to the assignee with feedback.
    ///
    /// Clears `actual_end_time` so the next submission records a fresh
    /// completion timestamp; `actual_start_time` and the banked duration
    /// are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] unless the task is
    /// `WaitingReview`.
    pub fn request_revision(
        &mut self,
        feedback: RevisionFeedback,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::RevisionNeeded)?;
        self.revision_feedback = Some(feedback);
        self.actual_end_time = None;
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Applies a descriptive patch, leaving lifecycle state untouched.
    pub fn update_details(&mut self, patch: TaskPatch, clock: &impl Clock) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(campaign) = patch.campaign {
            self.campaign = campaign;
        }
        if let Some(pic) = patch.pic {
            self.pic = pic;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(subtasks) = patch.subtasks {
            self.subtasks = subtasks;
        }
        if let Some(references) = patch.references {
            self.references = references;
        }
        if let Some(schedule) = patch.schedule {
            self.schedule = schedule;
        }
        self.updated_at = clock.utc();
    }

    fn transition_to(&mut self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }
}
