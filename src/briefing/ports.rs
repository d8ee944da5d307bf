//! Port for the external checklist-suggestion collaborator.

use async_trait::async_trait;
use thiserror::Error;

/// Inputs describing the task a checklist should be drafted for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistRequest {
    title: String,
    brand: String,
    pic: String,
}

impl ChecklistRequest {
    /// Creates a checklist request.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        brand: impl Into<String>,
        pic: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            brand: brand.into(),
            pic: pic.into(),
        }
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the brand.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the assignee name.
    #[must_use]
    pub fn pic(&self) -> &str {
        &self.pic
    }
}

/// Errors a checklist source may fail with.
///
/// All of them degrade to the fallback checklist at the service layer;
/// none reaches an end user as anything harder than a soft warning.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChecklistSourceError {
    /// No credential is configured for the backing service.
    #[error("checklist source credential is missing")]
    MissingCredential,

    /// The backing service could not be reached.
    #[error("checklist source transport failed: {0}")]
    Transport(String),

    /// The backing service answered with something unusable.
    #[error("checklist source returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// Contract for suggestion backends that draft subtask checklists.
///
/// The call is the one slow, genuinely asynchronous operation in the
/// system; it must never block lifecycle transitions, and its result only
/// ever feeds a task still being drafted.
#[async_trait]
pub trait ChecklistSource: Send + Sync {
    /// Drafts an ordered subtask checklist for the described task.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistSourceError`] when the backing service is
    /// unavailable or answers with something unusable.
    async fn generate_checklist(
        &self,
        request: &ChecklistRequest,
    ) -> Result<Vec<String>, ChecklistSourceError>;
}
