//! Reference attachments owned by a task.

use super::{ParseReferenceKindError, ReferenceId, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of material a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// An external URL (brief, moodboard, competitor example).
    Link,
    /// An embedded image payload (data URL or hosted asset).
    Image,
}

impl ReferenceKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ReferenceKind {
    type Error = ParseReferenceKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "link" => Ok(Self::Link),
            "image" => Ok(Self::Image),
            _ => Err(ParseReferenceKindError(value.to_owned())),
        }
    }
}

/// An attachment or link associated with a task.
///
/// References are owned exclusively by their parent task; there is no
/// sharing across tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    id: ReferenceId,
    kind: ReferenceKind,
    name: String,
    url: String,
}

impl Reference {
    /// Creates a validated reference.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyReferenceName`] or
    /// [`TaskDomainError::EmptyReferenceUrl`] when either value is blank
    /// after trimming.
    pub fn new(
        kind: ReferenceKind,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let name = name.into();
        let url = url.into();
        if name.trim().is_empty() {
            return Err(TaskDomainError::EmptyReferenceName);
        }
        if url.trim().is_empty() {
            return Err(TaskDomainError::EmptyReferenceUrl);
        }
        Ok(Self {
            id: ReferenceId::new(),
            kind,
            name,
            url,
        })
    }

    /// Returns the reference identifier.
    #[must_use]
    pub const fn id(&self) -> ReferenceId {
        self.id
    }

    /// Returns the reference kind.
    #[must_use]
    pub const fn kind(&self) -> ReferenceKind {
        self.kind
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the URL or embedded payload.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}
