//! Proof-of-work and review-feedback value objects.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Evidence attached to a submission for admin review.
///
/// Persisted with an internal `type` tag so link and image proofs stay
/// distinguishable in the storage blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProofOfWork {
    /// A URL pointing at the finished work (Figma, Drive, YouTube, ...).
    Link {
        /// The proof URL.
        url: String,
    },
    /// An embedded image payload (typically a data URL).
    Image {
        /// The encoded image data.
        data: String,
    },
}

impl ProofOfWork {
    /// Creates a link proof.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingProof`] when the URL is blank
    /// after trimming.
    pub fn link(url: impl Into<String>) -> Result<Self, TaskDomainError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(TaskDomainError::MissingProof);
        }
        Ok(Self::Link { url })
    }

    /// Creates an image proof.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingProof`] when the payload is blank
    /// after trimming.
    pub fn image(data: impl Into<String>) -> Result<Self, TaskDomainError> {
        let data = data.into();
        if data.trim().is_empty() {
            return Err(TaskDomainError::MissingProof);
        }
        Ok(Self::Image { data })
    }

    /// Returns the raw proof payload (URL or image data).
    #[must_use]
    pub fn payload(&self) -> &str {
        match self {
            Self::Link { url } => url,
            Self::Image { data } => data,
        }
    }

    /// Returns whether this proof is a link.
    #[must_use]
    pub const fn is_link(&self) -> bool {
        matches!(self, Self::Link { .. })
    }
}

/// Reviewer feedback captured when a revision is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevisionFeedback(String);

impl RevisionFeedback {
    /// Creates validated revision feedback.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingFeedback`] when the text is blank
    /// after trimming.
    pub fn new(text: impl Into<String>) -> Result<Self, TaskDomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(TaskDomainError::MissingFeedback);
        }
        Ok(Self(text))
    }

    /// Returns the feedback text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RevisionFeedback {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RevisionFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
