//! Checklist drafting with graceful degradation.

use super::ports::{ChecklistRequest, ChecklistSource};
use std::sync::Arc;

/// Deterministic fallback checklist used whenever the source fails.
const FALLBACK_STEPS: [&str; 4] = [
    "Review requirements",
    "Brainstorm concepts",
    "Execute design",
    "Quality check",
];

/// Drafting service wrapping a [`ChecklistSource`] with a guaranteed
/// non-empty result.
///
/// Any source failure, and any technically-successful-but-empty answer,
/// degrades to the deterministic fallback checklist instead of surfacing
/// an error to the caller.
#[derive(Clone)]
pub struct BriefingService<S>
where
    S: ChecklistSource,
{
    source: Arc<S>,
}

impl<S> BriefingService<S>
where
    S: ChecklistSource,
{
    /// Creates a new briefing service.
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Drafts a checklist for the described task.
    ///
    /// Never fails and never returns an empty list.
    pub async fn checklist_for(&self, request: &ChecklistRequest) -> Vec<String> {
        match self.source.generate_checklist(request).await {
            Ok(steps) if !steps.is_empty() => steps,
            Ok(_) | Err(_) => fallback_checklist(),
        }
    }
}

/// Returns the deterministic fallback checklist.
#[must_use]
pub fn fallback_checklist() -> Vec<String> {
    FALLBACK_STEPS.iter().map(|&step| step.to_owned()).collect()
}
