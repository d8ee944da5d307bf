//! Deterministic in-process checklist source.

use super::ports::{ChecklistRequest, ChecklistSource, ChecklistSourceError};
use async_trait::async_trait;

/// Checklist source that drafts suggestions locally.
///
/// Used when no external suggestion backend is configured, and by tests
/// that need deterministic output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedChecklistSource;

impl CannedChecklistSource {
    /// Creates a canned checklist source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChecklistSource for CannedChecklistSource {
    async fn generate_checklist(
        &self,
        request: &ChecklistRequest,
    ) -> Result<Vec<String>, ChecklistSourceError> {
        Ok(vec![
            format!("Draft initial concepts for \"{}\"", request.title()),
            format!("Review {} brand guidelines", request.brand()),
            "Create high-fidelity mockup".to_owned(),
            "Finalize export assets".to_owned(),
        ])
    }
}
