//! AI-assisted checklist drafting for Atelier.
//!
//! Wraps the external suggestion backend behind a port and guarantees a
//! non-empty checklist to callers: any backend failure degrades to a
//! deterministic fallback rather than an error. Suggestions only ever
//! feed a task that is still being drafted, so this path cannot race a
//! lifecycle transition.

mod canned;
mod ports;
mod service;

pub use canned::CannedChecklistSource;
pub use ports::{ChecklistRequest, ChecklistSource, ChecklistSourceError};
pub use service::{BriefingService, fallback_checklist};
