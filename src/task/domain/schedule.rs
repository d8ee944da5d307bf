//! Calendar scheduling window for a task.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Scheduled window for a task: a calendar start date and a deadline.
///
/// `start_date <= end_date` is expected but not enforced; the tracker has
/// always accepted inverted windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Schedule {
    /// Creates a schedule from a start date and a deadline.
    #[must_use]
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Returns the scheduled start date.
    #[must_use]
    pub const fn start_date(self) -> NaiveDate {
        self.start_date
    }

    /// Returns the deadline date.
    #[must_use]
    pub const fn end_date(self) -> NaiveDate {
        self.end_date
    }

    /// Returns whether the deadline has passed at `now`.
    ///
    /// Date-only comparison: the deadline day itself is never past, which
    /// keeps this predicate consistent with the end-of-day on-time rule
    /// used by the dashboard.
    #[must_use]
    pub fn deadline_has_passed(self, now: DateTime<Utc>) -> bool {
        self.end_date < now.date_naive()
    }

    /// Returns the last instant of the deadline day (23:59:59.999 UTC).
    ///
    /// Completions up to this instant count as on time.
    #[must_use]
    pub fn end_of_deadline_day(self) -> DateTime<Utc> {
        self.end_date
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap_or_else(|| self.end_date.and_time(NaiveTime::MIN))
            .and_utc()
    }
}
