//! Read-side filtering over the task collection.

use super::Task;
use chrono::NaiveDate;

/// Filter over a single string-valued task attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DimensionFilter {
    /// Matches every task.
    #[default]
    All,
    /// Matches tasks whose attribute equals the given value exactly.
    Only(String),
}

impl DimensionFilter {
    /// Creates an exact-match filter.
    #[must_use]
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    /// Returns whether `value` passes this dimension.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

/// Ephemeral query parameters for projecting a task subset.
///
/// Dimensions compose with logical AND, so the result is independent of
/// the order in which they are applied. Filtering never mutates the input
/// collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    brand: DimensionFilter,
    pic: DimensionFilter,
    campaign: DimensionFilter,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to a single brand.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = DimensionFilter::only(brand);
        self
    }

    /// Restricts to a single assignee.
    #[must_use]
    pub fn with_pic(mut self, pic: impl Into<String>) -> Self {
        self.pic = DimensionFilter::only(pic);
        self
    }

    /// Restricts to a single campaign.
    #[must_use]
    pub fn with_campaign(mut self, campaign: impl Into<String>) -> Self {
        self.campaign = DimensionFilter::only(campaign);
        self
    }

    /// Excludes tasks scheduled to start before `bound`.
    #[must_use]
    pub const fn with_start_date(mut self, bound: NaiveDate) -> Self {
        self.start_date = Some(bound);
        self
    }

    /// Excludes tasks whose deadline falls after `bound`.
    #[must_use]
    pub const fn with_end_date(mut self, bound: NaiveDate) -> Self {
        self.end_date = Some(bound);
        self
    }

    /// Returns whether `task` passes every active dimension.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if !self.brand.accepts(task.brand()) {
            return false;
        }
        if !self.pic.accepts(task.pic()) {
            return false;
        }
        if !self.campaign.accepts(task.campaign()) {
            return false;
        }
        if self
            .start_date
            .is_some_and(|bound| task.schedule().start_date() < bound)
        {
            return false;
        }
        if self
            .end_date
            .is_some_and(|bound| task.schedule().end_date() > bound)
        {
            return false;
        }
        true
    }

    /// Projects the matching subset out of `tasks` as a new collection.
    #[must_use]
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect()
    }
}
