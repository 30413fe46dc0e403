//! Store-side filter over task deadlines and status.

use super::{Task, TaskStatus};
use chrono::NaiveDateTime;

/// Filter applied by the store when selecting tasks.
///
/// Deadline bounds are inclusive. An empty filter selects every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    deadline_from: Option<NaiveDateTime>,
    deadline_to: Option<NaiveDateTime>,
    status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Creates a filter that selects every task.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            deadline_from: None,
            deadline_to: None,
            status: None,
        }
    }

    /// Restricts the filter to deadlines at or after `from`.
    #[must_use]
    pub const fn due_at_or_after(mut self, from: NaiveDateTime) -> Self {
        self.deadline_from = Some(from);
        self
    }

    /// Restricts the filter to deadlines at or before `to`.
    #[must_use]
    pub const fn due_at_or_before(mut self, to: NaiveDateTime) -> Self {
        self.deadline_to = Some(to);
        self
    }

    /// Restricts the filter to tasks with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the inclusive lower deadline bound, if any.
    #[must_use]
    pub const fn deadline_from(&self) -> Option<NaiveDateTime> {
        self.deadline_from
    }

    /// Returns the inclusive upper deadline bound, if any.
    #[must_use]
    pub const fn deadline_to(&self) -> Option<NaiveDateTime> {
        self.deadline_to
    }

    /// Returns the required status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns `true` when the filter places no restriction.
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        self.deadline_from.is_none() && self.deadline_to.is_none() && self.status.is_none()
    }

    /// Returns `true` when the task satisfies every bound of the filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let deadline = task.deadline();
        self.deadline_from.is_none_or(|from| deadline >= from)
            && self.deadline_to.is_none_or(|to| deadline <= to)
            && self.status.is_none_or(|status| task.status() == status)
    }
}
