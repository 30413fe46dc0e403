//! Query relations turning a target date into a deadline range.

use super::relative::{end_of_day, start_of_day};
use crate::task::domain::TaskFilter;
use chrono::NaiveDateTime;
use std::fmt;

/// How a target date constrains task deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Deadline on or before the target.
    Before,
    /// Deadline on the target's calendar day.
    Inclusive,
    /// Deadline on or after the target.
    After,
    /// Deadline between the target and an end date.
    Flexible,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Before => "before",
            Self::Inclusive => "inclusive",
            Self::After => "after",
            Self::Flexible => "flexible",
        };
        f.write_str(label)
    }
}

/// A resolved query relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationQuery {
    /// Resolved target date.
    pub target: NaiveDateTime,
    /// Relation between deadlines and the target.
    pub relation: Relation,
    /// Upper end of a flexible range, when one was resolved.
    pub end: Option<NaiveDateTime>,
    /// Lower bound applied when the relation was inferred from a bare date
    /// expression rather than stated.
    pub window_start: Option<NaiveDateTime>,
}

impl RelationQuery {
    /// Creates a query with no end date and no window start.
    #[must_use]
    pub const fn new(target: NaiveDateTime, relation: Relation) -> Self {
        Self {
            target,
            relation,
            end: None,
            window_start: None,
        }
    }

    /// Sets the end of a flexible range.
    #[must_use]
    pub const fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the lower bound of an inferred window.
    #[must_use]
    pub const fn with_window_start(mut self, start: NaiveDateTime) -> Self {
        self.window_start = Some(start);
        self
    }

    /// Builds the store filter for this relation.
    ///
    /// Returns `None` for a flexible relation without an end date, in which
    /// case the caller lists every task.
    #[must_use]
    pub fn to_filter(&self) -> Option<TaskFilter> {
        let filter = TaskFilter::all();
        match self.relation {
            Relation::Inclusive => {
                let day = self.target.date();
                Some(
                    filter
                        .due_at_or_after(start_of_day(day))
                        .due_at_or_before(end_of_day(day)),
                )
            }
            Relation::Before => {
                let bounded = filter.due_at_or_before(self.target);
                Some(
                    self.window_start
                        .map_or(bounded, |start| bounded.due_at_or_after(start)),
                )
            }
            Relation::After => Some(filter.due_at_or_after(self.target)),
            Relation::Flexible => self
                .end
                .map(|end| filter.due_at_or_after(self.target).due_at_or_before(end)),
        }
    }
}
