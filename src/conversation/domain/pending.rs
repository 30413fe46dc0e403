//! Unanswered "which task" questions.

use super::SelectionAction;
use crate::task::domain::Task;
use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// A numbered reply that is not one of the offered choices.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("choice {choice} is outside 1..={available}")]
pub struct InvalidChoice {
    /// The number given.
    pub choice: usize,
    /// How many candidates were offered.
    pub available: usize,
}

/// Candidates offered to the user, awaiting a numbered choice.
///
/// Candidates keep the order they were presented in; choice `1` is the
/// first of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDisambiguation {
    action: SelectionAction,
    candidates: Vec<Task>,
    created_at: DateTime<Utc>,
}

impl PendingDisambiguation {
    /// Creates a pending set.
    #[must_use]
    pub const fn new(
        action: SelectionAction,
        candidates: Vec<Task>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            action,
            candidates,
            created_at,
        }
    }

    /// Returns the action applied to the chosen task.
    #[must_use]
    pub const fn action(&self) -> SelectionAction {
        self.action
    }

    /// Returns the candidates in presentation order.
    #[must_use]
    pub fn candidates(&self) -> &[Task] {
        &self.candidates
    }

    /// Returns the number of candidates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` when there is nothing to choose from.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns when the question was asked.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the candidate for a one-based choice.
    #[must_use]
    pub fn candidate(&self, choice: usize) -> Option<&Task> {
        choice
            .checked_sub(1)
            .and_then(|index| self.candidates.get(index))
    }

    /// Resolves a one-based choice.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidChoice`] when `choice` is not in `1..=len`.
    pub fn choose(&self, choice: usize) -> Result<&Task, InvalidChoice> {
        self.candidate(choice).ok_or(InvalidChoice {
            choice,
            available: self.len(),
        })
    }

    /// Returns `true` once `ttl` has elapsed since the question was asked.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now.signed_duration_since(self.created_at) >= ttl
    }
}
