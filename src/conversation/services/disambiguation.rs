//! Per-conversation pending "which task" questions.

use crate::{
    conversation::domain::{ConversationId, PendingDisambiguation, SelectionAction},
    task::domain::{Task, TaskId},
};
use chrono::{DateTime, TimeDelta, Utc};
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};
use tracing::debug;

/// Holds at most one pending set per conversation.
///
/// Sets older than the time-to-live are treated as absent and dropped the
/// next time they are read.
#[derive(Debug)]
pub struct Disambiguator {
    ttl: TimeDelta,
    pending: Mutex<HashMap<ConversationId, PendingDisambiguation>>,
}

impl Disambiguator {
    /// Creates an empty disambiguator.
    #[must_use]
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            ttl,
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the configured time-to-live.
    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Records a new question, replacing any earlier one.
    pub fn begin(
        &self,
        conversation: &ConversationId,
        action: SelectionAction,
        candidates: Vec<Task>,
        now: DateTime<Utc>,
    ) {
        debug!(%conversation, %action, candidates = candidates.len(), "awaiting selection");
        self.lock().insert(
            conversation.clone(),
            PendingDisambiguation::new(action, candidates, now),
        );
    }

    /// Returns `true` when an unexpired question is waiting.
    #[must_use]
    pub fn has_pending(&self, conversation: &ConversationId, now: DateTime<Utc>) -> bool {
        let mut pending = self.lock();
        self.live(&mut pending, conversation, now).is_some()
    }

    /// Returns a copy of the unexpired question, if any.
    ///
    /// The question stays open; callers clear it once the chosen task has
    /// been dealt with.
    #[must_use]
    pub fn current(
        &self,
        conversation: &ConversationId,
        now: DateTime<Utc>,
    ) -> Option<PendingDisambiguation> {
        let mut pending = self.lock();
        self.live(&mut pending, conversation, now).cloned()
    }

    /// Returns the pending candidate with `task_id`, if the open question
    /// offered it. The question is left untouched.
    #[must_use]
    pub fn offered(
        &self,
        conversation: &ConversationId,
        task_id: TaskId,
        now: DateTime<Utc>,
    ) -> Option<Task> {
        let mut pending = self.lock();
        self.live(&mut pending, conversation, now)
            .and_then(|set| set.candidates().iter().find(|task| task.id() == task_id))
            .cloned()
    }

    /// Drops any question for the conversation.
    pub fn clear(&self, conversation: &ConversationId) {
        if self.lock().remove(conversation).is_some() {
            debug!(%conversation, "selection resolved");
        }
    }

    /// Drops every expired question and returns how many were removed.
    #[must_use]
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut pending = self.lock();
        let before = pending.len();
        pending.retain(|_, set| !set.is_expired(now, self.ttl));
        before.saturating_sub(pending.len())
    }

    /// Returns a copy of the question for a conversation, expired or not.
    #[must_use]
    pub fn pending(&self, conversation: &ConversationId) -> Option<PendingDisambiguation> {
        self.lock().get(conversation).cloned()
    }

    fn live<'map>(
        &self,
        pending: &'map mut HashMap<ConversationId, PendingDisambiguation>,
        conversation: &ConversationId,
        now: DateTime<Utc>,
    ) -> Option<&'map PendingDisambiguation> {
        if pending
            .get(conversation)
            .is_some_and(|set| set.is_expired(now, self.ttl))
        {
            debug!(%conversation, "pending selection expired");
            pending.remove(conversation);
        }
        pending.get(conversation)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ConversationId, PendingDisambiguation>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
