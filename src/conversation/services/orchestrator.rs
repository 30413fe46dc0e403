//! Conversation service: one reply for every inbound event.

use super::{
    disambiguation::Disambiguator,
    matcher::{MatchOutcome, SubstringTaskMatcher, TaskMatcher, clean_description},
    replies::{self, ERROR_TEXT, HELP_TEXT, ReplyError},
};
use crate::{
    config::{AssistantConfig, CompletionPolicy, ConfigError},
    conversation::{
        domain::{
            ConversationId, InboundEvent, MessageRef, PendingDisambiguation, Reply,
            SelectionAction,
        },
        ports::{FrontEnd, FrontEndError},
    },
    nlu::{
        domain::{Intent, RelationQuery},
        ports::{CalendarParser, LanguageAnalyzer},
        services::{
            ExtractionError, IntentClassifier, RelationResolver, TaskDescriptorExtractor,
        },
    },
    task::{
        domain::{Task, TaskFilter, TaskId, TaskStatus},
        ports::{TaskRepository, TaskRepositoryError},
    },
};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use mockable::Clock;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use thiserror::Error;
use tracing::{debug, info, warn};

const NO_TASKS: &str = "No tasks available.";
const NO_QUERY_RESULTS: &str = "No tasks found for your query!";
const TASK_GONE: &str = "That task no longer exists. Please try again.";
const MISSING_NAME: &str =
    "I couldn't tell what the task is. Try something like \"I need to finish the report by friday\".";
const MISSING_DEADLINE: &str =
    "I couldn't find a deadline. Add one like \"by friday\" or \"tomorrow at 5pm\".";

/// Errors raised while handling or delivering an event.
///
/// [`ConversationService::respond`] never returns these; they surface only
/// from [`ConversationService::deliver`] when the front end fails.
#[derive(Debug, Error)]
pub enum ConversationError {
    /// The task store failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// A reply template failed to render.
    #[error(transparent)]
    Reply(#[from] ReplyError),
    /// The front end could not deliver the reply.
    #[error(transparent)]
    FrontEnd(#[from] FrontEndError),
}

/// Result type for conversation operations.
pub type ConversationResult<T> = Result<T, ConversationError>;

/// Where a conversation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// No question is outstanding.
    Idle,
    /// A "which task" question awaits a numbered answer.
    AwaitingDisambiguation,
}

type Slot = Arc<tokio::sync::Mutex<()>>;

/// Drives the interpretation pipeline for every conversation.
///
/// Events of one conversation are handled one at a time; different
/// conversations proceed concurrently. Every failure below this service is
/// logged and answered with a uniform apology.
pub struct ConversationService<R, A, P, C>
where
    R: TaskRepository,
    A: LanguageAnalyzer,
    P: CalendarParser,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: AssistantConfig,
    offset: FixedOffset,
    classifier: IntentClassifier,
    extractor: TaskDescriptorExtractor<A, P>,
    relations: RelationResolver<P>,
    matcher: Arc<dyn TaskMatcher>,
    disambiguator: Disambiguator,
    slots: Mutex<HashMap<ConversationId, Slot>>,
}

impl<R, A, P, C> ConversationService<R, A, P, C>
where
    R: TaskRepository,
    A: LanguageAnalyzer,
    P: CalendarParser,
    C: Clock + Send + Sync,
{
    /// Creates a service using substring task matching.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration is out of range.
    pub fn new(
        repository: Arc<R>,
        analyzer: Arc<A>,
        parser: Arc<P>,
        clock: Arc<C>,
        config: AssistantConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let offset = config.offset()?;
        let ttl = config.pending_ttl()?;
        Ok(Self {
            repository,
            clock,
            offset,
            classifier: IntentClassifier::new(),
            extractor: TaskDescriptorExtractor::new(analyzer, Arc::clone(&parser)),
            relations: RelationResolver::new(parser),
            matcher: Arc::new(SubstringTaskMatcher::new()),
            disambiguator: Disambiguator::new(ttl),
            slots: Mutex::new(HashMap::new()),
            config,
        })
    }

    /// Replaces the task matching strategy.
    #[must_use]
    pub fn with_matcher(mut self, matcher: Arc<dyn TaskMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Returns whether the conversation awaits a numbered selection.
    #[must_use]
    pub fn state(&self, conversation: &ConversationId) -> ConversationState {
        if self
            .disambiguator
            .has_pending(conversation, self.clock.utc())
        {
            ConversationState::AwaitingDisambiguation
        } else {
            ConversationState::Idle
        }
    }

    /// Returns the outstanding question for a conversation, if any.
    #[must_use]
    pub fn pending_selection(&self, conversation: &ConversationId) -> Option<PendingDisambiguation> {
        self.disambiguator.current(conversation, self.clock.utc())
    }

    /// Handles one event and returns the reply.
    ///
    /// Downstream failures are logged and turned into a uniform apology, so
    /// this never fails.
    pub async fn respond(&self, event: &InboundEvent) -> Reply {
        let conversation = event.conversation();
        let slot = self.slot(conversation);
        let reply = {
            let _turn = slot.lock().await;
            self.handle(event).await.unwrap_or_else(|error| {
                warn!(%conversation, %error, "failed to handle event");
                Reply::text(ERROR_TEXT)
            })
        };
        drop(slot);
        self.purge_idle(self.clock.utc());
        reply
    }

    /// Handles one event and sends the reply through `front_end`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::FrontEnd`] when delivery fails.
    pub async fn deliver<F>(&self, front_end: &F, event: &InboundEvent) -> ConversationResult<Reply>
    where
        F: FrontEnd + ?Sized,
    {
        let reply = self.respond(event).await;
        let conversation = event.conversation();
        match &reply {
            Reply::Text(text) => front_end.send_text(conversation, text).await?,
            Reply::SelectableList { text, options } => {
                front_end
                    .send_selectable_list(conversation, text, options)
                    .await?;
            }
            Reply::Edit { message, text } => {
                front_end.edit_message(conversation, message, text).await?;
            }
        }
        Ok(reply)
    }

    async fn handle(&self, event: &InboundEvent) -> ConversationResult<Reply> {
        let now_utc = self.clock.utc();
        match event {
            InboundEvent::Text { conversation, text } => {
                self.handle_text(conversation, text, now_utc).await
            }
            InboundEvent::Selection {
                conversation,
                action,
                task_id,
                message,
            } => {
                self.handle_choice(conversation, *action, *task_id, message.as_ref(), now_utc)
                    .await
            }
        }
    }

    async fn handle_text(
        &self,
        conversation: &ConversationId,
        text: &str,
        now_utc: DateTime<Utc>,
    ) -> ConversationResult<Reply> {
        let now = self.wall_clock(now_utc);
        let pending = self.disambiguator.current(conversation, now_utc);
        let parsed = self.classifier.classify(text, pending.is_some());
        let seed = format!("{conversation}:{text}");
        match parsed.intent {
            Intent::Help => Ok(Reply::text(HELP_TEXT)),
            Intent::Greeting => Ok(Reply::text(replies::greeting(&seed))),
            Intent::Farewell => Ok(Reply::text(replies::farewell(&seed))),
            Intent::TaskCreation => self.create(&parsed.residual, now).await,
            Intent::TaskCompletion => {
                self.find_target(conversation, SelectionAction::Complete, &parsed.residual, now_utc)
                    .await
            }
            Intent::TaskDeletion => {
                self.find_target(conversation, SelectionAction::Delete, &parsed.residual, now_utc)
                    .await
            }
            Intent::Selection(choice) => {
                // Classified against this snapshot, so it is present.
                let Some(question) = pending else {
                    return self.list(&parsed.residual, now).await;
                };
                self.select(conversation, &question, choice).await
            }
            Intent::TaskQuery | Intent::Unrecognized => self.list(&parsed.residual, now).await,
        }
    }

    async fn create(&self, text: &str, now: NaiveDateTime) -> ConversationResult<Reply> {
        let descriptor = match self.extractor.extract(text, now) {
            Ok(descriptor) => descriptor,
            Err(error) => {
                debug!(%error, "task creation abandoned");
                return Ok(Reply::text(match error {
                    ExtractionError::MissingName => MISSING_NAME,
                    ExtractionError::MissingDeadline => MISSING_DEADLINE,
                }));
            }
        };
        let task = self.repository.insert(&descriptor).await?;
        info!(
            task_id = %task.id(),
            name = %task.name(),
            deadline = %task.deadline(),
            difficulty = %task.difficulty(),
            "task created"
        );
        Ok(Reply::Text(replies::added(&task)?))
    }

    async fn find_target(
        &self,
        conversation: &ConversationId,
        action: SelectionAction,
        residual: &str,
        now_utc: DateTime<Utc>,
    ) -> ConversationResult<Reply> {
        let open = self
            .repository
            .find_by_filter(&TaskFilter::all().with_status(TaskStatus::ToDo))
            .await?;
        if open.is_empty() {
            return Ok(Reply::text(NO_TASKS));
        }
        let description = clean_description(residual);
        match self.matcher.match_tasks(&description, open) {
            MatchOutcome::Single(task) => Ok(Reply::Text(
                self.apply(action, &task)
                    .await?
                    .unwrap_or_else(|| TASK_GONE.to_owned()),
            )),
            MatchOutcome::Ambiguous(candidates) => {
                let (text, options) = replies::disambiguation_prompt(action, &candidates);
                self.disambiguator
                    .begin(conversation, action, candidates, now_utc);
                Ok(Reply::SelectableList { text, options })
            }
            MatchOutcome::NoMatch { all_tasks } => Ok(Reply::Text(replies::no_match(
                &description,
                &all_tasks,
                self.wall_clock(now_utc).date(),
                self.config.max_listed_tasks,
            )?)),
        }
    }

    async fn select(
        &self,
        conversation: &ConversationId,
        question: &PendingDisambiguation,
        choice: usize,
    ) -> ConversationResult<Reply> {
        let task = match question.choose(choice) {
            Ok(task) => task,
            Err(invalid) => return Ok(Reply::Text(replies::invalid_choice(invalid.available))),
        };
        let Some(text) = self.apply(question.action(), task).await? else {
            return Ok(Reply::text(TASK_GONE));
        };
        self.disambiguator.clear(conversation);
        Ok(Reply::Text(text))
    }

    async fn handle_choice(
        &self,
        conversation: &ConversationId,
        action: SelectionAction,
        task_id: TaskId,
        message: Option<&MessageRef>,
        now_utc: DateTime<Utc>,
    ) -> ConversationResult<Reply> {
        let offered = self
            .disambiguator
            .offered(conversation, task_id, now_utc)
            .is_some();
        debug!(%conversation, %task_id, offered, "selection event received");
        let Some(task) = self.repository.find_by_id(task_id).await? else {
            return Ok(reply_to(message, TASK_GONE.to_owned()));
        };
        let Some(text) = self.apply(action, &task).await? else {
            return Ok(reply_to(message, TASK_GONE.to_owned()));
        };
        self.disambiguator.clear(conversation);
        Ok(reply_to(message, text))
    }

    async fn list(&self, text: &str, now: NaiveDateTime) -> ConversationResult<Reply> {
        let filter = self
            .relations
            .resolve(text, now)
            .as_ref()
            .and_then(RelationQuery::to_filter);
        let tasks = self
            .repository
            .find_by_filter(
                &filter
                    .unwrap_or_else(TaskFilter::all)
                    .with_status(TaskStatus::ToDo),
            )
            .await?;
        debug!(filtered = filter.is_some(), count = tasks.len(), "listing tasks");
        if tasks.is_empty() && filter.is_some() {
            return Ok(Reply::text(NO_QUERY_RESULTS));
        }
        Ok(Reply::Text(replies::format_task_list(
            &tasks,
            now.date(),
            self.config.max_listed_tasks,
        )))
    }

    /// Runs the store command for a chosen task and returns the reply text,
    /// or `None` when the task vanished first.
    async fn apply(
        &self,
        action: SelectionAction,
        task: &Task,
    ) -> ConversationResult<Option<String>> {
        let outcome = match (action, self.config.completion_policy) {
            (SelectionAction::Complete, CompletionPolicy::MarkCompleted) => {
                let mut finished = task.clone();
                finished.mark_completed();
                self.repository.update(&finished).await
            }
            (SelectionAction::Complete, CompletionPolicy::Delete) | (SelectionAction::Delete, _) => {
                self.repository.delete(task.id()).await
            }
        };
        match outcome {
            Ok(()) => {
                info!(task_id = %task.id(), name = %task.name(), %action, "task resolved");
                let text = match action {
                    SelectionAction::Complete => replies::completed(task)?,
                    SelectionAction::Delete => replies::deleted(task)?,
                };
                Ok(Some(text))
            }
            Err(TaskRepositoryError::NotFound(id)) => {
                debug!(task_id = %id, "task vanished before it could be resolved");
                Ok(None)
            }
            Err(other) => Err(other.into()),
        }
    }

    fn wall_clock(&self, now_utc: DateTime<Utc>) -> NaiveDateTime {
        now_utc.with_timezone(&self.offset).naive_local()
    }

    fn slot(&self, conversation: &ConversationId) -> Slot {
        Arc::clone(self.slots().entry(conversation.clone()).or_default())
    }

    fn purge_idle(&self, now_utc: DateTime<Utc>) {
        let expired = self.disambiguator.purge_expired(now_utc);
        if expired > 0 {
            debug!(expired, "purged expired selections");
        }
        self.slots().retain(|conversation, slot| {
            Arc::strong_count(slot) > 1 || self.disambiguator.pending(conversation).is_some()
        });
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<ConversationId, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn reply_to(message: Option<&MessageRef>, text: String) -> Reply {
    if let Some(edited) = message {
        return Reply::Edit {
            message: edited.clone(),
            text,
        };
    }
    Reply::Text(text)
}
