//! Shared test helpers for in-memory conversation integration tests.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use tasktalk::{
    config::AssistantConfig,
    conversation::{
        adapters::RecordingFrontEnd,
        domain::{ConversationId, InboundEvent, Reply},
        services::ConversationService,
    },
    nlu::adapters::{PatternCalendarParser, RuleBasedAnalyzer},
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{Difficulty, Task, TaskDescriptor, TaskName},
        ports::TaskRepository,
    },
};

/// Service type wired with the in-memory store and rule-based adapters.
pub type TestService = ConversationService<
    InMemoryTaskRepository,
    RuleBasedAnalyzer,
    PatternCalendarParser,
    SteppingClock,
>;

/// Clock frozen at an instant that tests can move forward.
#[derive(Debug)]
pub struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    /// Creates a clock frozen at `now`.
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: TimeDelta) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) += by;
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Everything a conversation test touches.
pub struct Assistant {
    /// Service under test.
    pub service: TestService,
    /// Backing store, shared with the service.
    pub repository: Arc<InMemoryTaskRepository>,
    /// Clock shared with the service.
    pub clock: Arc<SteppingClock>,
    /// Front end recording every delivered reply.
    pub front_end: RecordingFrontEnd,
}

impl Assistant {
    /// Builds an assistant with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn with_config(config: AssistantConfig) -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let clock = Arc::new(SteppingClock::new(wednesday_morning_utc()));
        let service = ConversationService::new(
            Arc::clone(&repository),
            Arc::new(RuleBasedAnalyzer::new()),
            Arc::new(PatternCalendarParser::new()),
            Arc::clone(&clock),
            config,
        )
        .expect("test configuration should be valid");
        Self {
            service,
            repository,
            clock,
            front_end: RecordingFrontEnd::new(),
        }
    }

    /// Sends one text message in `conversation` and returns the reply.
    ///
    /// # Panics
    ///
    /// Panics if the recording front end rejects the delivery.
    pub async fn say(&self, conversation: &str, text: &str) -> Reply {
        self.service
            .deliver(&self.front_end, &InboundEvent::text(conversation, text))
            .await
            .expect("recording front end accepts every delivery")
    }

    /// Stores a task directly.
    ///
    /// # Panics
    ///
    /// Panics if the name is empty or the store rejects the insert.
    pub async fn seed(&self, name: &str, deadline: NaiveDateTime) -> Task {
        let descriptor = TaskDescriptor::new(
            TaskName::new(name).expect("valid task name"),
            deadline,
            Difficulty::Medium,
        );
        self.repository
            .insert(&descriptor)
            .await
            .expect("seed insert should succeed")
    }

    /// Returns stored task names in store order.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be read.
    pub async fn names(&self) -> Vec<String> {
        self.repository
            .list_all()
            .await
            .expect("list should succeed")
            .iter()
            .map(|task| task.name().as_str().to_owned())
            .collect()
    }
}

/// Provides an assistant with default configuration.
#[fixture]
pub fn assistant() -> Assistant {
    Assistant::with_config(AssistantConfig::default())
}

/// Provides the identifier of the main test conversation.
#[fixture]
pub fn conversation() -> ConversationId {
    ConversationId::new("chat-1")
}

/// Wednesday 2026-10-21 09:30 UTC.
///
/// # Panics
///
/// Never; the instant is a valid literal.
pub fn wednesday_morning_utc() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 21, 9, 30, 0)
        .single()
        .expect("valid instant")
}

/// Deadline at 23:59:59 on the given day of 2026.
///
/// # Panics
///
/// Panics if the date does not exist.
pub fn end_of(month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, month, day)
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .expect("valid timestamp")
}
