//! Conversation services: matching, disambiguation, reply prose and the
//! orchestrating state machine.

mod disambiguation;
mod matcher;
mod orchestrator;
pub mod replies;

pub use disambiguation::Disambiguator;
pub use matcher::{MatchOutcome, SubstringTaskMatcher, TaskMatcher, clean_description};
pub use orchestrator::{
    ConversationError, ConversationResult, ConversationService, ConversationState,
};
pub use replies::ReplyError;
