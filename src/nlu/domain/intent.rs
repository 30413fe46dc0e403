//! Interaction intents recognised in a single message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user wants from one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Opening pleasantry.
    Greeting,
    /// Closing pleasantry or bare acknowledgment.
    Farewell,
    /// Request for usage instructions (`/help`, `/start`).
    Help,
    /// Explicit request to list tasks.
    TaskQuery,
    /// Request to create a task.
    TaskCreation,
    /// Report that a task was finished.
    TaskCompletion,
    /// Request to delete a task.
    TaskDeletion,
    /// Numbered answer to a pending "which task" question.
    Selection(usize),
    /// Nothing recognised; treated as a request to list everything.
    Unrecognized,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Greeting => f.write_str("greeting"),
            Self::Farewell => f.write_str("farewell"),
            Self::Help => f.write_str("help"),
            Self::TaskQuery => f.write_str("task_query"),
            Self::TaskCreation => f.write_str("task_creation"),
            Self::TaskCompletion => f.write_str("task_completion"),
            Self::TaskDeletion => f.write_str("task_deletion"),
            Self::Selection(number) => write!(f, "selection({number})"),
            Self::Unrecognized => f.write_str("unrecognized"),
        }
    }
}

/// A classified message together with the text relevant to its intent.
///
/// For completions and deletions the residual is the message with the
/// indicator phrase removed; for every other intent it is the trimmed
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIntent {
    /// The recognised intent.
    pub intent: Intent,
    /// Text the intent's handler works on.
    pub residual: String,
}

impl ParsedIntent {
    /// Creates a parsed intent.
    #[must_use]
    pub fn new(intent: Intent, residual: impl Into<String>) -> Self {
        Self {
            intent,
            residual: residual.into(),
        }
    }
}
