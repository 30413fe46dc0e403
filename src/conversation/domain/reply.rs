//! Replies produced for the front end.

use super::{MessageRef, SelectionAction};
use crate::task::domain::TaskId;

/// One choice in a selectable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableOption {
    label: String,
    action: SelectionAction,
    task_id: TaskId,
}

impl SelectableOption {
    /// Creates an option that applies `action` to `task_id` when chosen.
    #[must_use]
    pub fn new(label: impl Into<String>, action: SelectionAction, task_id: TaskId) -> Self {
        Self {
            label: label.into(),
            action,
            task_id,
        }
    }

    /// Returns the text shown for the option.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the action applied when chosen.
    #[must_use]
    pub const fn action(&self) -> SelectionAction {
        self.action
    }

    /// Returns the task the option refers to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the callback payload a front end attaches to the option.
    #[must_use]
    pub fn callback_data(&self) -> String {
        self.action.callback_data(self.task_id)
    }
}

/// What the assistant says back for one inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text.
    Text(String),
    /// Text followed by numbered, selectable options.
    SelectableList {
        /// Prompt shown above the options.
        text: String,
        /// Options in display order.
        options: Vec<SelectableOption>,
    },
    /// Replacement text for a message sent earlier.
    Edit {
        /// Message to replace.
        message: MessageRef,
        /// New text.
        text: String,
    },
}

impl Reply {
    /// Creates a plain-text reply.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the reply's text, whichever form it takes.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Text(text) | Self::SelectableList { text, .. } | Self::Edit { text, .. } => text,
        }
    }
}
