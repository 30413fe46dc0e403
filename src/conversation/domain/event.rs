//! Events delivered by the front end.

use super::{ConversationId, MessageRef};
use crate::task::domain::TaskId;
use std::fmt;
use thiserror::Error;

/// Action attached to a task choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionAction {
    /// The chosen task was finished.
    Complete,
    /// The chosen task should be removed.
    Delete,
}

impl SelectionAction {
    /// Returns the wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Delete => "delete",
        }
    }

    /// Encodes the action and task as callback data, e.g.
    /// `complete:<uuid>`.
    #[must_use]
    pub fn callback_data(self, task_id: TaskId) -> String {
        format!("{}:{task_id}", self.as_str())
    }

    /// Decodes callback data produced by [`Self::callback_data`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseCallbackError`] when the action or the task id is not
    /// recognised.
    pub fn parse_callback(data: &str) -> Result<(Self, TaskId), ParseCallbackError> {
        let (action, id) = data
            .split_once(':')
            .ok_or_else(|| ParseCallbackError(data.to_owned()))?;
        let parsed_action =
            Self::try_from(action).map_err(|_| ParseCallbackError(data.to_owned()))?;
        let task_id = id
            .parse::<TaskId>()
            .map_err(|_| ParseCallbackError(data.to_owned()))?;
        Ok((parsed_action, task_id))
    }
}

impl TryFrom<&str> for SelectionAction {
    type Error = ParseCallbackError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "complete" => Ok(Self::Complete),
            "delete" => Ok(Self::Delete),
            other => Err(ParseCallbackError(other.to_owned())),
        }
    }
}

impl fmt::Display for SelectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback data that does not name an action and a task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised selection callback: {0}")]
pub struct ParseCallbackError(pub String);

/// One inbound event from the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A free-text message.
    Text {
        /// Conversation the message belongs to.
        conversation: ConversationId,
        /// Message body.
        text: String,
    },
    /// A structured choice, such as a pressed button.
    Selection {
        /// Conversation the choice belongs to.
        conversation: ConversationId,
        /// What to do with the chosen task.
        action: SelectionAction,
        /// The chosen task.
        task_id: TaskId,
        /// Message carrying the choice, edited with the outcome when known.
        message: Option<MessageRef>,
    },
}

impl InboundEvent {
    /// Creates a text event.
    #[must_use]
    pub fn text(conversation: impl Into<ConversationId>, text: impl Into<String>) -> Self {
        Self::Text {
            conversation: conversation.into(),
            text: text.into(),
        }
    }

    /// Creates a selection event without a message to edit.
    #[must_use]
    pub fn selection(
        conversation: impl Into<ConversationId>,
        action: SelectionAction,
        task_id: TaskId,
    ) -> Self {
        Self::Selection {
            conversation: conversation.into(),
            action,
            task_id,
            message: None,
        }
    }

    /// Attaches the message that carried a selection.
    ///
    /// Has no effect on text events.
    #[must_use]
    pub fn with_message(self, message_ref: MessageRef) -> Self {
        match self {
            Self::Selection {
                conversation,
                action,
                task_id,
                ..
            } => Self::Selection {
                conversation,
                action,
                task_id,
                message: Some(message_ref),
            },
            text @ Self::Text { .. } => text,
        }
    }

    /// Returns the conversation the event belongs to.
    #[must_use]
    pub const fn conversation(&self) -> &ConversationId {
        match self {
            Self::Text { conversation, .. } | Self::Selection { conversation, .. } => {
                conversation
            }
        }
    }
}
