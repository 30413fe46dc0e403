//! Port for the chat surface that delivers replies to the user.

use crate::conversation::domain::{ConversationId, MessageRef, SelectableOption};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for front-end operations.
pub type FrontEndResult<T> = Result<T, FrontEndError>;

/// Outbound half of a chat front end.
#[async_trait]
pub trait FrontEnd: Send + Sync {
    /// Sends a plain-text message.
    async fn send_text(&self, conversation: &ConversationId, text: &str) -> FrontEndResult<()>;

    /// Sends text followed by options the user can pick from.
    async fn send_selectable_list(
        &self,
        conversation: &ConversationId,
        text: &str,
        options: &[SelectableOption],
    ) -> FrontEndResult<()>;

    /// Replaces the text of a message sent earlier.
    async fn edit_message(
        &self,
        conversation: &ConversationId,
        message: &MessageRef,
        text: &str,
    ) -> FrontEndResult<()>;
}

/// Errors returned by front-end implementations.
#[derive(Debug, Clone, Error)]
pub enum FrontEndError {
    /// The conversation can no longer receive messages.
    #[error("conversation closed: {0}")]
    Closed(ConversationId),

    /// The transport failed.
    #[error("front-end transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl FrontEndError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
