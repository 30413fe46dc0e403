//! Front end that records deliveries instead of sending them.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use crate::conversation::{
    domain::{ConversationId, MessageRef, SelectableOption},
    ports::{FrontEnd, FrontEndResult},
};

/// One recorded front-end call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// A plain-text message.
    Text {
        /// Target conversation.
        conversation: ConversationId,
        /// Message body.
        text: String,
    },
    /// A message with selectable options.
    SelectableList {
        /// Target conversation.
        conversation: ConversationId,
        /// Prompt text.
        text: String,
        /// Offered options.
        options: Vec<SelectableOption>,
    },
    /// An edit of an earlier message.
    Edit {
        /// Target conversation.
        conversation: ConversationId,
        /// Edited message.
        message: MessageRef,
        /// Replacement text.
        text: String,
    },
}

/// Thread-safe recorder of front-end deliveries.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingFrontEnd {
    deliveries: Arc<Mutex<Vec<Delivery>>>,
}

impl RecordingFrontEnd {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything delivered so far, oldest first.
    #[must_use]
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, delivery: Delivery) {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(delivery);
    }
}

#[async_trait]
impl FrontEnd for RecordingFrontEnd {
    async fn send_text(&self, conversation: &ConversationId, text: &str) -> FrontEndResult<()> {
        self.record(Delivery::Text {
            conversation: conversation.clone(),
            text: text.to_owned(),
        });
        Ok(())
    }

    async fn send_selectable_list(
        &self,
        conversation: &ConversationId,
        text: &str,
        options: &[SelectableOption],
    ) -> FrontEndResult<()> {
        self.record(Delivery::SelectableList {
            conversation: conversation.clone(),
            text: text.to_owned(),
            options: options.to_vec(),
        });
        Ok(())
    }

    async fn edit_message(
        &self,
        conversation: &ConversationId,
        message: &MessageRef,
        text: &str,
    ) -> FrontEndResult<()> {
        self.record(Delivery::Edit {
            conversation: conversation.clone(),
            message: message.clone(),
            text: text.to_owned(),
        });
        Ok(())
    }
}
