//! Interactive task assistant on standard input and output.
//!
//! Usage:
//!
//! ```text
//! task_chat [config.json]
//! ```
//!
//! Each input line is one message of a single local conversation. A line
//! of the form `!complete:<task-id>` or `!delete:<task-id>` is read as a
//! selection event instead. The optional JSON file holds an
//! [`AssistantConfig`]; log verbosity follows `RUST_LOG` (default `info`).

use std::{path::PathBuf, sync::Arc};

use mockable::DefaultClock;
use tasktalk::{
    config::{AssistantConfig, ConfigError},
    conversation::{
        adapters::ConsoleFrontEnd,
        domain::{ConversationId, InboundEvent, SelectionAction},
        services::{ConversationError, ConversationService},
    },
    nlu::adapters::{PatternCalendarParser, RuleBasedAnalyzer},
    task::adapters::memory::InMemoryTaskRepository,
};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Prefix marking a line as selection callback data.
const CALLBACK_PREFIX: char = '!';

/// Errors that end the session.
#[derive(Debug, Error)]
enum ChatError {
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read input: {0}")]
    Input(#[source] std::io::Error),
    #[error("failed to deliver reply: {0}")]
    Delivery(#[from] ConversationError),
}

#[tokio::main]
async fn main() -> Result<(), ChatError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(std::env::args_os().nth(1).map(PathBuf::from))?;
    let service = ConversationService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(RuleBasedAnalyzer::new()),
        Arc::new(PatternCalendarParser::new()),
        Arc::new(DefaultClock),
        config,
    )?;
    let front_end = ConsoleFrontEnd::new(std::io::stdout());
    let conversation = ConversationId::new("local");
    info!("task assistant ready");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(ChatError::Input)? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let event = to_event(&conversation, trimmed);
        service.deliver(&front_end, &event).await?;
    }
    info!("input closed, exiting");
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<AssistantConfig, ConfigError> {
    path.map_or_else(
        || Ok(AssistantConfig::default()),
        |config_path| AssistantConfig::load(&config_path),
    )
}

fn to_event(conversation: &ConversationId, line: &str) -> InboundEvent {
    let Some(data) = line.strip_prefix(CALLBACK_PREFIX) else {
        return InboundEvent::text(conversation.clone(), line);
    };
    match SelectionAction::parse_callback(data) {
        Ok((action, task_id)) => InboundEvent::selection(conversation.clone(), action, task_id),
        Err(error) => {
            warn!(%error, "treating malformed callback as text");
            InboundEvent::text(conversation.clone(), line)
        }
    }
}
