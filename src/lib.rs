//! Tasktalk: conversational task management.
//!
//! Free-form chat messages are turned into operations on a small task
//! store. Each message is classified by intent, deadlines and task names are
//! extracted from it, list queries are resolved into deadline filters, and
//! ambiguous references to existing tasks are settled over several turns.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task records, deadline filters and the task store
//! - [`nlu`]: Intent classification and temporal interpretation
//! - [`conversation`]: Per-conversation dialogue state and replies
//! - [`config`]: Runtime configuration

pub mod config;
pub mod conversation;
pub mod nlu;
pub mod task;
