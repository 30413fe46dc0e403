//! Port contracts for the task record store.
//!
//! Ports define infrastructure-agnostic interfaces used by the conversation
//! services.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
