//! Domain model for conversational task management.
//!
//! Tasks are created from extracted descriptors, filtered by deadline and
//! status, and completed or deleted through explicit commands. All storage
//! concerns stay outside of the domain boundary.

mod error;
mod filter;
mod ids;
mod task;

pub use error::{ParseDifficultyError, ParseTaskStatusError, TaskDomainError};
pub use filter::TaskFilter;
pub use ids::{TaskId, TaskName};
pub use task::{Difficulty, PersistedTaskData, Task, TaskDescriptor, TaskStatus};
