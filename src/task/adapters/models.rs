//! Row model for the external task table.

use crate::task::domain::{
    Difficulty, PersistedTaskData, Task, TaskDescriptor, TaskId, TaskName, TaskStatus,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire format of the `Deadline` column.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A task row as exchanged with the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: String,
    /// Task name.
    #[serde(rename = "Task_name")]
    pub task_name: String,
    /// ISO-8601 deadline without offset.
    #[serde(rename = "Deadline")]
    pub deadline: String,
    /// `Easy`, `Medium` or `Hard`.
    pub difficulty: String,
    /// `To Do` or `Completed`.
    #[serde(rename = "Status")]
    pub status: String,
}

/// Errors raised while converting a stored row into a task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRowError {
    /// The identifier column is not a valid task identifier.
    #[error("invalid id column: {0}")]
    Id(String),
    /// The name column is empty.
    #[error("empty Task_name column")]
    Name,
    /// The deadline column is not an ISO-8601 timestamp.
    #[error("invalid Deadline column '{0}'")]
    Deadline(String),
    /// The difficulty column holds an unknown level.
    #[error("invalid difficulty column '{0}'")]
    Difficulty(String),
    /// The status column holds an unknown status.
    #[error("invalid Status column '{0}'")]
    Status(String),
}

impl TaskRow {
    /// Builds the row inserted for a new descriptor.
    #[must_use]
    pub fn from_descriptor(id: TaskId, descriptor: &TaskDescriptor) -> Self {
        Self {
            id: id.to_string(),
            task_name: descriptor.name().as_str().to_owned(),
            deadline: format_deadline(descriptor.deadline()),
            difficulty: descriptor.difficulty().as_str().to_owned(),
            status: descriptor.status().as_str().to_owned(),
        }
    }

    /// Builds the row stored for an existing task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            task_name: task.name().as_str().to_owned(),
            deadline: format_deadline(task.deadline()),
            difficulty: task.difficulty().as_str().to_owned(),
            status: task.status().as_str().to_owned(),
        }
    }

    /// Converts the row back into a task aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRowError`] naming the first malformed column.
    pub fn to_task(&self) -> Result<Task, TaskRowError> {
        let id = self
            .id
            .parse::<TaskId>()
            .map_err(|_| TaskRowError::Id(self.id.clone()))?;
        let name = TaskName::new(self.task_name.as_str()).map_err(|_| TaskRowError::Name)?;
        let deadline = parse_deadline(&self.deadline)
            .ok_or_else(|| TaskRowError::Deadline(self.deadline.clone()))?;
        let difficulty = Difficulty::try_from(self.difficulty.as_str())
            .map_err(|_| TaskRowError::Difficulty(self.difficulty.clone()))?;
        let status = TaskStatus::try_from(self.status.as_str())
            .map_err(|_| TaskRowError::Status(self.status.clone()))?;

        Ok(Task::from_persisted(PersistedTaskData {
            id,
            name,
            deadline,
            difficulty,
            status,
        }))
    }
}

/// Formats a deadline for the `Deadline` column.
#[must_use]
pub fn format_deadline(deadline: NaiveDateTime) -> String {
    deadline.format(DEADLINE_FORMAT).to_string()
}

/// Parses a `Deadline` column value.
///
/// Accepts the canonical format as well as fractional seconds and a space
/// separator, which other writers of the table produce.
#[must_use]
pub fn parse_deadline(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}
