//! Task aggregate root and related task lifecycle types.

use super::{ParseDifficultyError, ParseTaskStatusError, TaskId, TaskName};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task completion status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task is outstanding.
    #[default]
    ToDo,
    /// Task has been completed but kept in the store.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::Completed => "Completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "to do" | "todo" | "to_do" => Ok(Self::ToDo),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Perceived effort of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Low effort.
    Easy,
    /// Moderate effort; used when nothing else is known.
    #[default]
    Medium,
    /// High effort.
    Hard,
}

impl Difficulty {
    /// Maps a numeric difficulty rating onto a level.
    ///
    /// Ratings up to 2 are easy, 3 is medium and anything above is hard.
    #[must_use]
    pub const fn from_rating(rating: u32) -> Self {
        match rating {
            0..=2 => Self::Easy,
            3 => Self::Medium,
            _ => Self::Hard,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = ParseDifficultyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(value.to_owned())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully extracted task that has not been persisted yet.
///
/// A descriptor cannot exist without a name and a concrete deadline, so a
/// partial extraction never reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    name: TaskName,
    deadline: NaiveDateTime,
    difficulty: Difficulty,
    status: TaskStatus,
}

impl TaskDescriptor {
    /// Creates an outstanding task descriptor.
    #[must_use]
    pub const fn new(name: TaskName, deadline: NaiveDateTime, difficulty: Difficulty) -> Self {
        Self {
            name,
            deadline,
            difficulty,
            status: TaskStatus::ToDo,
        }
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDateTime {
        self.deadline
    }

    /// Returns the difficulty level.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    deadline: NaiveDateTime,
    difficulty: Difficulty,
    status: TaskStatus,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted deadline.
    pub deadline: NaiveDateTime,
    /// Persisted difficulty.
    pub difficulty: Difficulty,
    /// Persisted status.
    pub status: TaskStatus,
}

impl Task {
    /// Creates a task from an extracted descriptor and a store-assigned
    /// identifier.
    #[must_use]
    pub fn from_descriptor(id: TaskId, descriptor: TaskDescriptor) -> Self {
        Self {
            id,
            name: descriptor.name,
            deadline: descriptor.deadline,
            difficulty: descriptor.difficulty,
            status: descriptor.status,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            deadline: data.deadline,
            difficulty: data.difficulty,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDateTime {
        self.deadline
    }

    /// Returns the difficulty level.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Marks the task as completed.
    pub const fn mark_completed(&mut self) {
        self.status = TaskStatus::Completed;
    }

    /// Moves the deadline.
    pub const fn reschedule(&mut self, deadline: NaiveDateTime) {
        self.deadline = deadline;
    }

    /// Replaces the task name.
    pub fn rename(&mut self, name: TaskName) {
        self.name = name;
    }

    /// Replaces the difficulty level.
    pub const fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}
