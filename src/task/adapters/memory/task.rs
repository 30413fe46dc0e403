//! In-memory task store keeping rows in insertion order.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    adapters::models::TaskRow,
    domain::{Task, TaskDescriptor, TaskFilter, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task store.
///
/// Rows are held in the external table's shape so every read goes through
/// the same row conversion a remote store would need.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    rows: Arc<RwLock<Vec<TaskRow>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with rows, kept in the given order.
    #[must_use]
    pub fn with_rows(rows: impl IntoIterator<Item = TaskRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows.into_iter().collect())),
        }
    }

    /// Returns a copy of the stored rows.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the lock is poisoned.
    pub fn rows(&self) -> TaskRepositoryResult<Vec<TaskRow>> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, Vec<TaskRow>>> {
        self.rows.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, Vec<TaskRow>>> {
        self.rows.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn row_to_task(row: &TaskRow) -> TaskRepositoryResult<Task> {
    row.to_task()
        .map_err(|err| TaskRepositoryError::CorruptRow(err.to_string()))
}

/// Finds the position of the row holding the given identifier.
fn position_of(rows: &[TaskRow], id: TaskId) -> Option<usize> {
    let key = id.to_string();
    rows.iter().position(|row| row.id == key)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let rows = self.read()?;
        rows.iter().map(row_to_task).collect()
    }

    async fn find_by_filter(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let rows = self.read()?;
        let mut matching = Vec::new();
        for row in rows.iter() {
            let task = row_to_task(row)?;
            if filter.matches(&task) {
                matching.push(task);
            }
        }
        Ok(matching)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let rows = self.read()?;
        position_of(&rows, id)
            .and_then(|index| rows.get(index))
            .map(row_to_task)
            .transpose()
    }

    async fn insert(&self, descriptor: &TaskDescriptor) -> TaskRepositoryResult<Task> {
        let mut rows = self.write()?;
        let id = TaskId::new();
        rows.push(TaskRow::from_descriptor(id, descriptor));
        Ok(Task::from_descriptor(id, descriptor.clone()))
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut rows = self.write()?;
        let slot = position_of(&rows, task.id())
            .and_then(|index| rows.get_mut(index))
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = TaskRow::from_task(task);
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut rows = self.write()?;
        let index = position_of(&rows, id).ok_or(TaskRepositoryError::NotFound(id))?;
        rows.remove(index);
        Ok(())
    }
}
