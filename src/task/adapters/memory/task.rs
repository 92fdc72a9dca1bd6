//! In-memory repository for task lifecycle tests.

use std::sync::{Arc, RwLock};

use crate::storage::Scan;
use crate::task::{
    domain::{Task, TaskCode},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl TaskRepository for InMemoryTaskRepository {
    fn find_all(&self) -> TaskRepositoryResult<Scan<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(Scan::complete(tasks.clone()))
    }

    fn find_by_code(&self, code: TaskCode) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.iter().find(|task| task.code() == code).cloned())
    }

    fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        tasks.push(task.clone());
        Ok(())
    }

    fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let mut found = false;
        for stored in tasks.iter_mut().filter(|stored| stored.code() == task.code()) {
            stored.clone_from(task);
            found = true;
        }
        if !found {
            return Err(TaskRepositoryError::NotFound(task.code()));
        }
        Ok(())
    }

    fn delete(&self, code: TaskCode) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let before = tasks.len();
        tasks.retain(|task| task.code() != code);
        if tasks.len() == before {
            return Err(TaskRepositoryError::NotFound(code));
        }
        Ok(())
    }
}
