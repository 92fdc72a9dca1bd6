//! Repository port for task persistence and lookup.

use crate::storage::Scan;
use crate::task::domain::{Task, TaskCode};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations resolve each task's assignee on read; an assignee that no
/// longer exists yields an unresolved [`crate::task::domain::Assignee`]
/// rather than an error.
pub trait TaskRepository: Send + Sync {
    /// Returns every well-formed task in storage order, with skipped rows.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when storage cannot be
    /// read.
    fn find_all(&self) -> TaskRepositoryResult<Scan<Task>>;

    /// Finds the first task with the given code.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when storage cannot be
    /// read.
    fn find_by_code(&self, code: TaskCode) -> TaskRepositoryResult<Option<Task>>;

    /// Appends a new task. Duplicate codes are not checked here.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the write fails.
    fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Replaces the stored record carrying the task's code.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record has the code.
    fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes the stored record carrying `code`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record has the code.
    fn delete(&self, code: TaskCode) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskCode),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
