//! Error types for task domain validation and parsing.

use super::{TaskCode, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task code is not a positive integer.
    #[error("invalid task code {0}, expected a positive integer")]
    InvalidTaskCode(u32),

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task name contains the field delimiter or a line break.
    #[error("task name '{0}' must not contain commas or line breaks")]
    InvalidTaskName(String),

    /// The requested status change is not permitted by the lifecycle.
    #[error("task {code} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        /// Task being changed.
        code: TaskCode,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },
}

/// Error returned while parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
