//! Service layer for listing, creating, advancing and deleting tasks.
//!
//! Storage failures never reach callers from here: they are logged and
//! degrade to an empty list, a missing task, or a skipped write. Only
//! business-rule violations are returned as [`TaskLifecycleError`].

use crate::audit::{domain::AuditEntry, ports::AuditLogRepository};
use crate::task::{
    domain::{ParseTaskStatusError, Task, TaskCode, TaskDomainError, TaskListing, TaskStatus},
    ports::TaskRepository,
};
use crate::user::{
    domain::{User, UserCode},
    ports::UserRepository,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    code: u32,
    name: String,
    assignee_code: u32,
}

impl CreateTaskRequest {
    /// Creates a request from raw user input.
    #[must_use]
    pub fn new(code: u32, name: impl Into<String>, assignee_code: u32) -> Self {
        Self {
            code,
            name: name.into(),
            assignee_code,
        }
    }
}

/// Request payload for changing a task's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeStatusRequest {
    code: u32,
    status: u8,
}

impl ChangeStatusRequest {
    /// Creates a request from a raw task code and numeric status.
    #[must_use]
    pub const fn new(code: u32, status: u8) -> Self {
        Self { code, status }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskLifecycleError {
    /// Domain validation failed, including rejected status transitions.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The requested status value is not part of the lifecycle.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The assignee code does not resolve to an existing user.
    #[error("user {0} does not exist, enter an existing user code")]
    InvalidReference(u32),

    /// The task code does not resolve to an existing task.
    #[error("task {0} does not exist, enter an existing task code")]
    TaskNotFound(TaskCode),

    /// A task with the same code already exists.
    #[error("task {0} already exists")]
    DuplicateTask(TaskCode),

    /// Only finished tasks may be deleted.
    #[error("task {0} must be done before it can be deleted")]
    TaskNotCompleted(TaskCode),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<T, U, A, C>
where
    T: TaskRepository,
    U: UserRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    users: Arc<U>,
    audit: Arc<A>,
    clock: Arc<C>,
}

impl<T, U, A, C> TaskLifecycleService<T, U, A, C>
where
    T: TaskRepository,
    U: UserRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, users: Arc<U>, audit: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            users,
            audit,
            clock,
        }
    }

    /// Lists every task with its assignee labelled relative to `login_user`.
    ///
    /// Returns an empty list when the task store cannot be read.
    #[must_use]
    pub fn list_tasks(&self, login_user: &User) -> Vec<TaskListing> {
        match self.tasks.find_all() {
            Ok(scan) => scan
                .records()
                .iter()
                .map(|task| TaskListing::for_viewer(task, login_user))
                .collect(),
            Err(err) => {
                tracing::error!(error = %err, "task store unavailable, listing nothing");
                Vec::new()
            }
        }
    }

    /// Retrieves a task by code.
    ///
    /// Returns `None` when the task does not exist or the store cannot be
    /// read.
    #[must_use]
    pub fn find_task(&self, code: TaskCode) -> Option<Task> {
        match self.tasks.find_by_code(code) {
            Ok(task) => task,
            Err(err) => {
                tracing::error!(task = %code, error = %err, "task store unavailable");
                None
            }
        }
    }

    /// Creates a `NotStarted` task and records the creation in the audit log.
    ///
    /// Task creation and the audit append are not transactional. A failed
    /// task write is logged and the audit append is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for an invalid code or name,
    /// [`TaskLifecycleError::InvalidReference`] when the assignee does not
    /// exist, or [`TaskLifecycleError::DuplicateTask`] when the code is taken.
    /// Nothing is written in any of these cases.
    pub fn create_task(
        &self,
        request: CreateTaskRequest,
        login_user: &User,
    ) -> TaskLifecycleResult<Task> {
        let code = TaskCode::new(request.code)?;
        let assignee = self
            .find_user(request.assignee_code)
            .ok_or(TaskLifecycleError::InvalidReference(request.assignee_code))?;
        if self.find_task(code).is_some() {
            return Err(TaskLifecycleError::DuplicateTask(code));
        }

        let task = Task::new(code, request.name, assignee)?;
        match self.tasks.store(&task) {
            Ok(()) => {
                tracing::info!(task = %code, by = %login_user.code(), "task created");
                self.record(&task, login_user);
            }
            Err(err) => {
                tracing::error!(task = %code, error = %err, "task was not persisted");
            }
        }
        Ok(task)
    }

    /// Moves a task to a new status and records the change.
    ///
    /// The stored task and the audit entry both carry the new status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] for an unknown status
    /// value, [`TaskLifecycleError::TaskNotFound`] for an unknown task, or
    /// [`TaskLifecycleError::Domain`] wrapping
    /// [`TaskDomainError::InvalidStatusTransition`] when the lifecycle rejects
    /// the move. Nothing is written in any of these cases.
    pub fn change_status(
        &self,
        request: ChangeStatusRequest,
        login_user: &User,
    ) -> TaskLifecycleResult<Task> {
        let target = TaskStatus::try_from(request.status)?;
        let code = TaskCode::new(request.code)?;
        let mut task = self
            .find_task(code)
            .ok_or(TaskLifecycleError::TaskNotFound(code))?;

        task.transition_to(target)?;
        match self.tasks.update(&task) {
            Ok(()) => {
                tracing::info!(task = %code, status = %target, by = %login_user.code(), "task status changed");
                self.record(&task, login_user);
            }
            Err(err) => {
                tracing::error!(task = %code, error = %err, "status change was not persisted");
            }
        }
        Ok(task)
    }

    /// Deletes a finished task. Its audit entries are kept.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] for an unknown task or
    /// [`TaskLifecycleError::TaskNotCompleted`] when the task is not `Done`.
    pub fn delete_task(&self, code: u32) -> TaskLifecycleResult<Task> {
        let task_code = TaskCode::new(code)?;
        let task = self
            .find_task(task_code)
            .ok_or(TaskLifecycleError::TaskNotFound(task_code))?;
        if !task.status().is_terminal() {
            return Err(TaskLifecycleError::TaskNotCompleted(task_code));
        }

        match self.tasks.delete(task_code) {
            Ok(()) => tracing::info!(task = %task_code, "task deleted"),
            Err(err) => {
                tracing::error!(task = %task_code, error = %err, "task was not deleted");
            }
        }
        Ok(task)
    }

    fn find_user(&self, raw_code: u32) -> Option<User> {
        let code = UserCode::new(raw_code).ok()?;
        match self.users.find_by_code(code) {
            Ok(user) => user,
            Err(err) => {
                tracing::error!(user = %code, error = %err, "user store unavailable");
                None
            }
        }
    }

    fn record(&self, task: &Task, login_user: &User) {
        let entry = AuditEntry::today(task.code(), login_user.code(), task.status(), &*self.clock);
        if let Err(err) = self.audit.append(&entry) {
            tracing::error!(task = %task.code(), error = %err, "audit entry was not written");
        }
    }
}
