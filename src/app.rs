//! Flat-file application facade used by the command-line front end.
//!
//! Wires the three flat-file repositories to the login and lifecycle
//! services from a single [`StorageConfig`].

use std::sync::Arc;

use mockable::DefaultClock;

use crate::audit::{
    adapters::flat_file::FlatFileAuditLog, domain::AuditEntry, ports::AuditLogRepository,
};
use crate::config::StorageConfig;
use crate::task::{
    adapters::flat_file::FlatFileTaskRepository,
    domain::{Task, TaskCode, TaskListing},
    services::{ChangeStatusRequest, CreateTaskRequest, TaskLifecycleResult, TaskLifecycleService},
};
use crate::user::{
    adapters::flat_file::FlatFileUserRepository,
    domain::User,
    services::{LoginResult, LoginService},
};

/// Lifecycle service over the flat-file adapters.
pub type FlatFileLifecycleService = TaskLifecycleService<
    FlatFileTaskRepository<FlatFileUserRepository>,
    FlatFileUserRepository,
    FlatFileAuditLog,
    DefaultClock,
>;

/// Entry point exposing the operations a front end needs.
pub struct TaskApp {
    login: LoginService<FlatFileUserRepository>,
    lifecycle: FlatFileLifecycleService,
    audit: Arc<FlatFileAuditLog>,
}

impl TaskApp {
    /// Builds the application over the configured storage files.
    #[must_use]
    pub fn open(storage: &StorageConfig) -> Self {
        let users = Arc::new(FlatFileUserRepository::new(storage.users.clone()));
        let tasks = Arc::new(FlatFileTaskRepository::new(
            storage.tasks.clone(),
            Arc::clone(&users),
        ));
        let audit = Arc::new(FlatFileAuditLog::new(storage.logs.clone()));
        let lifecycle = TaskLifecycleService::new(
            tasks,
            Arc::clone(&users),
            Arc::clone(&audit),
            Arc::new(DefaultClock),
        );
        Self {
            login: LoginService::new(users),
            lifecycle,
            audit,
        }
    }

    /// Authenticates a user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::user::services::LoginError::AuthFailed`] when the
    /// credentials do not match.
    pub fn login(&self, email: &str, password: &str) -> LoginResult<User> {
        self.login.login(email, password)
    }

    /// Lists every task as seen by `login_user`.
    #[must_use]
    pub fn list_tasks(&self, login_user: &User) -> Vec<TaskListing> {
        self.lifecycle.list_tasks(login_user)
    }

    /// Creates a task assigned to `assignee_code`.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::create_task`].
    pub fn create_task(
        &self,
        code: u32,
        name: &str,
        assignee_code: u32,
        login_user: &User,
    ) -> TaskLifecycleResult<Task> {
        self.lifecycle
            .create_task(CreateTaskRequest::new(code, name, assignee_code), login_user)
    }

    /// Moves a task to `status`.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::change_status`].
    pub fn advance_status(
        &self,
        code: u32,
        status: u8,
        login_user: &User,
    ) -> TaskLifecycleResult<Task> {
        self.lifecycle
            .change_status(ChangeStatusRequest::new(code, status), login_user)
    }

    /// Deletes a finished task.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::delete_task`].
    pub fn delete_task(&self, code: u32) -> TaskLifecycleResult<Task> {
        self.lifecycle.delete_task(code)
    }

    /// Looks up a task; `None` for unknown or invalid codes.
    #[must_use]
    pub fn find_task(&self, code: u32) -> Option<Task> {
        TaskCode::new(code)
            .ok()
            .and_then(|task_code| self.lifecycle.find_task(task_code))
    }

    /// Returns the audit trail of one task, empty when unreadable.
    #[must_use]
    pub fn history(&self, code: u32) -> Vec<AuditEntry> {
        let Ok(task_code) = TaskCode::new(code) else {
            return Vec::new();
        };
        self.audit.find_by_task(task_code).unwrap_or_else(|err| {
            tracing::error!(task = %task_code, error = %err, "audit log unavailable");
            Vec::new()
        })
    }
}
