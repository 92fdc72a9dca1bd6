//! Task aggregate root and its assignee reference.

use super::{TaskCode, TaskDomainError, TaskStatus};
use crate::storage::DELIMITER;
use crate::user::domain::{User, UserCode};

/// The user a task is delegated to.
///
/// The stored code is always kept; `user` is `None` when the code no longer
/// resolves to an existing user at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignee {
    code: UserCode,
    user: Option<User>,
}

impl Assignee {
    /// Creates an assignee from a resolved user.
    #[must_use]
    pub fn resolved(user: User) -> Self {
        Self {
            code: user.code(),
            user: Some(user),
        }
    }

    /// Creates an assignee whose user record could not be found.
    #[must_use]
    pub const fn unresolved(code: UserCode) -> Self {
        Self { code, user: None }
    }

    /// Returns the referenced user code.
    #[must_use]
    pub const fn code(&self) -> UserCode {
        self.code
    }

    /// Returns the resolved user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    code: TaskCode,
    name: String,
    status: TaskStatus,
    assignee: Assignee,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task code.
    pub code: TaskCode,
    /// Persisted task name.
    pub name: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Assignee as resolved at read time.
    pub assignee: Assignee,
}

impl Task {
    /// Creates a new task in the `NotStarted` state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] or
    /// [`TaskDomainError::InvalidTaskName`] when the name cannot be stored.
    pub fn new(
        code: TaskCode,
        name: impl Into<String>,
        assignee: User,
    ) -> Result<Self, TaskDomainError> {
        let validated = validate_name(name.into())?;
        Ok(Self {
            code,
            name: validated,
            status: TaskStatus::NotStarted,
            assignee: Assignee::resolved(assignee),
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            code: data.code,
            name: data.name,
            status: data.status,
            assignee: data.assignee,
        }
    }

    /// Returns the task code.
    #[must_use]
    pub const fn code(&self) -> TaskCode {
        self.code
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assignee reference.
    #[must_use]
    pub const fn assignee(&self) -> &Assignee {
        &self.assignee
    }

    /// Moves the task to `target` if the lifecycle permits it.
    ///
    /// The task is left untouched when the transition is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when
    /// [`TaskStatus::can_transition_to`] rejects the move.
    pub fn transition_to(&mut self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                code: self.code,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }
}

fn validate_name(name: String) -> Result<String, TaskDomainError> {
    if name.trim().is_empty() {
        return Err(TaskDomainError::EmptyTaskName);
    }
    if name.contains([DELIMITER, '\n', '\r']) {
        return Err(TaskDomainError::InvalidTaskName(name));
    }
    Ok(name)
}
