//! Display-ready view of a task for a logged-in user.

use super::{Task, TaskCode, TaskStatus};
use crate::user::domain::{User, UserCode};
use std::fmt;

/// Who a listed task is assigned to, from the viewer's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssigneeLabel {
    /// The viewer is the assignee.
    You,
    /// Another user is the assignee.
    Named(String),
    /// The stored assignee code no longer resolves to a user.
    Unresolved(UserCode),
}

impl fmt::Display for AssigneeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::You => f.write_str("you"),
            Self::Named(name) => f.write_str(name),
            Self::Unresolved(code) => write!(f, "unknown user {code}"),
        }
    }
}

/// One row of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListing {
    /// Task code.
    pub code: TaskCode,
    /// Task name.
    pub name: String,
    /// Assignee label relative to the viewer.
    pub assignee: AssigneeLabel,
    /// Current status.
    pub status: TaskStatus,
}

impl TaskListing {
    /// Builds the listing row for `task` as seen by `viewer`.
    #[must_use]
    pub fn for_viewer(task: &Task, viewer: &User) -> Self {
        let assignee = task.assignee();
        let label = match assignee.user() {
            _ if assignee.code() == viewer.code() => AssigneeLabel::You,
            Some(user) => AssigneeLabel::Named(user.name().to_owned()),
            None => AssigneeLabel::Unresolved(assignee.code()),
        };
        Self {
            code: task.code(),
            name: task.name().to_owned(),
            assignee: label,
            status: task.status(),
        }
    }
}

impl fmt::Display for TaskListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} (assignee: {}, status: {})",
            self.code, self.name, self.assignee, self.status
        )
    }
}
