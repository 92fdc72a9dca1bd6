//! Immutable record of one task status change.

use crate::task::domain::{TaskCode, TaskStatus};
use crate::user::domain::UserCode;
use chrono::NaiveDate;
use mockable::Clock;

/// Which task changed, who changed it, to what status, and on which day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    task_code: TaskCode,
    changed_by: UserCode,
    status: TaskStatus,
    changed_on: NaiveDate,
}

impl AuditEntry {
    /// Creates an entry with an explicit date.
    #[must_use]
    pub const fn new(
        task_code: TaskCode,
        changed_by: UserCode,
        status: TaskStatus,
        changed_on: NaiveDate,
    ) -> Self {
        Self {
            task_code,
            changed_by,
            status,
            changed_on,
        }
    }

    /// Creates an entry dated today in the clock's local time zone.
    #[must_use]
    pub fn today(
        task_code: TaskCode,
        changed_by: UserCode,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Self {
        Self::new(task_code, changed_by, status, clock.local().date_naive())
    }

    /// Returns the task the entry refers to.
    #[must_use]
    pub const fn task_code(&self) -> TaskCode {
        self.task_code
    }

    /// Returns the user who made the change.
    #[must_use]
    pub const fn changed_by(&self) -> UserCode {
        self.changed_by
    }

    /// Returns the status the task had after the change.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the calendar date of the change.
    #[must_use]
    pub const fn changed_on(&self) -> NaiveDate {
        self.changed_on
    }
}
