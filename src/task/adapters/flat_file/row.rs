//! Row codec for the tasks file.

use crate::storage::{RowError, RowFormat, parse_field};
use crate::task::domain::{Task, TaskCode, TaskStatus};
use crate::user::domain::UserCode;

/// A task row before its assignee is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Task code.
    pub code: TaskCode,
    /// Task name.
    pub name: String,
    /// Stored status.
    pub status: TaskStatus,
    /// Referenced assignee code.
    pub assignee_code: UserCode,
}

impl TaskRow {
    /// Captures the persisted fields of a task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            code: task.code(),
            name: task.name().to_owned(),
            status: task.status(),
            assignee_code: task.assignee().code(),
        }
    }
}

/// `Code,Name,Status,Rep_User_Code` rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskRowFormat;

fn invalid(field: &'static str, value: &str) -> RowError {
    RowError::InvalidField {
        field,
        value: value.to_owned(),
    }
}

impl RowFormat for TaskRowFormat {
    type Row = TaskRow;

    const HEADER: &'static str = "Code,Name,Status,Rep_User_Code";

    fn decode(fields: &[&str]) -> Result<Self::Row, RowError> {
        let [code, name, status, assignee_code] = fields else {
            return Err(RowError::FieldCount {
                expected: 4,
                found: fields.len(),
            });
        };
        let task_code = TaskCode::new(parse_field("Code", code)?)
            .map_err(|_| invalid("Code", code))?;
        let task_status = TaskStatus::try_from(parse_field::<u8>("Status", status)?)
            .map_err(|_| invalid("Status", status))?;
        let user_code = UserCode::new(parse_field("Rep_User_Code", assignee_code)?)
            .map_err(|_| invalid("Rep_User_Code", assignee_code))?;
        Ok(TaskRow {
            code: task_code,
            name: (*name).to_owned(),
            status: task_status,
            assignee_code: user_code,
        })
    }

    fn encode(row: &Self::Row) -> String {
        format!(
            "{},{},{},{}",
            row.code,
            row.name,
            row.status.code(),
            row.assignee_code
        )
    }
}
