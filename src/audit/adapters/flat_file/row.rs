//! Row codec for the change-log file.

use chrono::NaiveDate;

use crate::audit::domain::AuditEntry;
use crate::storage::{RowError, RowFormat, parse_field};
use crate::task::domain::{TaskCode, TaskStatus};
use crate::user::domain::UserCode;

/// `Task_Code,Change_User_Code,Status,Change_Date` rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditRowFormat;

fn invalid(field: &'static str, value: &str) -> RowError {
    RowError::InvalidField {
        field,
        value: value.to_owned(),
    }
}

impl RowFormat for AuditRowFormat {
    type Row = AuditEntry;

    const HEADER: &'static str = "Task_Code,Change_User_Code,Status,Change_Date";

    fn decode(fields: &[&str]) -> Result<Self::Row, RowError> {
        let [task_code, user_code, status, date] = fields else {
            return Err(RowError::FieldCount {
                expected: 4,
                found: fields.len(),
            });
        };
        let task = TaskCode::new(parse_field("Task_Code", task_code)?)
            .map_err(|_| invalid("Task_Code", task_code))?;
        let user = UserCode::new(parse_field("Change_User_Code", user_code)?)
            .map_err(|_| invalid("Change_User_Code", user_code))?;
        let changed_to = TaskStatus::try_from(parse_field::<u8>("Status", status)?)
            .map_err(|_| invalid("Status", status))?;
        let changed_on: NaiveDate = parse_field("Change_Date", date)?;
        Ok(AuditEntry::new(task, user, changed_to, changed_on))
    }

    fn encode(row: &Self::Row) -> String {
        format!(
            "{},{},{},{}",
            row.task_code(),
            row.changed_by(),
            row.status().code(),
            row.changed_on().format("%Y-%m-%d")
        )
    }
}
