//! Row codec for the users file.

use crate::storage::{RowError, RowFormat, parse_field};
use crate::user::domain::{Password, User, UserCode};

/// `Code,Name,Email,Password` rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserRowFormat;

impl RowFormat for UserRowFormat {
    type Row = User;

    const HEADER: &'static str = "Code,Name,Email,Password";

    fn decode(fields: &[&str]) -> Result<Self::Row, RowError> {
        let [code, name, email, password] = fields else {
            return Err(RowError::FieldCount {
                expected: 4,
                found: fields.len(),
            });
        };
        let raw_code: u32 = parse_field("Code", code)?;
        let user_code = UserCode::new(raw_code).map_err(|_| RowError::InvalidField {
            field: "Code",
            value: (*code).to_owned(),
        })?;
        Ok(User::new(user_code, *name, *email, Password::new(*password)))
    }

    fn encode(row: &Self::Row) -> String {
        format!(
            "{},{},{},{}",
            row.code(),
            row.name(),
            row.email(),
            row.password().expose()
        )
    }
}
