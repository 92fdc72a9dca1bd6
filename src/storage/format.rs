//! Row codec contract implemented by each entity's storage adapter.

use super::RowError;
use std::str::FromStr;

/// Encoding and decoding of one entity type to a delimited row.
pub trait RowFormat {
    /// Decoded row type.
    type Row;

    /// Header line written at the top of the file.
    const HEADER: &'static str;

    /// Decodes the fields of one line.
    ///
    /// # Errors
    ///
    /// Returns [`RowError`] when the field count is wrong or a field value is
    /// invalid.
    fn decode(fields: &[&str]) -> Result<Self::Row, RowError>;

    /// Encodes a row as a single delimited line without a terminator.
    fn encode(row: &Self::Row) -> String;
}

/// Parses a single field, mapping failures to [`RowError::InvalidField`].
///
/// # Errors
///
/// Returns [`RowError::InvalidField`] when `value` does not parse as `T`.
pub fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, RowError> {
    value.trim().parse().map_err(|_| RowError::InvalidField {
        field,
        value: value.to_owned(),
    })
}
