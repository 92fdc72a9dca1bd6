//! Flat-file implementation of the audit log port.

use camino::Utf8PathBuf;

use super::AuditRowFormat;
use crate::audit::{
    domain::AuditEntry,
    ports::{AuditLogError, AuditLogRepository, AuditLogResult},
};
use crate::storage::{FlatFileTable, RowFormat, Scan};

/// Audit log backed by a delimited change-log file.
#[derive(Debug, Clone)]
pub struct FlatFileAuditLog {
    table: FlatFileTable,
}

impl FlatFileAuditLog {
    /// Creates an audit log appending to the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            table: FlatFileTable::for_format::<AuditRowFormat>(path),
        }
    }
}

impl AuditLogRepository for FlatFileAuditLog {
    fn append(&self, entry: &AuditEntry) -> AuditLogResult<()> {
        self.table
            .append_line(&AuditRowFormat::encode(entry))
            .map_err(AuditLogError::persistence)
    }

    fn find_all(&self) -> AuditLogResult<Scan<AuditEntry>> {
        self.table
            .scan::<AuditRowFormat>()
            .map_err(AuditLogError::persistence)
    }
}
