//! Repository port for appending and inspecting audit entries.

use crate::audit::domain::AuditEntry;
use crate::storage::Scan;
use crate::task::domain::TaskCode;
use std::sync::Arc;
use thiserror::Error;

/// Result type for audit log operations.
pub type AuditLogResult<T> = Result<T, AuditLogError>;

/// Append-only audit log contract.
pub trait AuditLogRepository: Send + Sync {
    /// Appends one entry after all existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`AuditLogError::Persistence`] when the write fails.
    fn append(&self, entry: &AuditEntry) -> AuditLogResult<()>;

    /// Returns every entry in append order, with skipped rows.
    ///
    /// # Errors
    ///
    /// Returns [`AuditLogError::Persistence`] when storage cannot be read.
    fn find_all(&self) -> AuditLogResult<Scan<AuditEntry>>;

    /// Returns the entries recorded for one task in append order.
    ///
    /// # Errors
    ///
    /// Returns [`AuditLogError::Persistence`] when storage cannot be read.
    fn find_by_task(&self, code: TaskCode) -> AuditLogResult<Vec<AuditEntry>> {
        Ok(self
            .find_all()?
            .into_records()
            .into_iter()
            .filter(|entry| entry.task_code() == code)
            .collect())
    }
}

/// Errors returned by audit log implementations.
#[derive(Debug, Clone, Error)]
pub enum AuditLogError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuditLogError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
