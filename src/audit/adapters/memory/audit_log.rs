//! In-memory audit log for lifecycle tests.

use std::sync::{Arc, RwLock};

use crate::audit::{
    domain::AuditEntry,
    ports::{AuditLogError, AuditLogRepository, AuditLogResult},
};
use crate::storage::Scan;

/// Thread-safe in-memory audit log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLog {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl InMemoryAuditLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuditLogRepository for InMemoryAuditLog {
    fn append(&self, entry: &AuditEntry) -> AuditLogResult<()> {
        let mut entries = self.entries.write().map_err(|err| {
            AuditLogError::persistence(std::io::Error::other(err.to_string()))
        })?;
        entries.push(entry.clone());
        Ok(())
    }

    fn find_all(&self) -> AuditLogResult<Scan<AuditEntry>> {
        let entries = self.entries.read().map_err(|err| {
            AuditLogError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(Scan::complete(entries.clone()))
    }
}
