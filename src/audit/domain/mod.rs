//! Domain model for audit entries.

mod entry;

pub use entry::AuditEntry;
