//! Adapter implementations for the audit log port.

pub mod flat_file;
pub mod memory;
