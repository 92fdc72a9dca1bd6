//! Adapter implementations for the task repository port.

pub mod flat_file;
pub mod memory;
