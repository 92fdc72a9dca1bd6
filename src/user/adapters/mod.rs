//! Adapter implementations for the user repository port.

pub mod flat_file;
pub mod memory;
