//! Append-only audit trail of task status changes.
//!
//! One entry is written when a task is created and one for every accepted
//! status change. Entries are never updated or removed; read access exists
//! for inspection only and is not used by the lifecycle rules.

pub mod adapters;
pub mod domain;
pub mod ports;
