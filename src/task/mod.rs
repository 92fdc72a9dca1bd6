//! Task records and their status lifecycle.
//!
//! Tasks are created in the `NotStarted` state, advanced through
//! `InProgress` to `Done` by the lifecycle service, and every accepted change
//! is mirrored by an entry in the [`crate::audit`] log. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
