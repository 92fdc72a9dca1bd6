//! User records and credential lookup.
//!
//! Users are pre-provisioned in storage; this crate only reads them. The
//! module follows the same hexagonal layout as [`crate::task`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Login orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
