//! Taskapp: a flat-file task tracker.
//!
//! Users log in, list tasks, create tasks and advance them through a fixed
//! status lifecycle. Every accepted change is recorded in an append-only
//! audit log. Users, tasks and change-log entries each live in their own
//! comma-delimited file.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business types and rules with no storage dependencies
//! - **Ports**: Repository traits the services depend on
//! - **Adapters**: In-memory implementations for tests and flat-file
//!   implementations for real use
//!
//! # Modules
//!
//! - [`user`]: User records and credential lookup
//! - [`task`]: Task records and the status lifecycle
//! - [`audit`]: Append-only change log
//! - [`storage`]: Shared flat-file table access
//! - [`app`]: Facade wiring the flat-file adapters together
//! - [`config`] and [`logging`]: Process start-up concerns

pub mod app;
pub mod audit;
pub mod config;
pub mod logging;
pub mod storage;
pub mod task;
pub mod user;
