//! Domain model for tasks and the status state machine.
//!
//! The domain owns validation and transition rules; storage and audit
//! concerns stay outside this boundary.

mod error;
mod ids;
mod listing;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskCode;
pub use listing::{AssigneeLabel, TaskListing};
pub use status::TaskStatus;
pub use task::{Assignee, PersistedTaskData, Task};
