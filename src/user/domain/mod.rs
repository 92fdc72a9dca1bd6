//! Domain model for users.

mod error;
mod ids;
mod user;

pub use error::UserDomainError;
pub use ids::UserCode;
pub use user::{Password, User};
