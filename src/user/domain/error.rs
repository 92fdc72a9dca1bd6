//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The user code is not a positive integer.
    #[error("invalid user code {0}, expected a positive integer")]
    InvalidUserCode(u32),
}
