//! Repository port for read-only user lookup.

use crate::user::domain::{User, UserCode};
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// Read-only user lookup contract.
pub trait UserRepository: Send + Sync {
    /// Finds the first user whose code matches.
    ///
    /// Returns `None` when no user has the code.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when storage cannot be
    /// read.
    fn find_by_code(&self, code: UserCode) -> UserRepositoryResult<Option<User>>;

    /// Finds a user by exact, case-sensitive email and password match.
    ///
    /// When several users match, the last one in storage order wins.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when storage cannot be
    /// read.
    fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> UserRepositoryResult<Option<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
