//! Credential check against the user store.

use crate::user::{domain::User, ports::UserRepository};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by [`LoginService::login`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    /// No user matches the email and password pair.
    #[error("email address or password is incorrect")]
    AuthFailed,
}

/// Result type for login operations.
pub type LoginResult<T> = Result<T, LoginError>;

/// Authenticates users by email and password.
#[derive(Clone)]
pub struct LoginService<U>
where
    U: UserRepository,
{
    users: Arc<U>,
}

impl<U> LoginService<U>
where
    U: UserRepository,
{
    /// Creates a login service over the given user repository.
    #[must_use]
    pub const fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Returns the user matching `email` and `password` exactly.
    ///
    /// An unreadable user store is logged and treated as a failed login.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::AuthFailed`] when no user matches.
    pub fn login(&self, email: &str, password: &str) -> LoginResult<User> {
        match self.users.find_by_email_and_password(email, password) {
            Ok(Some(user)) => {
                tracing::debug!(user = %user.code(), "login succeeded");
                Ok(user)
            }
            Ok(None) => Err(LoginError::AuthFailed),
            Err(err) => {
                tracing::error!(error = %err, "user store unavailable during login");
                Err(LoginError::AuthFailed)
            }
        }
    }
}
