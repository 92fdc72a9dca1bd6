//! In-memory repository for user lookup tests.

use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{User, UserCode},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Creates a repository seeded with `users` in order.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users.into_iter().collect())),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_code(&self, code: UserCode) -> UserRepositoryResult<Option<User>> {
        let users = self.users.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(users.iter().find(|user| user.code() == code).cloned())
    }

    fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> UserRepositoryResult<Option<User>> {
        let users = self.users.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(users
            .iter()
            .rev()
            .find(|user| user.has_credentials(email, password))
            .cloned())
    }
}
