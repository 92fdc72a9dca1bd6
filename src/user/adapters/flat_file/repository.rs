//! Flat-file implementation of the user repository port.

use camino::Utf8PathBuf;

use super::UserRowFormat;
use crate::storage::{FlatFileTable, Scan};
use crate::user::{
    domain::{User, UserCode},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// User repository backed by a delimited users file.
#[derive(Debug, Clone)]
pub struct FlatFileUserRepository {
    table: FlatFileTable,
}

impl FlatFileUserRepository {
    /// Creates a repository reading the users file at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            table: FlatFileTable::for_format::<UserRowFormat>(path),
        }
    }

    /// Reads every user row, reporting malformed rows as skipped.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when the file cannot be
    /// read.
    pub fn scan(&self) -> UserRepositoryResult<Scan<User>> {
        self.table
            .scan::<UserRowFormat>()
            .map_err(UserRepositoryError::persistence)
    }
}

impl UserRepository for FlatFileUserRepository {
    fn find_by_code(&self, code: UserCode) -> UserRepositoryResult<Option<User>> {
        Ok(self
            .scan()?
            .into_records()
            .into_iter()
            .find(|user| user.code() == code))
    }

    fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> UserRepositoryResult<Option<User>> {
        Ok(self
            .scan()?
            .into_records()
            .into_iter()
            .rev()
            .find(|user| user.has_credentials(email, password)))
    }
}
