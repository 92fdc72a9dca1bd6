//! User entity.

use super::UserCode;
use std::fmt;

/// Opaque login credential.
///
/// Stored in plain text by the flat-file format; the wrapper keeps it out of
/// `Debug` output and only supports exact comparison.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps a raw credential.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns `true` when `candidate` equals the stored credential exactly.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    /// Exposes the raw credential for persistence.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// A user who can log in and be assigned tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    code: UserCode,
    name: String,
    email: String,
    password: Password,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(
        code: UserCode,
        name: impl Into<String>,
        email: impl Into<String>,
        password: Password,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            email: email.into(),
            password,
        }
    }

    /// Returns the user code.
    #[must_use]
    pub const fn code(&self) -> UserCode {
        self.code
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the stored credential.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns `true` when both email and password match exactly.
    #[must_use]
    pub fn has_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password.matches(password)
    }
}
