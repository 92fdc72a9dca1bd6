//! Identifier type for users.

use super::UserDomainError;
use std::fmt;

/// Positive integer identifying a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserCode(u32);

impl UserCode {
    /// Creates a validated user code.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidUserCode`] when the value is zero.
    pub const fn new(value: u32) -> Result<Self, UserDomainError> {
        if value == 0 {
            return Err(UserDomainError::InvalidUserCode(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for UserCode {
    type Error = UserDomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for UserCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
