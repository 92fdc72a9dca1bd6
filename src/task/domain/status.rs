//! Task status and the transition table.

use super::ParseTaskStatusError;
use std::fmt;

/// Task lifecycle status, stored as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// Work has not started (`0`).
    NotStarted,
    /// Work is underway (`1`).
    InProgress,
    /// Work is finished (`2`).
    Done,
}

impl TaskStatus {
    /// Returns the numeric storage code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::NotStarted => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Done => "done",
        }
    }

    /// Returns `true` for the final lifecycle status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns `true` when moving from `self` to `target` is permitted.
    ///
    /// Rejected: skipping straight from `NotStarted` to `Done`, re-entering
    /// `InProgress`, and leaving `Done`. Every other pair is accepted,
    /// including same-status requests on `NotStarted` and `Done`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        match (self, target) {
            (Self::NotStarted, Self::Done) | (Self::InProgress, Self::InProgress) => false,
            (Self::Done, other) => matches!(other, Self::Done),
            _ => true,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotStarted),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_string())),
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "0" | "not_started" => Ok(Self::NotStarted),
            "1" | "in_progress" => Ok(Self::InProgress),
            "2" | "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
