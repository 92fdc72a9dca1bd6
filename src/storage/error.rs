//! Error types for flat-file storage access and row decoding.

use camino::Utf8PathBuf;
use std::io;
use thiserror::Error;

/// Errors raised while reaching or writing a storage file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage file (or its directory) does not exist.
    #[error("storage file not found: {path}")]
    NotFound {
        /// Path that could not be opened.
        path: Utf8PathBuf,
    },

    /// The configured path does not name a file.
    #[error("storage path does not name a file: {path}")]
    InvalidPath {
        /// Offending path.
        path: Utf8PathBuf,
    },

    /// Any other I/O failure.
    #[error("i/o failure on {path}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Classifies an I/O error raised while accessing `path`.
    #[must_use]
    pub fn from_io(path: Utf8PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Reason a single storage row could not be decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    /// The row does not have the number of fields the table requires.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Field count declared by the table header.
        expected: usize,
        /// Field count found on the row.
        found: usize,
    },

    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8")]
    InvalidEncoding,

    /// A field holds a value that cannot be parsed or is out of range.
    #[error("invalid {field} value '{value}'")]
    InvalidField {
        /// Header name of the field.
        field: &'static str,
        /// Raw field content.
        value: String,
    },
}
