//! Flat delimited-file storage shared by every repository adapter.
//!
//! Each entity lives in its own comma-delimited file with one header line
//! followed by one record per line. The format has no quoting or escaping, so
//! a literal comma or line break inside a field corrupts the row; domain
//! validation keeps such values out of the files this crate writes.
//!
//! Reads are reported as a [`Scan`]: the decoded records in file order plus a
//! [`SkippedRow`] for every malformed line, so data-quality problems stay
//! observable instead of disappearing. Failures to reach the file at all are
//! reported as [`StorageError`].

mod error;
mod format;
mod scan;
mod table;

pub use error::{RowError, StorageError};
pub use format::{RowFormat, parse_field};
pub use scan::{Scan, ScanStatus, SkippedRow};
pub use table::{DELIMITER, DataLine, FlatFileTable};
