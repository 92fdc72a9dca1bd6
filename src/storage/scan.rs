//! Multi-row read results that keep track of skipped rows.

use super::RowError;

/// Summary of how complete a [`Scan`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    /// No rows were present.
    Empty,
    /// Every row decoded.
    Complete,
    /// At least one row was skipped.
    Partial,
}

/// A malformed row left out of a [`Scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// One-based line number in the storage file.
    pub line_number: usize,
    /// Why the row was rejected.
    pub reason: RowError,
}

/// Records read from storage in file order, plus the rows that were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<T> {
    records: Vec<T>,
    skipped: Vec<SkippedRow>,
}

impl<T> Scan<T> {
    /// Creates a scan from decoded records and skipped rows.
    #[must_use]
    pub const fn new(records: Vec<T>, skipped: Vec<SkippedRow>) -> Self {
        Self { records, skipped }
    }

    /// Creates a scan in which every row decoded.
    #[must_use]
    pub const fn complete(records: Vec<T>) -> Self {
        Self::new(records, Vec::new())
    }

    /// Returns the decoded records.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Returns the skipped rows.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// Consumes the scan, returning the decoded records.
    #[must_use]
    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Classifies the scan.
    #[must_use]
    pub fn status(&self) -> ScanStatus {
        if !self.skipped.is_empty() {
            ScanStatus::Partial
        } else if self.records.is_empty() {
            ScanStatus::Empty
        } else {
            ScanStatus::Complete
        }
    }

    /// Maps every record, keeping the skipped rows.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Scan<U> {
        Scan {
            records: self.records.into_iter().map(f).collect(),
            skipped: self.skipped,
        }
    }
}

impl<T> Default for Scan<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
