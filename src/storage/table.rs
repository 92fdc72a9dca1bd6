//! A single delimited file accessed through a capability directory handle.
//!
//! Every operation opens the parent directory, performs its read or write
//! and drops the handles before returning, so nothing stays open between
//! calls and nothing leaks on error paths.

use super::{RowError, RowFormat, Scan, SkippedRow, StorageError};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::{Dir, File};
use std::io::{self, Read, Seek, SeekFrom, Write};

/// Field delimiter shared by all tables.
pub const DELIMITER: char = ',';

/// A non-blank data line together with its one-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLine {
    /// Position in the file, counting the header as line 1.
    pub line_number: usize,
    /// Raw line bytes without terminator. Not necessarily valid UTF-8.
    pub raw: Vec<u8>,
}

impl DataLine {
    /// Returns the line as text.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::InvalidEncoding`] when the bytes are not UTF-8.
    pub fn text(&self) -> Result<&str, RowError> {
        std::str::from_utf8(&self.raw).map_err(|_| RowError::InvalidEncoding)
    }

    /// Decodes the line with the given row format.
    ///
    /// # Errors
    ///
    /// Returns [`RowError`] when the line is malformed.
    pub fn decode<F: RowFormat>(&self) -> Result<F::Row, RowError> {
        let fields: Vec<&str> = self.text()?.split(DELIMITER).collect();
        F::decode(&fields)
    }
}

/// Header-prefixed delimited file holding one entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatFileTable {
    path: Utf8PathBuf,
    header: &'static str,
}

impl FlatFileTable {
    /// Creates a table handle for `path` with the given header line.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, header: &'static str) -> Self {
        Self {
            path: path.into(),
            header,
        }
    }

    /// Creates a table handle using the header declared by a row format.
    #[must_use]
    pub fn for_format<F: RowFormat>(path: impl Into<Utf8PathBuf>) -> Self {
        Self::new(path, F::HEADER)
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Reads every non-blank line after the header.
    ///
    /// Lines are split on raw bytes, so one badly encoded line does not hide
    /// its neighbours.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the file cannot be opened or read.
    pub fn read_lines(&self) -> Result<Vec<DataLine>, StorageError> {
        let (dir, file_name) = self.open_parent()?;
        let contents = dir.read(file_name).map_err(|err| self.io_error(err))?;

        Ok(contents
            .split(|byte| *byte == b'\n')
            .enumerate()
            .skip(1)
            .map(|(index, line)| (index, line.strip_suffix(b"\r").unwrap_or(line)))
            .filter(|(_, line)| !line.iter().all(u8::is_ascii_whitespace))
            .map(|(index, line)| DataLine {
                line_number: index + 1,
                raw: line.to_vec(),
            })
            .collect())
    }

    /// Reads and decodes every row, skipping and logging malformed ones.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the file cannot be opened or read.
    pub fn scan<F: RowFormat>(&self) -> Result<Scan<F::Row>, StorageError> {
        let mut records = Vec::new();
        let mut skipped = Vec::new();
        for line in self.read_lines()? {
            match line.decode::<F>() {
                Ok(row) => records.push(row),
                Err(reason) => {
                    tracing::warn!(
                        path = %self.path,
                        line = line.line_number,
                        %reason,
                        "skipping malformed row"
                    );
                    skipped.push(SkippedRow {
                        line_number: line.line_number,
                        reason,
                    });
                }
            }
        }
        Ok(Scan::new(records, skipped))
    }

    /// Appends one record line, creating the file with its header if needed.
    ///
    /// Only the final byte of an existing file is inspected, to decide
    /// whether the previous line needs terminating.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the file cannot be opened or written.
    pub fn append_line(&self, line: &str) -> Result<(), StorageError> {
        let (dir, file_name) = self.open_parent()?;
        let mut options = OpenOptions::new();
        options.read(true).append(true).create(true);
        let mut file = dir
            .open_with(file_name, &options)
            .map_err(|err| self.io_error(err))?;
        let length = file
            .metadata()
            .map_err(|err| self.io_error(err))?
            .len();

        let mut payload = String::with_capacity(self.header.len() + line.len() + 2);
        if length == 0 {
            payload.push_str(self.header);
            payload.push('\n');
        } else if !Self::ends_with_newline(&mut file).map_err(|err| self.io_error(err))? {
            payload.push('\n');
        }
        payload.push_str(line);
        payload.push('\n');

        file.write_all(payload.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|err| self.io_error(err))?;
        tracing::debug!(path = %self.path, "appended row");
        Ok(())
    }

    fn ends_with_newline(file: &mut File) -> io::Result<bool> {
        let mut last = [0_u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        Ok(last == [b'\n'])
    }

    /// Replaces the whole file with the header followed by `lines`.
    ///
    /// The new content is written to a sibling temporary file that is then
    /// renamed over the original, so readers never observe a torn file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the temporary file cannot be written or
    /// renamed.
    pub fn replace_lines<I, S>(&self, lines: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let (dir, file_name) = self.open_parent()?;
        let mut contents = Vec::from(self.header.as_bytes());
        contents.push(b'\n');
        for line in lines {
            contents.extend_from_slice(line.as_ref());
            contents.push(b'\n');
        }

        let temp_name = format!(".{file_name}.tmp");
        dir.write(temp_name.as_str(), &contents)
            .map_err(|err| self.io_error(err))?;
        dir.rename(temp_name.as_str(), &dir, file_name)
            .map_err(|err| self.io_error(err))?;
        tracing::debug!(path = %self.path, "rewrote table");
        Ok(())
    }

    fn open_parent(&self) -> Result<(Dir, &str), StorageError> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| StorageError::InvalidPath {
                path: self.path.clone(),
            })?;
        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| self.io_error(err))?;
        Ok((dir, file_name))
    }

    fn io_error(&self, err: io::Error) -> StorageError {
        StorageError::from_io(self.path.clone(), err)
    }
}
