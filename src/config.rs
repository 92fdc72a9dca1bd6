//! Application configuration loaded from an optional TOML file.
//!
//! Every field has a default, so a missing file or a partial file is valid:
//!
//! ```toml
//! data_dir = "app/data"
//! users_file = "users.csv"
//! tasks_file = "tasks.csv"
//! logs_file = "logs.csv"
//! log_filter = "taskapp=info"
//! ```
//!
//! File names are resolved relative to `data_dir`; absolute file names are
//! used as given.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::io;
use thiserror::Error;

/// Settings read from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding the three storage files.
    pub data_dir: String,
    /// Users file name or path.
    pub users_file: String,
    /// Tasks file name or path.
    pub tasks_file: String,
    /// Change-log file name or path.
    pub logs_file: String,
    /// Default tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: ".".to_owned(),
            users_file: "users.csv".to_owned(),
            tasks_file: "tasks.csv".to_owned(),
            logs_file: "logs.csv".to_owned(),
            log_filter: "warn".to_owned(),
        }
    }
}

impl AppConfig {
    /// Resolves the storage file locations.
    #[must_use]
    pub fn storage(&self) -> StorageConfig {
        let dir = Utf8Path::new(&self.data_dir);
        StorageConfig {
            users: dir.join(&self.users_file),
            tasks: dir.join(&self.tasks_file),
            logs: dir.join(&self.logs_file),
        }
    }
}

/// Locations of the users, tasks and change-log files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Users file.
    pub users: Utf8PathBuf,
    /// Tasks file.
    pub tasks: Utf8PathBuf,
    /// Change-log file.
    pub logs: Utf8PathBuf,
}

impl StorageConfig {
    /// Uses the default file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Utf8Path>) -> Self {
        AppConfig {
            data_dir: dir.as_ref().to_string(),
            ..AppConfig::default()
        }
        .storage()
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read config {path}")]
    Read {
        /// Config file path.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("invalid config {path}")]
    Parse {
        /// Config file path.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },
}

/// Loads configuration from `path`, falling back to defaults when the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file cannot be read or parsed.
pub fn load(path: &Utf8Path) -> Result<AppConfig, ConfigError> {
    let read_error = |source| ConfigError::Read {
        path: path.to_owned(),
        source,
    };
    let Some(file_name) = path.file_name() else {
        return Err(read_error(io::Error::other("config path must name a file")));
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let contents = match Dir::open_ambient_dir(parent, ambient_authority())
        .and_then(|dir| dir.read_to_string(file_name))
    {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(err) => return Err(read_error(err)),
    };

    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}
