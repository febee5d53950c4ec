//! Tracing setup for the `post-content` binary.
//!
//! Layout passes and CLI lifecycle events go to a log file so they never mix
//! with rendered output on stdout. Monitor with `tail -f`.

use crate::config::ResolvedConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configured log path names a directory, not a file
    #[error("Log file path has no file name: {0:?}")]
    MissingFileName(PathBuf),

    /// A global subscriber is already installed
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Where log lines are appended: a directory plus a file name in it.
///
/// A bare file name such as `post-content.log` (the fallback when no state
/// directory is known) resolves to the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    directory: PathBuf,
    file_name: OsString,
}

impl LogTarget {
    /// Split a configured log path into directory and file name.
    ///
    /// # Errors
    ///
    /// Returns `LoggingError::MissingFileName` for paths such as `/` or `..`.
    pub fn from_path(path: &Path) -> Result<Self, LoggingError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| LoggingError::MissingFileName(path.to_path_buf()))?;

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self {
            directory,
            file_name: file_name.to_os_string(),
        })
    }

    /// Directory holding the log file.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path of the log file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Create the log directory if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `LoggingError::DirectoryCreation` when the directory cannot be
    /// created.
    pub fn ensure_directory(&self) -> Result<(), LoggingError> {
        std::fs::create_dir_all(&self.directory).map_err(|source| {
            LoggingError::DirectoryCreation {
                path: self.directory.clone(),
                source,
            }
        })
    }
}

/// `RUST_LOG` if set and valid, otherwise `default`.
pub fn filter_from_env(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Build a plain-text subscriber appending to `target`.
///
/// Not installed anywhere; pass it to [`tracing::subscriber::with_default`]
/// for a scoped subscriber or let [`init`] install it globally.
pub fn subscriber(
    target: &LogTarget,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    let appender = tracing_appender::rolling::never(&target.directory, &target.file_name);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .finish()
}

/// Install the global subscriber for the resolved configuration.
///
/// Creates the log directory when missing and honors `RUST_LOG`, falling
/// back to [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns `LoggingError` if the log path is unusable, the directory cannot
/// be created, or a global subscriber already exists.
pub fn init(config: &ResolvedConfig) -> Result<LogTarget, LoggingError> {
    let target = LogTarget::from_path(&config.log_file_path)?;
    target.ensure_directory()?;

    tracing::subscriber::set_global_default(subscriber(&target, filter_from_env(DEFAULT_FILTER)))
        .map_err(|_| LoggingError::SubscriberAlreadySet)?;

    Ok(target)
}
