//! Error types for post-content.
//!
//! Errors are split by concern using `thiserror`, and compose into
//! [`AppError`] through `From` conversions so the CLI can propagate with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`ContentError`] - Invalid measurement input (width too narrow)
//!   - [`InputError`] - Post file/stdin reading and decoding failures
//!   - [`ConfigError`](crate::config::ConfigError) - Config file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Subscriber setup failures
//!
//! Empty titles and summaries are never errors; they measure as zero rows.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes of the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// A width or frame could not be used for layout.
    #[error("Layout error: {0}")]
    Content(#[from] ContentError),

    /// Failed to read or decode the post list.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Config file exists but could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Writing rendered output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors raised by the measure/render contract.
///
/// The only failure mode of measurement is a width too narrow to hold the
/// chrome plus a single column of text. Both `compute_height` and the live
/// view accept widths only through the same validating constructor, so the
/// two phases can never clamp differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContentError {
    /// Frame width leaves no room for text after chrome and padding.
    #[error("Layout width {width} is below the minimum frame width of {minimum}")]
    InvalidWidth {
        /// The rejected width in columns.
        width: u16,
        /// Smallest accepted frame width.
        minimum: u16,
    },
}

/// Errors encountered when reading the post list from a file or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified post file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// No file argument was given and stdin is an interactive terminal.
    #[error("No input: provide a file path or pipe JSON to stdin")]
    NoInput,

    /// The input is not a JSON array of posts.
    #[error("Malformed post list: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Generic I/O failure while reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
