//! Post list input sources.
//!
//! Posts arrive as a single JSON array, either from a file argument or from
//! piped stdin. Both sources are read once and decoded at the boundary so
//! the rest of the crate only ever sees [`Post`] values.

use crate::model::error::InputError;
use crate::model::Post;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for the post list.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// Post list read from a file path.
    File(FileSource),
    /// Post list piped on stdin.
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Read and decode every post from the source.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` on read failure and `InputError::Malformed`
    /// when the bytes are not a JSON array of posts.
    pub fn read_posts(self) -> Result<Vec<Post>, InputError> {
        match self {
            InputSource::File(f) => f.read_posts(),
            InputSource::Stdin(s) => s.read_posts(),
        }
    }
}

/// Detect and create the appropriate input source.
///
/// # Logic:
/// 1. If a file path is provided: `FileSource` (path must exist)
/// 2. Otherwise: `StdinSource`, which requires stdin to be piped
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::NoInput` if no file is given and stdin is a TTY.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}

/// Detect the input source and read all posts from it.
///
/// # Errors
///
/// See [`detect_input_source`] and [`InputSource::read_posts`].
pub fn load_posts(file: Option<PathBuf>) -> Result<Vec<Post>, InputError> {
    let source = detect_input_source(file)?;
    let posts = source.read_posts()?;
    info!(count = posts.len(), "Loaded posts");
    Ok(posts)
}

/// Decode a JSON array of posts from a reader.
///
/// Whitespace-only input is an empty list rather than a parse error, so
/// `echo "" | post-content` prints nothing instead of failing.
///
/// # Errors
///
/// Returns `InputError::Io` on read failure and `InputError::Malformed` for
/// anything other than a JSON array of post objects.
pub fn parse_posts(mut reader: impl Read) -> Result<Vec<Post>, InputError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    if contents.trim().is_empty() {
        debug!("Empty post input");
        return Ok(Vec::new());
    }

    let posts: Vec<Post> = serde_json::from_str(&contents)?;
    Ok(posts)
}
