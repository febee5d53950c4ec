//! File-based post source.

use crate::model::error::InputError;
use crate::model::Post;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A post list stored in a file. Read once.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the whole file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the file cannot be opened or read, and
    /// `InputError::Malformed` if it is not a JSON array of posts.
    pub fn read_posts(&self) -> Result<Vec<Post>, InputError> {
        let file = File::open(&self.path)?;
        super::parse_posts(BufReader::new(file))
    }
}
