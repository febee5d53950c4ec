//! Stdin-based post source for piped input.

use crate::model::error::InputError;
use crate::model::Post;
use std::io::{BufReader, IsTerminal, Read};

/// Post list piped on stdin, e.g. `cat posts.json | post-content`.
///
/// Reading blocks until EOF; the whole list is needed before any layout.
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: BufReader<R>,
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY. Blocking on an
    /// interactive terminal would hang waiting for input the user never
    /// meant to type.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(stdin))
    }
}

impl<R: Read> StdinSource<R> {
    /// Create a source from any reader. Bypasses the TTY check.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read to EOF and decode the post list.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures and `InputError::Malformed`
    /// for invalid JSON.
    pub fn read_posts(self) -> Result<Vec<Post>, InputError> {
        super::parse_posts(self.reader)
    }
}
