//! Domain model: the content-source capability, posts, and errors.

pub mod error;
pub mod post;

pub use error::{AppError, ContentError, InputError};
pub use post::{ContentSource, Post};
