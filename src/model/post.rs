//! Post data and the content-source capability.

use serde::Deserialize;

/// Anything that exposes a title and an optional summary for display.
///
/// The measurer and the live view depend only on this trait, so any data
/// entity can be measured without converting it into a [`Post`] first.
pub trait ContentSource {
    /// Title text. May be empty.
    fn title(&self) -> &str;

    /// Summary text, `None` when the source has no summary.
    fn summary(&self) -> Option<&str>;

    /// Summary text if present and not whitespace-only.
    fn visible_summary(&self) -> Option<&str> {
        self.summary().filter(|s| !s.trim().is_empty())
    }
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn summary(&self) -> Option<&str> {
        (**self).summary()
    }
}

/// A post as read from the JSON post list.
///
/// Unknown fields (author, date, ...) are ignored so feeds exported from
/// other tools can be piped in as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Post {
    /// Post title.
    #[serde(default)]
    pub title: String,
    /// Body summary shown only in full-content mode.
    #[serde(default)]
    pub summary: Option<String>,
}

impl Post {
    /// Create a post with a title and optional summary.
    pub fn new(title: impl Into<String>, summary: Option<String>) -> Self {
        Self {
            title: title.into(),
            summary,
        }
    }
}

impl ContentSource for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}
