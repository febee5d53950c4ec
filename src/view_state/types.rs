//! Core layout newtypes

use crate::model::ContentError;
use crate::view::constants::{
    CHROME_HORIZONTAL_INSET, MAX_CHAR_WIDTH, MIN_FRAME_WIDTH, TEXT_HORIZONTAL_PADDING,
};

/// Frame width available for layout, in terminal columns.
///
/// # Invariants
/// - `get() >= MIN_FRAME_WIDTH`, so `inner_content_width()` is at least
///   `MAX_CHAR_WIDTH` columns and every character fits on a wrapped line.
/// - `inner_content_width() <= content_width() <= get()`.
///
/// # Smart Constructor
/// `LayoutWidth::new` is the only way in. Widths too narrow for the chrome
/// are rejected rather than clamped, so measurement and rendering never
/// disagree about what width they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayoutWidth(u16);

impl LayoutWidth {
    /// Smallest valid frame width.
    pub const MIN: Self = Self(MIN_FRAME_WIDTH);

    /// Validate a frame width.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::InvalidWidth` if `width < MIN_FRAME_WIDTH`.
    pub fn new(width: u16) -> Result<Self, ContentError> {
        if width < MIN_FRAME_WIDTH {
            Err(ContentError::InvalidWidth {
                width,
                minimum: MIN_FRAME_WIDTH,
            })
        } else {
            Ok(Self(width))
        }
    }

    /// Raw frame width in columns.
    pub fn get(&self) -> u16 {
        self.0
    }

    /// Frame width minus the border columns.
    pub fn content_width(&self) -> u16 {
        self.0 - CHROME_HORIZONTAL_INSET
    }

    /// Content width minus the text padding; the width text wraps at.
    pub fn inner_content_width(&self) -> u16 {
        self.content_width() - TEXT_HORIZONTAL_PADDING
    }
}

impl TryFrom<u16> for LayoutWidth {
    type Error = ContentError;

    fn try_from(width: u16) -> Result<Self, Self::Error> {
        Self::new(width)
    }
}

/// Rows a rendering will occupy, chrome included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MeasuredHeight(u16);

impl MeasuredHeight {
    /// Zero rows.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw row count.
    pub fn new(rows: u16) -> Self {
        Self(rows)
    }

    /// Raw row count.
    pub fn get(&self) -> u16 {
        self.0
    }

    /// Add rows, saturating at `u16::MAX`.
    pub fn saturating_add(&self, rows: u16) -> Self {
        Self(self.0.saturating_add(rows))
    }
}

impl std::fmt::Display for MeasuredHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Absolute row offset from the top of a stacked list. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LineOffset(usize);

impl LineOffset {
    /// Create a new LineOffset from a raw value.
    pub fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Get the raw usize value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Add an amount to this offset, saturating at usize::MAX.
    pub fn saturating_add(&self, amount: usize) -> Self {
        Self(self.0.saturating_add(amount))
    }
}
