//! Layout dimension constants for the content surface.
//!
//! Shared by the static height calculator and the live view so both
//! phases derive widths and heights from the same numbers.

/// Columns consumed by the left and right borders.
pub const CHROME_HORIZONTAL_INSET: u16 = 2;

/// Rows consumed by the top and bottom borders.
pub const CHROME_VERTICAL_INSET: u16 = 2;

/// Padding columns between the borders and the text (one per side).
///
/// Applied only to text measurement; `content_width` excludes it and
/// `inner_content_width` includes it.
pub const TEXT_HORIZONTAL_PADDING: u16 = 2;

/// Blank rows between the title and the summary when both are shown.
pub const TITLE_SUMMARY_SPACING: u16 = 1;

/// Display width of the widest character (CJK and other double-width text).
pub const MAX_CHAR_WIDTH: u16 = 2;

/// Smallest frame width whose text column can hold any single character.
pub const MIN_FRAME_WIDTH: u16 = CHROME_HORIZONTAL_INSET + TEXT_HORIZONTAL_PADDING + MAX_CHAR_WIDTH;

/// Line cap applied to the title in summary (list) mode.
pub const SUMMARY_TITLE_MAX_LINES: u16 = 3;

/// Blank rows between wrapped title lines in full-content mode.
pub const FULL_TITLE_LINE_SPACING: u16 = 1;
