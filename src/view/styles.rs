//! Styled-text construction for post titles and summaries.
//!
//! These builders are the single source of styling rules. The static height
//! calculator and the live [`ContentView`](super::ContentView) both call
//! them, which is what keeps a measured height equal to the rendered one.

use crate::view::constants::{FULL_TITLE_LINE_SPACING, SUMMARY_TITLE_MAX_LINES};
use crate::view_state::types::LayoutWidth;
use ratatui::style::{Color, Modifier, Style};

// ===== TextProfile =====

/// Rendering attributes attached to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextProfile {
    style: Style,
    line_spacing: u16,
    max_lines: Option<u16>,
}

impl TextProfile {
    /// Title profile for full-content mode: unbounded, spaced lines.
    pub fn full_title() -> Self {
        Self {
            style: Style::default().add_modifier(Modifier::BOLD),
            line_spacing: FULL_TITLE_LINE_SPACING,
            max_lines: None,
        }
    }

    /// Title profile for summary mode: dense and capped.
    pub fn summary_title() -> Self {
        Self {
            style: Style::default().add_modifier(Modifier::BOLD),
            line_spacing: 0,
            max_lines: Some(SUMMARY_TITLE_MAX_LINES),
        }
    }

    /// Body summary profile. Same in every mode.
    pub fn summary_body() -> Self {
        Self {
            style: Style::default().fg(Color::Gray),
            line_spacing: 0,
            max_lines: None,
        }
    }

    /// Style applied to every rendered span.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Blank rows inserted between consecutive rendered lines.
    pub fn line_spacing(&self) -> u16 {
        self.line_spacing
    }

    /// Maximum number of text lines rendered, `None` for unbounded.
    pub fn max_lines(&self) -> Option<u16> {
        self.max_lines
    }
}

// ===== StyledText =====

/// Immutable text paired with its rendering profile.
///
/// Built fresh on each request and never mutated. Truncation is not applied
/// here: the line cap is an attribute, and the ellipsis is inserted by the
/// text layout when the text is laid out for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    profile: TextProfile,
}

impl StyledText {
    /// Pair text with a profile.
    pub fn new(text: impl Into<String>, profile: TextProfile) -> Self {
        Self {
            text: text.into(),
            profile,
        }
    }

    /// An empty text that measures zero rows.
    pub fn empty(profile: TextProfile) -> Self {
        Self::new(String::new(), profile)
    }

    /// The plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The rendering profile.
    pub fn profile(&self) -> &TextProfile {
        &self.profile
    }

    /// True when there is nothing to render (empty or whitespace-only).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

// ===== Builders =====

/// Build the title text for the given content mode.
///
/// Full mode selects [`TextProfile::full_title`], summary mode selects
/// [`TextProfile::summary_title`]. The width parameter mirrors the
/// measurer's call shape and never influences which profile is chosen.
pub fn title_text(title: &str, show_full_content: bool, _width: LayoutWidth) -> StyledText {
    let profile = if show_full_content {
        TextProfile::full_title()
    } else {
        TextProfile::summary_title()
    };
    StyledText::new(title, profile)
}

/// Build the summary text. Empty input yields an empty [`StyledText`].
pub fn summary_text(summary: &str) -> StyledText {
    if summary.trim().is_empty() {
        return StyledText::empty(TextProfile::summary_body());
    }
    StyledText::new(summary, TextProfile::summary_body())
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    fn width(w: u16) -> LayoutWidth {
        LayoutWidth::new(w).unwrap()
    }

    #[test]
    fn full_mode_title_is_unbounded() {
        let text = title_text("A title", true, width(80));
        assert_eq!(text.profile().max_lines(), None);
        assert_eq!(text.profile().line_spacing(), FULL_TITLE_LINE_SPACING);
    }

    #[test]
    fn summary_mode_title_is_capped() {
        let text = title_text("A title", false, width(80));
        assert_eq!(text.profile().max_lines(), Some(SUMMARY_TITLE_MAX_LINES));
        assert_eq!(text.profile().line_spacing(), 0);
    }

    #[test]
    fn title_is_bold_in_both_modes() {
        for full in [true, false] {
            let text = title_text("Bold", full, width(80));
            assert!(
                text.profile()
                    .style()
                    .add_modifier
                    .contains(Modifier::BOLD),
                "title should be bold (full={full})"
            );
        }
    }

    #[test]
    fn title_string_is_not_truncated() {
        let long = "word ".repeat(200);
        let text = title_text(&long, false, width(10));
        assert_eq!(text.text(), long);
    }

    #[test]
    fn width_does_not_change_profile() {
        for full in [true, false] {
            let narrow = title_text("Same", full, width(10));
            let wide = title_text("Same", full, width(400));
            assert_eq!(narrow, wide);
        }
    }

    #[test]
    fn empty_title_is_empty() {
        assert!(title_text("", true, width(80)).is_empty());
        assert!(title_text("   ", false, width(80)).is_empty());
    }

    #[test]
    fn summary_uses_fixed_profile() {
        let text = summary_text("Body text");
        assert_eq!(*text.profile(), TextProfile::summary_body());
        assert_eq!(text.text(), "Body text");
    }

    #[test]
    fn empty_summary_yields_empty_text() {
        assert!(summary_text("").is_empty());
        assert!(summary_text(" \n\t").is_empty());
        assert_eq!(summary_text("").text(), "");
    }

    #[test]
    fn builders_are_deterministic() {
        assert_eq!(
            title_text("Same input", false, width(50)),
            title_text("Same input", false, width(50))
        );
        assert_eq!(summary_text("Body"), summary_text("Body"));
    }
}
