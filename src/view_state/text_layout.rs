//! Text layout primitive shared by measurement and rendering.
//!
//! Everything that decides how many rows a [`StyledText`] occupies lives
//! here. [`measure`] and [`layout`] are both built on [`wrap`], so a height
//! computed ahead of time always equals the number of rows later drawn.

use crate::view::styles::{StyledText, TextProfile};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Appended to the last visible line when a line cap cuts text off.
pub const ELLIPSIS: char = '…';

/// Wrap text into lines no wider than `width` display columns.
///
/// # Rules
/// - Paragraphs are split on `\n` (a trailing `\r` is dropped).
/// - Words are split on whitespace and packed greedily, joined by a single
///   space.
/// - A word wider than `width` is broken by character.
/// - An empty paragraph inside non-empty text yields one empty line.
/// - Empty or whitespace-only text yields no lines.
///
/// A `width` of zero is treated as one column. A character wider than
/// `width` still gets a line of its own; inner widths derived from
/// `LayoutWidth` are never that narrow.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph.trim_end_matches('\r'), width, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: usize, out: &mut Vec<String>) {
    let mut words = paragraph.split_whitespace().peekable();
    if words.peek().is_none() {
        out.push(String::new());
        return;
    }

    let mut current = String::new();
    let mut current_width = 0usize;

    for word in words {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Overlong word: fill whole lines character by character.
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width > 0 && current_width + ch_width > width {
                out.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
}

/// Rows needed to render `styled` at `width`, honoring its line cap and
/// line spacing.
///
/// This is the bounding-height primitive: deterministic, pure, and equal to
/// `layout(styled, width).len()`.
pub fn measure(styled: &StyledText, width: u16) -> u16 {
    rows_for(wrap(styled.text(), width).len(), styled.profile())
}

fn visible_lines(lines: usize, profile: &TextProfile) -> usize {
    match profile.max_lines() {
        Some(max) => lines.min(usize::from(max)),
        None => lines,
    }
}

fn rows_for(lines: usize, profile: &TextProfile) -> u16 {
    let visible = visible_lines(lines, profile);
    if visible == 0 {
        return 0;
    }
    let visible = u16::try_from(visible).unwrap_or(u16::MAX);
    visible.saturating_add(profile.line_spacing().saturating_mul(visible - 1))
}

/// Lay out `styled` into the rows that get drawn.
///
/// Spacing rows are empty lines. When the line cap truncates the text the
/// last visible line ends with [`ELLIPSIS`], still within `width`.
pub fn layout(styled: &StyledText, width: u16) -> Vec<Line<'static>> {
    let profile = styled.profile();
    let mut wrapped = wrap(styled.text(), width);

    let visible = visible_lines(wrapped.len(), profile);
    if visible < wrapped.len() {
        wrapped.truncate(visible);
        if let Some(last) = wrapped.last_mut() {
            *last = with_ellipsis(last, usize::from(width.max(1)));
        }
    }

    let spacing = usize::from(profile.line_spacing());
    let mut rows = Vec::with_capacity(wrapped.len() * (spacing + 1));
    for (i, text) in wrapped.into_iter().enumerate() {
        if i > 0 {
            rows.extend(std::iter::repeat_with(Line::default).take(spacing));
        }
        rows.push(Line::from(Span::styled(text, profile.style())));
    }
    rows
}

/// Shorten `line` so that it plus the ellipsis fits in `width` columns.
fn with_ellipsis(line: &str, width: usize) -> String {
    let budget = width.saturating_sub(1);
    let mut out = String::with_capacity(line.len() + ELLIPSIS.len_utf8());
    let mut used = 0usize;
    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    let mut out = out.trim_end().to_string();
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn plain(text: &str) -> StyledText {
        StyledText::new(text, TextProfile::summary_body())
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    mod wrap_tests {
        use super::*;

        #[test]
        fn empty_text_has_no_lines() {
            assert!(wrap("", 10).is_empty());
            assert!(wrap("   \n  ", 10).is_empty());
        }

        #[test]
        fn short_text_is_one_line() {
            assert_eq!(wrap("Hello World", 20), vec!["Hello World"]);
        }

        #[test]
        fn exact_fit_stays_on_one_line() {
            assert_eq!(wrap("Hello World", 11), vec!["Hello World"]);
        }

        #[test]
        fn wraps_at_word_boundaries() {
            assert_eq!(
                wrap("the quick brown fox", 10),
                vec!["the quick", "brown fox"]
            );
        }

        #[test]
        fn collapses_runs_of_whitespace() {
            assert_eq!(wrap("  a    b  ", 10), vec!["a b"]);
        }

        #[test]
        fn overlong_word_is_hard_broken() {
            assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        }

        #[test]
        fn word_after_hard_break_joins_tail() {
            assert_eq!(wrap("abcdef g", 4), vec!["abcd", "ef g"]);
        }

        #[test]
        fn newlines_start_new_paragraphs() {
            assert_eq!(wrap("one\ntwo", 20), vec!["one", "two"]);
        }

        #[test]
        fn blank_paragraph_is_an_empty_line() {
            assert_eq!(wrap("one\n\ntwo", 20), vec!["one", "", "two"]);
        }

        #[test]
        fn carriage_returns_are_dropped() {
            assert_eq!(wrap("one\r\ntwo", 20), vec!["one", "two"]);
        }

        #[test]
        fn wide_characters_count_double() {
            // Each CJK character is two columns wide.
            assert_eq!(wrap("日本語", 4), vec!["日本", "語"]);
        }

        #[test]
        fn zero_width_is_treated_as_one() {
            assert_eq!(wrap("ab", 0), vec!["a", "b"]);
        }
    }

    mod measure_tests {
        use super::*;

        #[test]
        fn empty_text_measures_zero() {
            assert_eq!(measure(&plain(""), 10), 0);
        }

        #[test]
        fn unbounded_text_counts_all_lines() {
            assert_eq!(measure(&plain("a b c d"), 1), 4);
        }

        #[test]
        fn line_cap_limits_rows() {
            let capped = StyledText::new("a b c d e", TextProfile::summary_title());
            assert_eq!(measure(&capped, 1), 3);
        }

        #[test]
        fn line_spacing_adds_rows_between_lines() {
            let spaced = StyledText::new("a b c", TextProfile::full_title());
            // 3 lines + 2 spacing rows
            assert_eq!(measure(&spaced, 1), 5);
        }

        #[test]
        fn single_line_has_no_spacing() {
            let spaced = StyledText::new("short", TextProfile::full_title());
            assert_eq!(measure(&spaced, 40), 1);
        }
    }

    mod layout_tests {
        use super::*;

        #[test]
        fn layout_inserts_spacing_rows() {
            let spaced = StyledText::new("a b", TextProfile::full_title());
            let rows = layout(&spaced, 1);
            let texts: Vec<String> = rows.iter().map(line_text).collect();
            assert_eq!(texts, vec!["a", "", "b"]);
        }

        #[test]
        fn truncated_text_ends_with_ellipsis() {
            let capped = StyledText::new(
                "one two three four five six seven",
                TextProfile::summary_title(),
            );
            let rows = layout(&capped, 9);
            let texts: Vec<String> = rows.iter().map(line_text).collect();
            assert_eq!(texts.len(), 3);
            assert_eq!(texts[0], "one two");
            assert_eq!(texts[1], "three");
            assert_eq!(texts[2], "four fiv…");
            assert!(texts[2].width() <= 9);
        }

        #[test]
        fn ellipsis_line_fits_width() {
            let capped = StyledText::new("abcd efgh ijkl mnop", TextProfile::summary_title());
            let rows = layout(&capped, 4);
            let last = line_text(rows.last().unwrap());
            assert_eq!(last, "ijk…");
            assert!(last.width() <= 4);
        }

        #[test]
        fn untruncated_text_has_no_ellipsis() {
            let capped = StyledText::new("one two", TextProfile::summary_title());
            let rows = layout(&capped, 20);
            assert!(!line_text(&rows[0]).contains(ELLIPSIS));
        }

        #[test]
        fn spans_carry_profile_style() {
            let styled = StyledText::new("styled", TextProfile::summary_title());
            let rows = layout(&styled, 20);
            assert_eq!(rows[0].spans[0].style, TextProfile::summary_title().style());
        }

        #[test]
        fn one_column_ellipsis_is_just_the_ellipsis() {
            assert_eq!(with_ellipsis("abc", 1), "…");
        }
    }

    proptest! {
        #[test]
        fn layout_row_count_matches_measure(
            text in "[a-z \\n]{0,200}",
            width in 1u16..60,
            profile_idx in 0usize..3,
        ) {
            let profile = [
                TextProfile::full_title(),
                TextProfile::summary_title(),
                TextProfile::summary_body(),
            ][profile_idx];
            let styled = StyledText::new(text, profile);
            prop_assert_eq!(layout(&styled, width).len(), usize::from(measure(&styled, width)));
        }

        #[test]
        fn wrapped_lines_fit_width(
            text in "[a-zA-Z0-9 ]{0,300}",
            width in 1u16..80,
        ) {
            for line in wrap(&text, width) {
                prop_assert!(line.width() <= usize::from(width), "{:?} wider than {}", line, width);
            }
        }
    }
}
