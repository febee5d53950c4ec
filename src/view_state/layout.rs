//! Height computation for post content.

use super::text_layout;
use super::types::{LayoutWidth, LineOffset, MeasuredHeight};
use crate::model::ContentSource;
use crate::view::constants::{CHROME_VERTICAL_INSET, TITLE_SUMMARY_SPACING};
use crate::view::styles::{summary_text, title_text, StyledText};
use tracing::debug;

/// The styled texts a source renders as in a given mode.
///
/// Built by the same function for measurement and for the live view, so the
/// two phases never style content differently. Summary is present only in
/// full-content mode and only when the source has visible summary text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTexts {
    title: StyledText,
    summary: Option<StyledText>,
}

impl ContentTexts {
    /// Style `source` for `width` and mode.
    pub fn build<S: ContentSource + ?Sized>(
        source: &S,
        width: LayoutWidth,
        show_full_content: bool,
    ) -> Self {
        let title = title_text(source.title(), show_full_content, width);
        let summary = if show_full_content {
            source.visible_summary().map(summary_text)
        } else {
            None
        };
        Self { title, summary }
    }

    /// Styled title.
    pub fn title(&self) -> &StyledText {
        &self.title
    }

    /// Styled summary, if shown.
    pub fn summary(&self) -> Option<&StyledText> {
        self.summary.as_ref()
    }
}

/// Calculate the rendered height of a source in terminal rows.
///
/// This is THE canonical measurement. It never touches a live view, so a
/// list can size every row before constructing any of them.
///
/// # Composition
/// - Title rows at the inner content width (line cap and spacing applied)
/// - In full-content mode with a non-empty summary: one spacing row plus
///   the summary rows
/// - Top and bottom border rows
///
/// # Contract
/// - MUST be deterministic (same inputs → same output)
/// - MUST be non-increasing in `width` for fixed source and mode
/// - MUST be `>=` the summary-mode height when `show_full_content` is true
/// - MUST equal `ContentView::natural_height` for the same inputs
pub fn compute_height<S: ContentSource + ?Sized>(
    source: &S,
    width: LayoutWidth,
    show_full_content: bool,
) -> MeasuredHeight {
    let texts = ContentTexts::build(source, width, show_full_content);
    let inner = width.inner_content_width();

    let title_rows = text_layout::measure(texts.title(), inner);
    let summary_rows = texts
        .summary()
        .map(|summary| TITLE_SUMMARY_SPACING.saturating_add(text_layout::measure(summary, inner)))
        .unwrap_or(0);

    MeasuredHeight::new(CHROME_VERTICAL_INSET)
        .saturating_add(title_rows)
        .saturating_add(summary_rows)
}

/// Layout metadata for one post in a stacked list.
///
/// # Invariants
/// - `cumulative_y[i] = sum(height[0..i])` (maintained by [`stack_layouts`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostLayout {
    height: MeasuredHeight,
    cumulative_y: LineOffset,
}

impl PostLayout {
    /// Height in rows.
    pub fn height(&self) -> MeasuredHeight {
        self.height
    }

    /// Row offset of this post's top border.
    pub fn cumulative_y(&self) -> LineOffset {
        self.cumulative_y
    }

    /// Row offset immediately after this post.
    pub fn bottom_y(&self) -> LineOffset {
        self.cumulative_y
            .saturating_add(usize::from(self.height.get()))
    }
}

/// Pre-measure a list of sources and stack them top to bottom.
///
/// Only [`compute_height`] is consulted; no view is constructed.
pub fn stack_layouts<S: ContentSource>(
    sources: &[S],
    width: LayoutWidth,
    show_full_content: bool,
) -> Vec<PostLayout> {
    let mut next_y = LineOffset::default();
    let layouts: Vec<PostLayout> = sources
        .iter()
        .map(|source| {
            let layout = PostLayout {
                height: compute_height(source, width, show_full_content),
                cumulative_y: next_y,
            };
            next_y = layout.bottom_y();
            layout
        })
        .collect();

    debug!(
        posts = layouts.len(),
        width = width.get(),
        show_full_content,
        total_rows = next_y.get(),
        "Stacked post layouts"
    );

    layouts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Post;
    use crate::view::constants::SUMMARY_TITLE_MAX_LINES;

    fn width(w: u16) -> LayoutWidth {
        LayoutWidth::new(w).unwrap()
    }

    fn post(title: &str, summary: &str) -> Post {
        Post::new(title, Some(summary.to_string()))
    }

    const LONG_TITLE: &str = "Measuring text before rendering it lets a scrolling list lay out \
        every row without building a single view for rows that are not visible yet";

    mod content_texts {
        use super::*;

        #[test]
        fn summary_mode_has_no_summary() {
            let texts = ContentTexts::build(&post("T", "Body"), width(40), false);
            assert!(texts.summary().is_none());
        }

        #[test]
        fn full_mode_includes_summary() {
            let texts = ContentTexts::build(&post("T", "Body"), width(40), true);
            assert_eq!(texts.summary().map(StyledText::text), Some("Body"));
        }

        #[test]
        fn full_mode_skips_blank_summary() {
            let texts = ContentTexts::build(&post("T", "   "), width(40), true);
            assert!(texts.summary().is_none());
        }

        #[test]
        fn title_matches_builder() {
            let texts = ContentTexts::build(&post("T", ""), width(40), true);
            assert_eq!(*texts.title(), title_text("T", true, width(40)));
        }
    }

    mod compute_height_tests {
        use super::*;

        #[test]
        fn hello_world_is_one_row_plus_chrome() {
            let source = post("Hello World", "");
            let height = compute_height(&source, width(320), false);
            assert_eq!(height.get(), 1 + CHROME_VERTICAL_INSET);
        }

        #[test]
        fn empty_source_is_chrome_only() {
            let source = Post::default();
            assert_eq!(
                compute_height(&source, width(40), true).get(),
                CHROME_VERTICAL_INSET
            );
            assert_eq!(
                compute_height(&source, width(40), false).get(),
                CHROME_VERTICAL_INSET
            );
        }

        #[test]
        fn summary_adds_spacing_and_rows_in_full_mode() {
            let source = post("Title", "Body");
            let height = compute_height(&source, width(40), true);
            assert_eq!(
                height.get(),
                CHROME_VERTICAL_INSET + 1 + TITLE_SUMMARY_SPACING + 1
            );
        }

        #[test]
        fn summary_ignored_in_summary_mode() {
            let with_summary = post("Title", "A long body that would wrap a lot");
            let without = Post::new("Title", None);
            assert_eq!(
                compute_height(&with_summary, width(12), false),
                compute_height(&without, width(12), false)
            );
        }

        #[test]
        fn summary_mode_title_is_capped() {
            let source = Post::new(LONG_TITLE, None);
            let height = compute_height(&source, width(20), false);
            assert_eq!(
                height.get(),
                CHROME_VERTICAL_INSET + SUMMARY_TITLE_MAX_LINES
            );
        }

        #[test]
        fn full_mode_title_uses_line_spacing() {
            // Inner width 6 splits "alpha beta" into two lines.
            let source = Post::new("alpha beta", None);
            let height = compute_height(&source, width(10), true);
            assert_eq!(height.get(), CHROME_VERTICAL_INSET + 3);
        }

        #[test]
        fn non_increasing_in_width() {
            let source = post(LONG_TITLE, LONG_TITLE);
            for mode in [false, true] {
                let narrow = compute_height(&source, width(100), mode);
                let medium = compute_height(&source, width(200), mode);
                let wide = compute_height(&source, width(400), mode);
                assert!(narrow >= medium, "mode={mode}: {narrow} < {medium}");
                assert!(medium >= wide, "mode={mode}: {medium} < {wide}");
            }
        }

        #[test]
        fn narrow_width_grows_multiline_title() {
            let source = Post::new(LONG_TITLE, None);
            let narrow = compute_height(&source, width(30), true);
            let wide = compute_height(&source, width(400), true);
            assert!(narrow > wide);
        }

        #[test]
        fn full_mode_at_least_summary_mode() {
            let source = post(LONG_TITLE, "Body text");
            for w in [10, 40, 100, 400] {
                assert!(
                    compute_height(&source, width(w), true)
                        >= compute_height(&source, width(w), false)
                );
            }
        }

        #[test]
        fn zero_summary_single_line_title_is_mode_insensitive() {
            // Assumes the title fits on one line, so neither the line cap
            // nor full-mode spacing applies.
            let source = post("Hello World", "");
            assert_eq!(
                compute_height(&source, width(320), true),
                compute_height(&source, width(320), false)
            );
        }

        #[test]
        fn works_through_trait_object() {
            let source = post("Dyn", "Body");
            let dynamic: &dyn ContentSource = &source;
            assert_eq!(
                compute_height(dynamic, width(40), true),
                compute_height(&source, width(40), true)
            );
        }

        #[test]
        fn deterministic_same_inputs_same_output() {
            let source = post(LONG_TITLE, LONG_TITLE);
            assert_eq!(
                compute_height(&source, width(57), true),
                compute_height(&source, width(57), true)
            );
        }
    }

    mod stack_layouts_tests {
        use super::*;

        #[test]
        fn empty_list_has_no_layouts() {
            let sources: Vec<Post> = Vec::new();
            assert!(stack_layouts(&sources, width(40), true).is_empty());
        }

        #[test]
        fn offsets_are_cumulative_heights() {
            let sources = vec![
                post("First", "Body"),
                Post::new(LONG_TITLE, None),
                post("Third", ""),
            ];
            let layouts = stack_layouts(&sources, width(30), true);

            assert_eq!(layouts.len(), 3);
            assert_eq!(layouts[0].cumulative_y(), LineOffset::new(0));
            for pair in layouts.windows(2) {
                assert_eq!(pair[1].cumulative_y(), pair[0].bottom_y());
            }
            for (layout, source) in layouts.iter().zip(&sources) {
                assert_eq!(layout.height(), compute_height(source, width(30), true));
            }
        }

        #[test]
        fn bottom_y_is_offset_plus_height() {
            let layouts = stack_layouts(&[post("Only", "")], width(40), false);
            let layout = layouts[0];
            assert_eq!(
                layout.bottom_y().get(),
                layout.cumulative_y().get() + usize::from(layout.height().get())
            );
        }
    }
}
