//! Rendering layer: styling rules, the live content view, and list output.
//!
//! `render_window` is the two-phase contract in action: every post is
//! measured with `compute_height`, and only the posts that intersect the
//! requested window are turned into live [`ContentView`]s.

pub mod constants;
pub mod content_view;
pub mod styles;

pub use content_view::ContentView;
pub use styles::{summary_text, title_text, StyledText, TextProfile};

use crate::model::{ContentError, ContentSource};
use crate::view_state::layout::stack_layouts;
use crate::view_state::types::{LayoutWidth, LineOffset};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tracing::{debug, warn};
use unicode_width::UnicodeWidthStr;

/// Rows of a stacked post list to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First list row shown.
    pub top: LineOffset,
    /// Number of rows shown.
    pub height: u16,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(top: LineOffset, height: u16) -> Self {
        Self { top, height }
    }
}

/// Render the part of a stacked post list that falls inside `viewport`.
///
/// Heights come from pre-measurement; a live view is built only for posts
/// that intersect the window. Posts cut by the window edges are drawn into
/// a scratch buffer and the visible rows copied across.
///
/// # Errors
///
/// Returns `ContentError::InvalidWidth` only if a view rejects `width`,
/// which `LayoutWidth` already rules out.
pub fn render_window<S>(
    sources: &[S],
    width: LayoutWidth,
    show_full_content: bool,
    viewport: Viewport,
) -> Result<Buffer, ContentError>
where
    S: ContentSource + PartialEq + Clone,
{
    let layouts = stack_layouts(sources, width, show_full_content);
    let mut out = Buffer::empty(Rect::new(0, 0, width.get(), viewport.height));

    let window_top = viewport.top.get();
    let window_bottom = window_top.saturating_add(usize::from(viewport.height));
    let mut instantiated = 0usize;

    for (source, layout) in sources.iter().zip(&layouts) {
        let post_top = layout.cumulative_y().get();
        let post_bottom = layout.bottom_y().get();
        if post_bottom <= window_top || post_top >= window_bottom {
            continue;
        }

        let height = layout.height().get();
        let mut view = ContentView::new(Rect::new(0, 0, width.get(), height), show_full_content)?;
        view.configure(source.clone(), width);
        instantiated += 1;

        if view.natural_height() != layout.height() {
            warn!(
                measured = layout.height().get(),
                natural = view.natural_height().get(),
                "Live view height diverged from pre-measured height"
            );
        }

        let mut scratch = Buffer::empty(Rect::new(0, 0, width.get(), height));
        view.render(scratch.area, &mut scratch);

        let first = post_top.max(window_top);
        let last = post_bottom.min(window_bottom);
        for row in first..last {
            // Both differences fit in u16: rows lie within the post and the window.
            let src_y = (row - post_top) as u16;
            let dst_y = (row - window_top) as u16;
            for x in 0..width.get() {
                out[(x, dst_y)] = scratch[(x, src_y)].clone();
            }
        }
    }

    debug!(
        posts = sources.len(),
        instantiated,
        top = window_top,
        rows = viewport.height,
        "Rendered post window"
    );

    Ok(out)
}

/// Total rows of a stacked list.
///
/// May exceed what a single [`Viewport`] can show; callers window it.
pub fn total_rows<S: ContentSource>(
    sources: &[S],
    width: LayoutWidth,
    show_full_content: bool,
) -> usize {
    stack_layouts(sources, width, show_full_content)
        .last()
        .map(|layout| layout.bottom_y().get())
        .unwrap_or(0)
}

/// Convert a buffer into plain text lines with trailing spaces removed.
///
/// Continuation cells of wide characters are skipped so each line reads as
/// it appears on screen.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area();
    let mut lines = Vec::with_capacity(usize::from(area.height));

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut skip = 0usize;
        for x in area.left()..area.right() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buffer[(x, y)].symbol();
            line.push_str(symbol);
            skip = symbol.width().saturating_sub(1);
        }
        lines.push(line.trim_end().to_string());
    }

    lines
}
