//! Live content view: one on-screen post.
//!
//! The view derives its widths and styled text through the same functions as
//! [`compute_height`](crate::view_state::layout::compute_height), so a
//! configured view's [`natural_height`](ContentView::natural_height) equals
//! the height measured for it ahead of time.

use crate::model::{ContentError, ContentSource};
use crate::view::constants::{CHROME_VERTICAL_INSET, TEXT_HORIZONTAL_PADDING, TITLE_SUMMARY_SPACING};
use crate::view_state::layout::ContentTexts;
use crate::view_state::text_layout;
use crate::view_state::types::{LayoutWidth, MeasuredHeight};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Padding, Paragraph, Widget},
};
use tracing::debug;

/// A post rendered inside a bordered block.
///
/// # Lifecycle
/// - Constructed with a frame and a content mode.
/// - [`configure`](Self::configure) stores a source and width, rebuilds the
///   styled text, and runs a layout pass. Repeating the same configuration
///   is a no-op.
/// - [`reconfigure`](Self::reconfigure) is the only way to switch modes.
///
/// The view owns its source. It is configured through `&mut self` by a
/// single owner; there is no internal locking.
#[derive(Debug, Clone)]
pub struct ContentView<S> {
    frame: Rect,
    width: LayoutWidth,
    show_full_content: bool,
    source: Option<S>,
    title_rows: Vec<Line<'static>>,
    summary_rows: Vec<Line<'static>>,
    layout_passes: u64,
}

impl<S: ContentSource + PartialEq> ContentView<S> {
    /// Create an unconfigured view.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::InvalidWidth` if `frame.width` is narrower than
    /// the chrome allows, under the same rule `LayoutWidth::new` applies.
    pub fn new(frame: Rect, show_full_content: bool) -> Result<Self, ContentError> {
        let width = LayoutWidth::new(frame.width)?;
        let mut view = Self {
            frame,
            width,
            show_full_content,
            source: None,
            title_rows: Vec::new(),
            summary_rows: Vec::new(),
            layout_passes: 0,
        };
        view.frame.height = view.natural_height().get();
        Ok(view)
    }

    /// Display `source` at `width`.
    ///
    /// Sets the frame width, rebuilds the title and summary text, and runs a
    /// layout pass. Calling again with an equal source and width changes
    /// nothing.
    pub fn configure(&mut self, source: S, width: LayoutWidth) {
        if self.width == width && self.source.as_ref() == Some(&source) {
            return;
        }
        self.source = Some(source);
        self.width = width;
        self.frame.width = width.get();
        self.layout_pass();
    }

    /// Switch content mode and lay out the stored source again.
    ///
    /// After this returns, `natural_height` equals `compute_height` for the
    /// new mode. Switching to the current mode is a no-op.
    pub fn reconfigure(&mut self, show_full_content: bool) {
        if self.show_full_content == show_full_content {
            return;
        }
        self.show_full_content = show_full_content;
        self.layout_pass();
    }

    fn layout_pass(&mut self) {
        let inner = self.inner_content_width();
        match &self.source {
            Some(source) => {
                let texts = ContentTexts::build(source, self.width, self.show_full_content);
                self.title_rows = text_layout::layout(texts.title(), inner);
                self.summary_rows = texts
                    .summary()
                    .map(|summary| text_layout::layout(summary, inner))
                    .unwrap_or_default();
            }
            None => {
                self.title_rows.clear();
                self.summary_rows.clear();
            }
        }
        self.frame.height = self.natural_height().get();
        self.layout_passes += 1;

        debug!(
            width = self.width.get(),
            show_full_content = self.show_full_content,
            height = self.frame.height,
            passes = self.layout_passes,
            "Content view layout pass"
        );
    }
}

impl<S> ContentView<S> {
    /// Frame width minus the border columns.
    pub fn content_width(&self) -> u16 {
        self.width.content_width()
    }

    /// Content width minus text padding; the width text wraps at.
    pub fn inner_content_width(&self) -> u16 {
        self.width.inner_content_width()
    }

    /// Rows the configured content occupies, borders included.
    pub fn natural_height(&self) -> MeasuredHeight {
        let rows = self.title_rows.len() + self.spacing_rows() + self.summary_rows.len();
        MeasuredHeight::new(CHROME_VERTICAL_INSET)
            .saturating_add(u16::try_from(rows).unwrap_or(u16::MAX))
    }

    /// Current frame. Height tracks `natural_height` after each layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Content mode fixed at construction or by the last `reconfigure`.
    pub fn show_full_content(&self) -> bool {
        self.show_full_content
    }

    /// The configured source, if any.
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Number of layout passes run so far.
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    fn spacing_rows(&self) -> usize {
        if self.summary_rows.is_empty() {
            0
        } else {
            usize::from(TITLE_SUMMARY_SPACING)
        }
    }

    /// Text rows inside the chrome: title, spacing, summary.
    fn content_rows(&self) -> Vec<Line<'static>> {
        let mut rows = Vec::with_capacity(
            self.title_rows.len() + self.spacing_rows() + self.summary_rows.len(),
        );
        rows.extend(self.title_rows.iter().cloned());
        rows.extend(std::iter::repeat_with(Line::default).take(self.spacing_rows()));
        rows.extend(self.summary_rows.iter().cloned());
        rows
    }
}

/// Draws at the configured frame width and natural height, clipped to
/// `area`. A wider area is left blank to the right; a narrower one clips the
/// already-wrapped text instead of re-wrapping it.
impl<S> Widget for &ContentView<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < self.frame.width {
            debug!(
                configured = self.frame.width,
                available = area.width,
                "Content view clipped to a narrower area"
            );
        }
        let block_area = Rect {
            width: self.frame.width.min(area.width),
            height: self.natural_height().get().min(area.height),
            ..area
        };

        let block = Block::bordered().padding(Padding::horizontal(TEXT_HORIZONTAL_PADDING / 2));
        let inner = block.inner(block_area);
        block.render(block_area, buf);

        Paragraph::new(self.content_rows()).render(inner, buf);
    }
}
