//! View-state layer - measurement and layout
//!
//! Pure, stateless computation of how tall post content will be. Nothing in
//! this layer constructs a live view.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (LayoutWidth, MeasuredHeight, LineOffset)
//! - `text_layout`: Wrapping, measuring and laying out styled text
//! - `layout`: `compute_height` and stacked list layout

pub mod layout;
pub mod text_layout;
pub mod types;

pub use layout::{compute_height, stack_layouts, ContentTexts, PostLayout};
pub use types::{LayoutWidth, LineOffset, MeasuredHeight};
