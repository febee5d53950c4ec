//! Post Content
//!
//! A content surface for post titles and summaries that can be measured
//! before it exists. The `view_state` layer computes the exact row height a
//! post will occupy at a given width and mode; the `view` layer's
//! `ContentView` renders the same post into exactly that many rows.
//!
//! Pure measurement lives in `view_state`; widgets, styles and chrome
//! constants live in `view`; `config`, `logging` and `source` are the
//! impure shell used by the `post-content` binary.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod tests;
