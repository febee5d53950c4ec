//! Internal test modules - whitebox tests with crate access
//!
//! Rendering snapshots live here because they drive `ContentView` through a
//! ratatui `TestBackend` and compare against exact cell output.
