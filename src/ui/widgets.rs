//! Reusable UI widgets - composable patterns without business logic
//!
//! Widgets own their display state and build elements from primitives.
//! They don't import from `crate::app`.

pub mod progress_indicator;

pub use progress_indicator::{ProgressIndicator, SpinState};
