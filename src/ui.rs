//! UI module for the loading indicator demo
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Primitives** (`primitives`): Pie-slice geometry and the canvas program
//! - **Animation** (`animation`): Property animations and the frame-driven engine
//! - **Widgets** (`widgets`): The progress indicator state machine

pub mod animation;
pub mod primitives;
pub mod theme;
pub mod widgets;
