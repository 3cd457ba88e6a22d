//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI pieces that implement
//! iced's `canvas::Program` trait directly, plus the pure geometry behind them.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own rendering
//!
//! # Contents
//!
//! - [`PieSlice`] - Pie-slice geometry computed from a progress fraction
//! - [`PieLoader`] - Canvas program filling the slice every frame

pub mod pie_loader;
pub mod pie_slice;

pub use pie_loader::{PieLoader, view_pie_loader};
