//! Pie loading indicator primitive
//!
//! Canvas program that redraws the whole slice on every frame.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{Color, Element, Rectangle, Renderer, Theme, mouse};

use super::pie_slice;

/// Snapshot of what the indicator shows this frame
#[derive(Debug, Clone, Copy)]
pub struct PieLoader {
    /// Presented progress (0.0 - 1.0)
    pub progress: f32,
    /// Slice fill color
    pub tint: Color,
}

impl PieLoader {
    pub fn new(progress: f32, tint: Color) -> Self {
        Self { progress, tint }
    }
}

impl<Message> Program<Message> for PieLoader {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        pie_slice::render(self.progress, self.tint, bounds.width, bounds.height).fill(&mut frame);

        vec![frame.into_geometry()]
    }
}

/// Create a square pie loader element
pub fn view_pie_loader<'a, Message: 'a>(loader: PieLoader, size: f32) -> Element<'a, Message> {
    Canvas::new(loader).width(size).height(size).into()
}
