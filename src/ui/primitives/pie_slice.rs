//! Pie-slice geometry for the loading indicator
//!
//! Maps a progress fraction and a bounding box to the path commands of a
//! filled slice. The computation is pure; [`PieSlice::fill`] replays the
//! commands into an iced canvas frame.
//!
//! # Layout
//!
//! - Center of the bounding box
//! - Radius of 90% of half the width
//! - Starts at 12 o'clock and sweeps clockwise through `progress * 360°`

use std::f32::consts::{FRAC_PI_2, TAU};

use iced::widget::canvas::{Frame, Path, path::Arc};
use iced::{Color, Point, Radians, Size};

/// Share of the half-width used as radius
const INSET: f32 = 0.9;

/// 12 o'clock in screen coordinates (y grows downward)
pub const START_ANGLE: f32 = -FRAC_PI_2;

/// One step of the slice outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc, positive sweep is clockwise on screen
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Close,
}

/// A filled pie slice ready to be drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    /// Swept angle in radians (0.0 - TAU)
    pub sweep: f32,
    pub fill: Color,
}

impl PieSlice {
    /// Build the slice for `progress` inside a box of `size`
    pub fn new(progress: f32, fill: Color, size: Size) -> Self {
        Self {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            radius: size.width * INSET / 2.0,
            start_angle: START_ANGLE,
            sweep: progress.clamp(0.0, 1.0) * TAU,
            fill,
        }
    }

    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep
    }

    /// Point on the rim at `angle`
    pub fn point_at(&self, angle: f32) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Area covered by the slice
    pub fn area(&self) -> f32 {
        0.5 * self.radius * self.radius * self.sweep
    }

    /// A zero sweep collapses to the center, nothing gets filled
    pub fn is_degenerate(&self) -> bool {
        self.area() <= 0.0
    }

    /// Outline as center -> rim -> arc -> center
    pub fn commands(&self) -> [PathCommand; 4] {
        [
            PathCommand::MoveTo(self.center),
            PathCommand::LineTo(self.point_at(self.start_angle)),
            PathCommand::Arc {
                center: self.center,
                radius: self.radius,
                start_angle: self.start_angle,
                end_angle: self.end_angle(),
            },
            PathCommand::Close,
        ]
    }

    /// Convert the outline into a canvas path
    pub fn to_path(&self) -> Path {
        Path::new(|builder| {
            for command in self.commands() {
                match command {
                    PathCommand::MoveTo(point) => builder.move_to(point),
                    PathCommand::LineTo(point) => builder.line_to(point),
                    PathCommand::Arc {
                        center,
                        radius,
                        start_angle,
                        end_angle,
                    } => builder.arc(Arc {
                        center,
                        radius,
                        start_angle: Radians(start_angle),
                        end_angle: Radians(end_angle),
                    }),
                    PathCommand::Close => builder.close(),
                }
            }
        })
    }

    /// Fill the slice into `frame`
    pub fn fill(&self, frame: &mut Frame) {
        if self.is_degenerate() {
            return;
        }
        frame.fill(&self.to_path(), self.fill);
    }
}

/// Compute the slice for a progress value and drawing surface
pub fn render(progress: f32, fill: Color, width: f32, height: f32) -> PieSlice {
    PieSlice::new(progress, fill, Size::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_zero_progress_is_degenerate() {
        let slice = render(0.0, Color::BLACK, 300.0, 300.0);

        assert!(slice.is_degenerate());
        assert_eq!(slice.area(), 0.0);
        assert_eq!(slice.start_angle, slice.end_angle());
    }

    #[test]
    fn test_geometry_follows_bounds() {
        let slice = render(0.5, Color::BLACK, 300.0, 200.0);

        assert_eq!(slice.center, Point::new(150.0, 100.0));
        assert!((slice.radius - 135.0).abs() < EPS);
    }

    #[test]
    fn test_quarter_sweeps_ninety_degrees_from_top() {
        let slice = render(0.25, Color::BLACK, 300.0, 300.0);

        assert!((slice.sweep - FRAC_PI_2).abs() < EPS);
        // 12 o'clock
        assert!(close(
            slice.point_at(slice.start_angle),
            Point::new(150.0, 15.0)
        ));
        // 3 o'clock, clockwise on screen
        assert!(close(
            slice.point_at(slice.end_angle()),
            Point::new(285.0, 150.0)
        ));
    }

    #[test]
    fn test_near_full_progress_approaches_circle() {
        let slice = render(0.9999, Color::BLACK, 300.0, 300.0);
        let circle = std::f32::consts::PI * slice.radius * slice.radius;

        assert!(!slice.is_degenerate());
        assert!(slice.sweep < TAU);
        assert!((circle - slice.area()) / circle < 1e-3);
    }

    #[test]
    fn test_commands_form_closed_slice() {
        let slice = render(0.4, Color::from_rgb(1.0, 0.0, 0.0), 300.0, 300.0);
        let commands = slice.commands();

        assert_eq!(commands[0], PathCommand::MoveTo(slice.center));
        assert_eq!(
            commands[1],
            PathCommand::LineTo(slice.point_at(START_ANGLE))
        );
        assert_eq!(commands[3], PathCommand::Close);
        match commands[2] {
            PathCommand::Arc {
                start_angle,
                end_angle,
                ..
            } => {
                assert_eq!(start_angle, START_ANGLE);
                assert!((end_angle - start_angle - 0.4 * TAU).abs() < EPS);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let color = Color::from_rgb(1.0, 0.0, 0.0);
        let first = render(0.37, color, 300.0, 300.0);
        let second = render(0.37, color, 300.0, 300.0);

        assert_eq!(first, second);
        assert_eq!(first.commands(), second.commands());
    }
}
