//! Pie progress indicator
//!
//! Owns the resting progress, the tint and the spin state. Animation is
//! delegated to an [`AnimationEngine`]; the indicator only attaches and
//! detaches animations and reads back what is presented.
//!
//! # State machine
//!
//! - `Idle` --`spin()`--> `Spinning`: loop attached
//! - `Spinning` --`stop()`--> `Idle`: presented value committed, loop detached

use std::time::{Duration, Instant};

use iced::{Color, Element};

use crate::ui::animation::{AnimationEngine, AnimationKey, PropertyAnimation, Repeat, Timeline};
use crate::ui::primitives::{PieLoader, view_pie_loader};

/// Time for one full revolution while spinning
pub const DEFAULT_SPIN_PERIOD: Duration = Duration::from_secs(2);

/// Length of the transition synthesized by animated updates
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(250);

/// Wrap a raw value into [0, 1), flooring negatives to 0
pub fn normalize(value: f32) -> f32 {
    let wrapped = value.max(0.0) % 1.0;
    if wrapped.is_finite() { wrapped } else { 0.0 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinState {
    Idle,
    Spinning,
}

/// Circular loading indicator state
#[derive(Debug)]
pub struct ProgressIndicator<E: AnimationEngine = Timeline> {
    /// Committed progress, always in [0, 1)
    resting: f32,
    tint: Color,
    spinning: bool,
    /// Set on every visible change, cleared by the host after drawing
    dirty: bool,
    spin_period: Duration,
    transition: Duration,
    engine: E,
}

impl ProgressIndicator<Timeline> {
    pub fn new() -> Self {
        Self::with_engine(Timeline::new())
    }
}

impl Default for ProgressIndicator<Timeline> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AnimationEngine> ProgressIndicator<E> {
    /// Create an idle indicator on top of `engine`
    pub fn with_engine(engine: E) -> Self {
        Self {
            resting: 0.0,
            tint: Color::BLACK,
            spinning: false,
            dirty: true,
            spin_period: DEFAULT_SPIN_PERIOD,
            transition: DEFAULT_TRANSITION,
            engine,
        }
    }

    pub fn spin_period(mut self, period: Duration) -> Self {
        self.spin_period = period;
        self
    }

    pub fn transition_duration(mut self, duration: Duration) -> Self {
        self.transition = duration;
        self
    }

    /// Resting progress, ignoring any animation in flight
    pub fn progress(&self) -> f32 {
        self.resting
    }

    /// Value currently on screen
    pub fn presented(&self) -> f32 {
        self.engine.presented().unwrap_or(self.resting)
    }

    /// Store a new resting progress without animating
    pub fn set_progress(&mut self, value: f32) {
        self.resting = normalize(value);
        self.dirty = true;
        tracing::debug!("Progress set to {:.3}", self.resting);
    }

    /// Store a new resting progress and sweep toward it from what is on screen
    ///
    /// The sweep always moves clockwise, so a smaller target passes through 12 o'clock.
    pub fn set_progress_animated(&mut self, value: f32, now: Instant) {
        let from = self.presented();
        self.set_progress(value);

        let mut to = self.resting;
        if to < from {
            to += 1.0;
        }
        self.engine.add(
            AnimationKey::Transition,
            PropertyAnimation::linear(from, to, self.transition),
            now,
        );
    }

    pub fn tint_color(&self) -> Color {
        self.tint
    }

    /// Set the fill color, black when `None`
    pub fn set_tint_color(&mut self, color: Option<Color>) {
        self.tint = color.unwrap_or(Color::BLACK);
        self.dirty = true;
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn state(&self) -> SpinState {
        if self.spinning {
            SpinState::Spinning
        } else {
            SpinState::Idle
        }
    }

    /// Start the endless sweep; ignored while already spinning
    pub fn spin(&mut self, now: Instant) {
        if self.spinning {
            return;
        }

        let sweep = PropertyAnimation::linear(0.0, 1.0, self.spin_period).repeat(Repeat::Forever);
        self.engine.add(AnimationKey::Spin, sweep, now);
        self.spinning = true;
        self.dirty = true;
        tracing::info!("Spinning every {:?}", self.spin_period);
    }

    /// Freeze at the presented value and detach the sweep; no-op when idle
    pub fn stop(&mut self) {
        if !self.spinning {
            return;
        }

        if let Some(current) = self.engine.presented() {
            self.resting = normalize(current);
        }
        self.engine.remove(AnimationKey::Spin);
        self.engine.remove(AnimationKey::Transition);
        self.spinning = false;
        self.dirty = true;
        tracing::info!("Stopped at {:.3}", self.resting);
    }

    /// Forward a host frame to the engine
    pub fn tick(&mut self, now: Instant) {
        if self.engine.is_animating() {
            self.engine.tick(now);
            self.dirty = true;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.engine.is_animating()
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Called by the host once the frame reflecting the current state is drawn
    pub fn mark_drawn(&mut self) {
        self.dirty = false;
    }

    /// Canvas snapshot of the presented state
    pub fn loader(&self) -> PieLoader {
        PieLoader::new(self.presented(), self.tint_color())
    }

    pub fn view<'a, Message: 'a>(&self, size: f32) -> Element<'a, Message> {
        view_pie_loader(self.loader(), size)
    }
}
