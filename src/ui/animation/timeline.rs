//! Frame-driven animation engine
//!
//! Loops are sampled from the time elapsed since they were attached.
//! One-shot transitions run on `iced_anim` with a linear curve.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

use super::property::{AnimationEngine, AnimationKey, PropertyAnimation};

/// Attached loop plus the instant it started
#[derive(Debug, Clone, Copy)]
struct Running {
    animation: PropertyAnimation,
    started: Instant,
}

impl Running {
    fn sample(&self, now: Instant) -> Option<f32> {
        self.animation
            .sample(now.saturating_duration_since(self.started))
    }
}

/// Animation engine advanced by the host's frame subscription
///
/// Presented values are wrapped into [0, 1).
#[derive(Debug, Default)]
pub struct Timeline {
    /// Instant of the last frame seen
    now: Option<Instant>,
    spin: Option<Running>,
    transition: Option<Animated<f32>>,
}

fn linear(duration: Duration) -> Easing {
    Easing::LINEAR.with_duration(duration)
}

fn wrap(value: f32) -> f32 {
    value.rem_euclid(1.0)
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnimationEngine for Timeline {
    fn add(&mut self, key: AnimationKey, animation: PropertyAnimation, now: Instant) {
        self.now = Some(now);
        match key {
            AnimationKey::Spin => {
                self.spin = Some(Running {
                    animation,
                    started: now,
                });
            }
            AnimationKey::Transition => {
                let mut transition = Animated::transition(animation.from, linear(animation.duration));
                transition.update(animation.end_value().into());
                self.transition = Some(transition);
            }
        }
    }

    fn remove(&mut self, key: AnimationKey) {
        match key {
            AnimationKey::Spin => self.spin = None,
            AnimationKey::Transition => self.transition = None,
        }
    }

    fn presented(&self) -> Option<f32> {
        // A running loop hides any transition underneath it
        if let (Some(spin), Some(now)) = (&self.spin, self.now) {
            if let Some(value) = spin.sample(now) {
                return Some(wrap(value));
            }
        }

        self.transition
            .as_ref()
            .map(|transition| wrap(*transition.value()))
    }

    fn tick(&mut self, now: Instant) {
        self.now = Some(now);

        if self.spin.is_some_and(|spin| spin.sample(now).is_none()) {
            self.spin = None;
        }

        if let Some(transition) = &mut self.transition {
            transition.tick(now);
            if !transition.is_animating() {
                self.transition = None;
            }
        }
    }

    fn is_animating(&self) -> bool {
        self.spin.is_some() || self.transition.is_some()
    }
}

#[cfg(test)]
impl Timeline {
    fn contains(&self, key: AnimationKey) -> bool {
        match key {
            AnimationKey::Spin => self.spin.is_some(),
            AnimationKey::Transition => self.transition.is_some(),
        }
    }
}
