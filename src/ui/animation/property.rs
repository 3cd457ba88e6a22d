//! Property animations and the engine seam
//!
//! A [`PropertyAnimation`] describes how a scalar moves over time. An
//! [`AnimationEngine`] owns running animations, advances them on the host's
//! frame clock and reports the value currently on screen.

use std::time::{Duration, Instant};

/// Slot an animation is attached under; adding to an occupied slot replaces it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKey {
    /// Continuous looping sweep
    Spin,
    /// Short transition toward a new resting value
    Transition,
}

/// How many times an animation runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Repeat {
    Once,
    Forever,
}

/// Linear animation of a single scalar
///
/// `to` wins over `by` when both are set; with neither the value holds at `from`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyAnimation {
    pub from: f32,
    pub to: Option<f32>,
    pub by: Option<f32>,
    pub duration: Duration,
    pub repeat: Repeat,
}

impl PropertyAnimation {
    /// One-shot linear animation from `from` to `to`
    pub fn linear(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to: Some(to),
            by: None,
            duration,
            repeat: Repeat::Once,
        }
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Value reached at the end of one cycle
    pub fn end_value(&self) -> f32 {
        match (self.to, self.by) {
            (Some(to), _) => to,
            (None, Some(by)) => self.from + by,
            (None, None) => self.from,
        }
    }

    /// Value after `elapsed`, or `None` once every cycle has finished
    pub fn sample(&self, elapsed: Duration) -> Option<f32> {
        let duration = self.duration.as_secs_f32();
        if duration <= 0.0 {
            return match self.repeat {
                Repeat::Forever => Some(self.from),
                _ => None,
            };
        }

        let cycles = elapsed.as_secs_f32() / duration;
        let fraction = match self.repeat {
            Repeat::Forever => cycles.fract(),
            Repeat::Once if cycles >= 1.0 => return None,
            Repeat::Once => cycles,
        };

        Some(self.from + (self.end_value() - self.from) * fraction)
    }
}

/// Host animation collaborator
///
/// Implementations hold no opinion about what the value means; callers
/// decide how to interpret the presented scalar.
pub trait AnimationEngine {
    /// Attach `animation` under `key`, starting at `now`
    fn add(&mut self, key: AnimationKey, animation: PropertyAnimation, now: Instant);

    /// Detach whatever runs under `key`
    fn remove(&mut self, key: AnimationKey);

    /// Value currently on screen, `None` when nothing is in flight
    fn presented(&self) -> Option<f32>;

    /// Advance to the host frame at `now`
    fn tick(&mut self, now: Instant);

    fn is_animating(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_sample() {
        let anim = PropertyAnimation::linear(0.0, 1.0, Duration::from_secs(2));

        assert_eq!(anim.sample(Duration::ZERO), Some(0.0));
        assert_eq!(anim.sample(Duration::from_millis(500)), Some(0.25));
        assert_eq!(anim.sample(Duration::from_secs(1)), Some(0.5));
        assert_eq!(anim.sample(Duration::from_secs(2)), None);
    }

    #[test]
    fn test_forever_wraps_each_cycle() {
        let anim =
            PropertyAnimation::linear(0.0, 1.0, Duration::from_secs(2)).repeat(Repeat::Forever);

        assert_eq!(anim.sample(Duration::from_secs(3)), Some(0.5));
        assert_eq!(anim.sample(Duration::from_secs(200)), Some(0.0));
        assert!(anim.sample(Duration::from_secs(1_000_000)).is_some());
    }

    #[test]
    fn test_to_wins_over_by() {
        let mut anim = PropertyAnimation {
            from: 0.2,
            to: None,
            by: Some(0.01),
            duration: Duration::from_millis(250),
            repeat: Repeat::Once,
        };
        assert!((anim.end_value() - 0.21).abs() < 1e-6);

        anim.to = Some(1.0);
        assert_eq!(anim.end_value(), 1.0);
    }

    #[test]
    fn test_zero_duration() {
        let once = PropertyAnimation::linear(0.3, 1.0, Duration::ZERO);
        assert_eq!(once.sample(Duration::ZERO), None);

        let forever = once.repeat(Repeat::Forever);
        assert_eq!(forever.sample(Duration::from_secs(5)), Some(0.3));
    }
}
