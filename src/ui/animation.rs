//! Animation system for Pieloader
//!
//! The indicator never owns a timer. It attaches [`PropertyAnimation`]s to an
//! [`AnimationEngine`] and reads back the presented value; [`Timeline`] is the
//! engine driven by iced's frame subscription.
//!
//! # Usage
//!
//! ```rust
//! use crate::ui::animation::{AnimationEngine, AnimationKey, PropertyAnimation, Repeat, Timeline};
//!
//! let mut timeline = Timeline::new();
//! let spin = PropertyAnimation::linear(0.0, 1.0, Duration::from_secs(2)).repeat(Repeat::Forever);
//! timeline.add(AnimationKey::Spin, spin, Instant::now());
//! ```

mod property;
mod timeline;

pub use property::{AnimationEngine, AnimationKey, PropertyAnimation, Repeat};
pub use timeline::Timeline;
