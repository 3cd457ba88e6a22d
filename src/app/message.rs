//! Application messages

use iced::keyboard::{Key, Modifiers};
use iced::time::Instant;

use crate::features::Action;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Indicator ============
    /// Increment button pressed
    Increment,
    /// Spin / Stop button pressed
    ToggleSpin,
    /// Display refresh from the frame subscription
    AnimationTick(Instant),

    // ============ Keyboard ============
    /// Key pressed
    KeyPressed(Key, Modifiers),
    /// Execute a bound action
    ExecuteAction(Action),

    // ============ Settings ============
    /// Switch between light and dark chrome
    ToggleDarkMode,
}
