//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::ui::widgets::SpinState;

pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = crate::features::Settings::load();
        let ui = UiState::new(&settings);
        let core = CoreState::new(settings);

        tracing::info!(
            "Indicator ready at {:.2}, spin period {:?}",
            ui.indicator.progress(),
            core.settings.indicator.spin_period()
        );

        (Self { core, ui }, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title reflecting the spin state
    pub fn title(&self) -> String {
        match self.ui.indicator.state() {
            SpinState::Spinning => "Pieloader - Spinning".to_string(),
            SpinState::Idle => "Pieloader".to_string(),
        }
    }

    /// Subscriptions for keyboard events and display refresh
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 2. Display refresh (vsync rate) while the indicator changes
        let indicator = &self.ui.indicator;
        let animation_sub = if subscription_logic::needs_frames(
            indicator.is_animating(),
            indicator.needs_redraw(),
        ) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([keyboard_sub, animation_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames are needed while animating or until a requested redraw lands
    pub fn needs_frames(is_animating: bool, needs_redraw: bool) -> bool {
        is_animating || needs_redraw
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;
    use crate::ui::widgets::ProgressIndicator;
    use iced::time::{Duration, Instant};

    #[test]
    fn idle_and_drawn_needs_no_frames() {
        assert!(!needs_frames(false, false));
    }

    #[test]
    fn pending_redraw_needs_frames() {
        assert!(needs_frames(false, true));
        assert!(needs_frames(true, false));
    }

    #[test]
    fn spinning_indicator_keeps_frames_until_stopped() {
        let start = Instant::now();
        let mut indicator = ProgressIndicator::new();
        indicator.mark_drawn();

        indicator.spin(start);
        indicator.tick(start + Duration::from_millis(16));
        indicator.mark_drawn();
        assert!(needs_frames(
            indicator.is_animating(),
            indicator.needs_redraw()
        ));

        indicator.stop();
        indicator.mark_drawn();
        assert!(!needs_frames(
            indicator.is_animating(),
            indicator.needs_redraw()
        ));
    }
}
