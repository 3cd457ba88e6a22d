// src/app/update/indicator.rs
//! Indicator message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

/// Slack below 1.0 that still counts as a full turn, absorbs float drift
const WRAP_EPSILON: f32 = 1e-4;

/// Next progress after one increment, back to exactly 0 on a full turn
pub fn advance(progress: f32, step: f32) -> f32 {
    let next = progress + step;
    if next >= 1.0 - WRAP_EPSILON { 0.0 } else { next }
}

impl App {
    /// Handle indicator-related messages
    pub fn handle_indicator(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Increment => {
                let indicator = &mut self.ui.indicator;
                let next = advance(
                    indicator.progress(),
                    self.core.settings.indicator.increment_step,
                );
                indicator.set_progress_animated(next, Instant::now());
                Some(Task::none())
            }

            Message::ToggleSpin => {
                let indicator = &mut self.ui.indicator;
                if indicator.is_spinning() {
                    indicator.stop();
                } else {
                    indicator.spin(Instant::now());
                }
                Some(Task::none())
            }

            Message::AnimationTick(now) => {
                self.ui.indicator.tick(*now);
                // The view rebuilt after this update is the refreshed frame
                self.ui.indicator.mark_drawn();
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::ProgressIndicator;

    #[test]
    fn test_advance_steps() {
        assert!((advance(0.12, 0.1) - 0.22).abs() < 1e-6);
        assert_eq!(advance(0.95, 0.1), 0.0);
        assert_eq!(advance(0.9, 0.1), 0.0);
    }

    #[test]
    fn test_ten_increments_wrap_to_zero() {
        let mut indicator = ProgressIndicator::new();
        let now = Instant::now();

        for press in 1..=10 {
            let next = advance(indicator.progress(), 0.1);
            indicator.set_progress_animated(next, now);

            if press < 10 {
                assert!(indicator.progress() > 0.0, "wrapped early at press {}", press);
            }
        }

        assert_eq!(indicator.progress(), 0.0);
    }
}
