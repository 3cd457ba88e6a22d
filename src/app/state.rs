// src/app/state.rs
//! Application state definitions

use crate::features::Settings;
use crate::ui::widgets::ProgressIndicator;

/// Main application state
pub struct App {
    /// Core infrastructure (Settings)
    pub core: CoreState,
    /// UI state (Indicator)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

/// UI state
pub struct UiState {
    pub indicator: ProgressIndicator,
}

impl UiState {
    /// Build the indicator as configured
    pub fn new(settings: &Settings) -> Self {
        let config = &settings.indicator;
        let mut indicator = ProgressIndicator::new()
            .spin_period(config.spin_period())
            .transition_duration(config.transition_duration());
        indicator.set_tint_color(config.tint_color());
        indicator.set_progress(config.initial_progress);

        Self { indicator }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Color;

    #[test]
    fn test_ui_state_applies_settings() {
        let settings = Settings::default();
        let ui = UiState::new(&settings);

        assert_eq!(ui.indicator.progress(), 0.12);
        assert_eq!(ui.indicator.tint_color(), Color::from_rgb8(255, 0, 0));
        assert!(!ui.indicator.is_spinning());
    }

    #[test]
    fn test_ui_state_without_tint_is_black() {
        let mut settings = Settings::default();
        settings.indicator.tint = None;
        settings.indicator.initial_progress = 3.5;

        let ui = UiState::new(&settings);
        assert_eq!(ui.indicator.tint_color(), Color::BLACK);
        assert_eq!(ui.indicator.progress(), 0.5);
    }
}
