//! Theme system for the demo window
//! Light chrome by default, with a dark variant

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_MUTED: Color = color!(0x888888);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
    pub const TEXT_MUTED: Color = color!(0x777777);
}

/// Backdrop behind the slice and the buttons
pub const PANEL: Color = color!(0x555555);

/// Hover state for panel-colored buttons
pub const PANEL_HOVER: Color = color!(0x666666);

/// Pressed state for panel-colored buttons
pub const PANEL_PRESSED: Color = color!(0x444444);

/// Corner radius of the indicator backdrop
pub const PANEL_RADIUS: f32 = 10.0;

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main window content
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Rounded backdrop behind the indicator
pub fn indicator_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PANEL)),
        border: Border {
            radius: PANEL_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Flat panel-colored button
pub fn panel_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(PANEL)),
        text_color: Color::WHITE,
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(PANEL_HOVER)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(PANEL_PRESSED)),
            ..base
        },
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_follows_theme() {
        assert_eq!(background(&Theme::Light), light::BACKGROUND);
        assert_eq!(background(&Theme::Dark), dark::BACKGROUND);
    }

    #[test]
    fn test_hovered_button_is_lighter() {
        let idle = panel_button(&Theme::Light, button::Status::Active);
        let hovered = panel_button(&Theme::Light, button::Status::Hovered);

        assert_eq!(idle.background, Some(Background::Color(PANEL)));
        assert_eq!(hovered.background, Some(Background::Color(PANEL_HOVER)));
        assert_eq!(hovered.text_color, Color::WHITE);
    }
}
