// src/app/view.rs
//! Application view rendering

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Fill, Theme};

use super::App;
use super::message::Message;
use crate::features::Action;
use crate::ui::theme;

impl App {
    /// Build the demo window: indicator, percentage, Increment and Spin buttons
    pub fn view(&self) -> Element<'_, Message> {
        let size = self.core.settings.display.indicator_size;
        let indicator = &self.ui.indicator;

        let panel = container(indicator.view(size)).style(theme::indicator_panel);

        let percentage = text(format!("{:.0}%", indicator.presented() * 100.0))
            .size(14)
            .style(|theme: &Theme| text::Style {
                color: Some(theme::text_muted(theme)),
            });

        let increment = button(text("Increment").width(Fill).center())
            .width(size)
            .padding(10)
            .style(theme::panel_button)
            .on_press(Message::Increment);

        let spin_label = if indicator.is_spinning() { "Stop" } else { "Spin" };
        let spin = button(text(spin_label).width(Fill).center())
            .width(size)
            .padding(10)
            .style(theme::panel_button)
            .on_press(Message::ToggleSpin);

        let shortcuts = Action::all()
            .iter()
            .filter_map(|action| self.core.settings.keybindings.hint(*action))
            .collect::<Vec<_>>()
            .join("   ");
        let hints = text(shortcuts).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

        let content = column![panel, percentage, increment, spin, hints]
            .spacing(8)
            .align_x(Alignment::Center);

        container(content)
            .center(Fill)
            .style(theme::main_content)
            .into()
    }
}
