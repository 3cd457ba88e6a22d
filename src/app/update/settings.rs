//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode => {
                let display_settings = &mut self.core.settings.display;
                display_settings.dark_mode = !display_settings.dark_mode;
                tracing::info!("Dark mode: {}", display_settings.dark_mode);

                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
