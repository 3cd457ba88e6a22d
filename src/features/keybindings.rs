//! Customizable keyboard shortcuts
//!
//! Maps key presses to the demo's actions. Bindings are stored with the
//! settings and can be edited in the JSON file.

use std::collections::HashMap;

use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Increment,
    ToggleSpin,
    ToggleTheme,
}

impl Action {
    /// Get all available actions
    pub fn all() -> &'static [Action] {
        &[Action::Increment, Action::ToggleSpin, Action::ToggleTheme]
    }

    /// Get human-readable name for the action
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::Increment => "Increment",
            Action::ToggleSpin => "Spin / Stop",
            Action::ToggleTheme => "Toggle theme",
        }
    }
}

/// A keyboard shortcut consisting of modifiers and a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Modifier keys (Ctrl, Alt, Shift)
    #[serde(default)]
    pub modifiers: ModifierSet,
    /// The main key
    pub key: KeyCode,
}

impl KeyBinding {
    /// Create a new keybinding
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }

    /// Format as human-readable string
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }

        parts.push(self.key.display());
        parts.join("+")
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    /// Check if modifiers match
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Supported key codes for binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    /// Single character key, compared case-insensitively
    Char(char),
    Space,
    Enter,
    Up,
    Down,
    Left,
    Right,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        match key {
            Key::Character(c) => match self {
                KeyCode::Char(expected) => {
                    c.to_lowercase() == expected.to_lowercase().collect::<String>()
                }
                _ => false,
            },
            Key::Named(named) => {
                use iced::keyboard::key::Named;
                matches!(
                    (self, named),
                    (KeyCode::Space, Named::Space)
                        | (KeyCode::Enter, Named::Enter)
                        | (KeyCode::Up, Named::ArrowUp)
                        | (KeyCode::Down, Named::ArrowDown)
                        | (KeyCode::Left, Named::ArrowLeft)
                        | (KeyCode::Right, Named::ArrowRight)
                )
            }
            Key::Unidentified => false,
        }
    }

    /// Get display name for the key
    pub fn display(&self) -> String {
        match self {
            KeyCode::Char(c) => c.to_uppercase().collect(),
            KeyCode::Space => "Space".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
        }
    }
}

/// The keybindings configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Map from action to keybinding
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::Increment,
            vec![
                KeyBinding::new(KeyCode::Right),
                KeyBinding::new(KeyCode::Up),
            ],
        );
        bindings.insert(
            Action::ToggleSpin,
            vec![
                KeyBinding::new(KeyCode::Space),
                KeyBinding::new(KeyCode::Char('s')),
            ],
        );
        bindings.insert(
            Action::ToggleTheme,
            vec![KeyBinding::new(KeyCode::Char('t'))],
        );

        Self { bindings }
    }
}

impl KeyBindings {
    /// Get the keybindings for an action
    pub fn get(&self, action: &Action) -> Option<&Vec<KeyBinding>> {
        self.bindings.get(action)
    }

    /// Short "key: action" label using the first binding of `action`
    pub fn hint(&self, action: Action) -> Option<String> {
        self.get(&action)
            .and_then(|list| list.first())
            .map(|binding| format!("{}: {}", binding.display(), action.display_name()))
    }

    /// Find the action bound to a key press
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        Action::all().iter().copied().find(|action| {
            self.bindings
                .get(action)
                .is_some_and(|list| list.iter().any(|b| b.matches(key, modifiers)))
        })
    }
}
