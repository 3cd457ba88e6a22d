//! Application settings persistence
//!
//! Handles saving and loading user preferences. Progress itself is never
//! persisted; only how the indicator starts and behaves.

use std::path::{Path, PathBuf};
use std::time::Duration;

use iced::Color;
use serde::{Deserialize, Serialize};

use super::KeyBindings;

const DEFAULT_SPIN_PERIOD: Duration = Duration::from_secs(2);

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Indicator appearance and timing
    #[serde(default)]
    pub indicator: IndicatorSettings,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Custom keybindings
    #[serde(default)]
    pub keybindings: KeyBindings,
}

/// Indicator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    /// Fill color as `#rrggbb`, black when absent
    pub tint: Option<HexColor>,
    /// Progress shown at startup
    pub initial_progress: f32,
    /// Amount added by one increment
    pub increment_step: f32,
    /// Seconds per revolution while spinning
    pub spin_period_secs: f32,
    /// Length of the increment transition in milliseconds
    pub transition_ms: u64,
}

/// Display-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark window chrome
    pub dark_mode: bool,
    /// Edge length of the indicator in logical pixels
    pub indicator_size: f32,
}

/// RGB color stored as a `#rrggbb` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    pub fn to_color(self) -> Color {
        let [r, g, b] = self.0;
        Color::from_rgb8(r, g, b)
    }
}

impl std::str::FromStr for HexColor {
    type Err = String;

    /// Accepts `#rrggbb` with the leading `#` optional
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("expected #rrggbb, got {:?}", s));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| format!("invalid hex color {:?}", s))
        };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        let [r, g, b] = color.0;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            tint: Some(HexColor([0xff, 0x00, 0x00])),
            initial_progress: 0.12,
            increment_step: 0.1,
            spin_period_secs: 2.0,
            transition_ms: 250,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            indicator_size: 300.0,
        }
    }
}

impl IndicatorSettings {
    pub fn tint_color(&self) -> Option<Color> {
        self.tint.map(HexColor::to_color)
    }

    /// Spin period, falling back to the default for unusable values
    pub fn spin_period(&self) -> Duration {
        if self.spin_period_secs.is_finite() && self.spin_period_secs > 0.0 {
            Duration::from_secs_f32(self.spin_period_secs)
        } else {
            DEFAULT_SPIN_PERIOD
        }
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Settings {
    /// Default settings file location
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pieloader", "Pieloader")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("pieloader-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_defaults_match_demo() {
        let settings = Settings::default();

        assert_eq!(
            settings.indicator.tint_color(),
            Some(Color::from_rgb8(255, 0, 0))
        );
        assert_eq!(settings.indicator.initial_progress, 0.12);
        assert_eq!(settings.indicator.increment_step, 0.1);
        assert_eq!(settings.indicator.spin_period(), Duration::from_secs(2));
        assert!(!settings.display.dark_mode);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_file("roundtrip.json");
        let mut settings = Settings::default();
        settings.display.dark_mode = true;
        settings.indicator.tint = None;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();

        assert!(loaded.display.dark_mode);
        assert_eq!(loaded.indicator.tint_color(), None);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_tint_is_written_as_hex() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["indicator"]["tint"], "#ff0000");
    }

    #[test]
    fn test_hex_tint_parses() {
        let settings: Settings =
            serde_json::from_str(r##"{ "indicator": { "tint": "#1E90ff" } }"##).unwrap();
        assert_eq!(
            settings.indicator.tint_color(),
            Some(Color::from_rgb8(0x1e, 0x90, 0xff))
        );

        assert_eq!("00ff00".parse::<HexColor>(), Ok(HexColor([0x00, 0xff, 0x00])));
        assert!("#ff00".parse::<HexColor>().is_err());
        assert!("#gg0000".parse::<HexColor>().is_err());
        assert!("#ff00é".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_invalid_tint_is_parse_error() {
        let path = temp_file("bad-tint.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "indicator": { "tint": "red" } }"#).unwrap();

        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "indicator": { "increment_step": 0.25 } }"#).unwrap();

        assert_eq!(settings.indicator.increment_step, 0.25);
        assert_eq!(settings.indicator.initial_progress, 0.12);
        assert_eq!(settings.display.indicator_size, 300.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Settings::load_from_file(&temp_file("does-not-exist.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let path = temp_file("broken.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_bad_spin_period_falls_back() {
        let mut indicator = IndicatorSettings::default();
        indicator.spin_period_secs = -1.0;
        assert_eq!(indicator.spin_period(), DEFAULT_SPIN_PERIOD);

        indicator.spin_period_secs = f32::NAN;
        assert_eq!(indicator.spin_period(), DEFAULT_SPIN_PERIOD);
    }
}
