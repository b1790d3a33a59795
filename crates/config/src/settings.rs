//! Configuration structures for shadegen settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Palette generation parameters
    #[serde(default)]
    pub palette: PaletteSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Selected theme name
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

/// Palette generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteSettings {
    /// Generate the dark-mode palette
    #[serde(default)]
    pub dark: bool,

    /// Total lightness swing across shades (0.0 - 1.0)
    #[serde(default = "default_luminosity_spread")]
    pub luminosity_spread: f64,

    /// Opacity of generated text colors (0.0 - 1.0)
    #[serde(default = "default_text_alpha")]
    pub text_alpha: f64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Number of log entries kept in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

// Default value functions for serde
fn default_theme_name() -> String {
    defaults::THEME_NAME.to_string()
}

fn default_luminosity_spread() -> f64 {
    defaults::LUMINOSITY_SPREAD
}

fn default_text_alpha() -> f64 {
    defaults::TEXT_ALPHA
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

// Default implementations
impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
        }
    }
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            dark: false,
            luminosity_spread: default_luminosity_spread(),
            text_alpha: default_text_alpha(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}
