//! Application settings types and persistence
//!
//! Settings live in a JSON file next to the binary (or wherever `--config`
//! points). A missing file means defaults; a broken one is reported and
//! replaced by defaults in memory.

use bevy::color::Color;
use bevy::log::{info, warn};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::dice::PlayerNames;
use super::layout::LayoutConfig;

pub const DEFAULT_SETTINGS_FILE: &str = "diceduel_settings.json";

// ============================================================================
// Theme
// ============================================================================

/// A CSS color string (`#393E46`, `rgb(57 62 70)`, `teal`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorSetting(pub String);

impl ColorSetting {
    pub fn new(css: &str) -> Self {
        Self(css.to_string())
    }

    pub fn parse(&self) -> Option<Color> {
        let c = csscolorparser::parse(self.0.trim()).ok()?;
        Some(Color::srgba(c.r, c.g, c.b, c.a))
    }

    /// Parse, falling back to `fallback` (with a warning) on malformed input.
    pub fn to_color_or(&self, fallback: &ColorSetting) -> Color {
        match self.parse() {
            Some(color) => color,
            None => {
                warn!("Invalid color '{}', using '{}'", self.0, fallback.0);
                fallback.parse().unwrap_or(Color::WHITE)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSetting {
    #[serde(default = "default_background")]
    pub background: ColorSetting,

    #[serde(default = "default_die_fill")]
    pub die_fill: ColorSetting,

    /// Die outline and pips.
    #[serde(default = "default_die_ink")]
    pub die_ink: ColorSetting,

    #[serde(default = "default_label")]
    pub label: ColorSetting,
}

fn default_background() -> ColorSetting {
    ColorSetting::new("#393E46")
}
fn default_die_fill() -> ColorSetting {
    ColorSetting::new("#FFFFFF")
}
fn default_die_ink() -> ColorSetting {
    ColorSetting::new("#222831")
}
fn default_label() -> ColorSetting {
    ColorSetting::new("#4ECCA3")
}

impl ThemeSetting {
    /// One message per theme color that does not parse.
    pub fn color_problems(&self) -> Vec<String> {
        let defaults = Self::default();
        [
            ("background", &self.background, &defaults.background),
            ("die_fill", &self.die_fill, &defaults.die_fill),
            ("die_ink", &self.die_ink, &defaults.die_ink),
            ("label", &self.label, &defaults.label),
        ]
        .into_iter()
        .filter(|(_, color, _)| color.parse().is_none())
        .map(|(field, color, fallback)| {
            format!(
                "Invalid theme color '{}' for {}, using '{}'",
                color.0, field, fallback.0
            )
        })
        .collect()
    }
}

impl Default for ThemeSetting {
    fn default() -> Self {
        Self {
            background: default_background(),
            die_fill: default_die_fill(),
            die_ink: default_die_ink(),
            label: default_label(),
        }
    }
}

// ============================================================================
// Application settings
// ============================================================================

/// Application settings (read from a JSON file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct AppSettings {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub theme: ThemeSetting,

    #[serde(default)]
    pub players: PlayerNames,

    /// How long the shuffle animation runs before the dice settle.
    #[serde(default = "default_roll_duration_ms")]
    pub roll_duration_ms: u64,

    /// Quiet period required after the last window resize.
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,

    /// Quiet period required after the last scale-factor (orientation) change.
    #[serde(default = "default_orientation_debounce_ms")]
    pub orientation_debounce_ms: u64,
}

fn default_roll_duration_ms() -> u64 {
    800
}
fn default_resize_debounce_ms() -> u64 {
    120
}
fn default_orientation_debounce_ms() -> u64 {
    200
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            theme: ThemeSetting::default(),
            players: PlayerNames::default(),
            roll_duration_ms: default_roll_duration_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            orientation_debounce_ms: default_orientation_debounce_ms(),
        }
    }
}

impl AppSettings {
    pub fn roll_duration(&self) -> Duration {
        Duration::from_millis(self.roll_duration_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn orientation_debounce(&self) -> Duration {
        Duration::from_millis(self.orientation_debounce_ms)
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse settings: {e}"))
    }

    /// Read settings from `path`. A missing file yields the defaults; an
    /// unreadable or malformed one is an error.
    pub fn try_load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file {}: {e}", path.display()))?;
        let settings = Self::from_json(&contents).map_err(|e| format!("{e} ({})", path.display()))?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Like [`AppSettings::try_load_from_file`], but logs problems and falls
    /// back to the defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Self {
        Self::try_load_from_file(path).unwrap_or_else(|e| {
            warn!("{e}");
            Self::default()
        })
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to encode settings: {e}"))?;
        std::fs::write(path, json)
            .map_err(|e| format!("Failed to write settings to {}: {e}", path.display()))
    }
}
