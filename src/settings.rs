//! Runtime settings
//!
//! Each demo carries its settings (window size, asset root, control
//! tuning) as in-code defaults and optionally reads a RON file over them.
//! A missing file is normal; a broken one logs a warning and falls back,
//! it never stops a demo from starting.

use std::fs;
use std::path::Path;

use macroquad::prelude::Conf;
use serde::{Deserialize, Serialize};

use crate::input::Bindings;

/// Error type for settings files
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(e: ron::error::SpannedError) -> Self {
        SettingsError::Parse(e)
    }
}

impl From<ron::Error> for SettingsError {
    fn from(e: ron::Error) -> Self {
        SettingsError::Serialize(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
            SettingsError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

/// All demo settings. Sections missing from a settings file keep their
/// built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub assets: AssetSettings,
    #[serde(default)]
    pub controls: ControlSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            assets: AssetSettings::default(),
            controls: ControlSettings::default(),
        }
    }
}

impl Settings {
    /// Read settings from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }

    /// Read settings from `path` if it exists, otherwise use `fallback`.
    /// A file that exists but fails to parse logs a warning and also
    /// yields the fallback.
    pub fn load_or<P: AsRef<Path>>(path: P, fallback: Settings) -> Settings {
        let path = path.as_ref();
        if !path.exists() {
            return fallback;
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "failed to read settings {}: {}, using built-in values",
                    path.display(),
                    e
                );
                fallback
            }
        }
    }

    /// Write settings to a RON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .indentor("  ".to_string());
        let contents = ron::ser::to_string_pretty(self, config)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Window title and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "tilescroll".to_string(),
            width: 500,
            height: 500,
        }
    }
}

impl WindowSettings {
    /// Window configuration for the `#[macroquad::main]` entry point.
    /// Demo windows are fixed-size.
    pub fn conf(&self) -> Conf {
        Conf {
            window_title: self.title.clone(),
            window_width: self.width,
            window_height: self.height,
            window_resizable: false,
            ..Default::default()
        }
    }
}

/// Where runtime assets (TMX maps, textures) live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSettings {
    pub root: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            root: "assets".to_string(),
        }
    }
}

/// Movement and scrolling tuning plus key bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSettings {
    /// Pixels a controlled entity moves per frame per held direction.
    pub step: f32,
    /// Camera scroll speed in pixels per second (key scroller demos).
    pub scroll_speed: f32,
    pub bindings: Bindings,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            step: 5.0,
            scroll_speed: 700.0,
            bindings: Bindings::standard(),
        }
    }
}
