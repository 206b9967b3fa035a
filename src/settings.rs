//! Controller settings.
//!
//! Settings are plain JSON. Every field has a default, so a partial file only
//! overrides what it names:
//!
//! ```json
//! { "handle_size": 10.0, "hit_policy": "topmost" }
//! ```

use crate::constants::{
    DEFAULT_FONT_SIZE, DEFAULT_HANDLE_SIZE, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, MAX_FONT_SIZE,
    MIN_FONT_SIZE,
};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which box wins when a point lies inside several overlapping frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitPolicy {
    /// Earliest added box wins
    #[default]
    FirstInserted,
    /// Most recently added (drawn on top) box wins
    Topmost,
}

/// Which handles a box exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleConfig {
    pub left: bool,
    pub right: bool,
    pub scale: bool,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            left: true,
            right: true,
            scale: true,
        }
    }
}

impl HandleConfig {
    pub fn any(&self) -> bool {
        self.left || self.right || self.scale
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub handle_size: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub handles: HandleConfig,
    pub hit_policy: HitPolicy,
    pub default_font_size: f32,
    pub min_font_size: f32,
    pub max_font_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            handle_size: DEFAULT_HANDLE_SIZE,
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            handles: HandleConfig::default(),
            hit_policy: HitPolicy::default(),
            default_font_size: DEFAULT_FONT_SIZE,
            min_font_size: MIN_FONT_SIZE,
            max_font_size: MAX_FONT_SIZE,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&contents)?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.handle_size.is_finite() && self.handle_size > 0.0) {
            return Err(SettingsError::invalid(
                "handle_size",
                format!("must be a positive number, got {}", self.handle_size),
            ));
        }
        if !(self.min_width.is_finite() && self.min_width >= 0.0) {
            return Err(SettingsError::invalid(
                "min_width",
                format!("must be non-negative, got {}", self.min_width),
            ));
        }
        if !(self.min_height.is_finite() && self.min_height >= 0.0) {
            return Err(SettingsError::invalid(
                "min_height",
                format!("must be non-negative, got {}", self.min_height),
            ));
        }
        if !(self.min_font_size > 0.0 && self.min_font_size <= self.max_font_size) {
            return Err(SettingsError::invalid(
                "min_font_size",
                format!(
                    "must be positive and not above max_font_size ({} > {})",
                    self.min_font_size, self.max_font_size
                ),
            ));
        }
        if !(self.min_font_size..=self.max_font_size).contains(&self.default_font_size) {
            return Err(SettingsError::invalid(
                "default_font_size",
                format!(
                    "{} is outside {}..={}",
                    self.default_font_size, self.min_font_size, self.max_font_size
                ),
            ));
        }
        Ok(())
    }

    /// Minimum width a box may have: wide enough for both side handles.
    pub fn effective_min_width(&self) -> f32 {
        let mut handles = 0.0;
        if self.handles.left {
            handles += self.handle_size;
        }
        if self.handles.right {
            handles += self.handle_size;
        }
        self.min_width.max(handles)
    }

    /// Minimum height a box may have: tall enough for one handle.
    pub fn effective_min_height(&self) -> f32 {
        if self.handles.any() {
            self.min_height.max(self.handle_size)
        } else {
            self.min_height
        }
    }
}

/// Default location of the settings file, e.g. `~/.config/textmark/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("textmark").join("settings.json"))
}
