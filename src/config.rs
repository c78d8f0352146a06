//! Demo settings
//!
//! Stored as RON (Rusty Object Notation). Every field has a default, so a
//! settings file only needs the values it changes.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bounds that keep the demo from spawning an unplayable world
pub mod limits {
    /// Maximum units per army grid (rows * cols)
    pub const MAX_UNITS_PER_ARMY: u32 = 10_000;
    /// Maximum spacing / size / margin value in pixels
    pub const MAX_PIXELS: f32 = 100_000.0;
}

/// Error type for settings loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: i32,
    pub window_height: i32,
    /// Camera scroll speed in pixels per second
    pub scroll_speed: f32,
    /// Screen-edge scroll band in pixels (0 disables edge scrolling)
    pub edge_margin: f32,
    pub unit_rows: u32,
    pub unit_cols: u32,
    pub unit_spacing: f32,
    pub unit_size: f32,
    /// Random offset applied to spawned units
    pub unit_jitter: f32,
    /// RGBA color of the selection box border
    pub outline_color: [u8; 4],
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            scroll_speed: 400.0,
            edge_margin: 8.0,
            unit_rows: 6,
            unit_cols: 10,
            unit_spacing: 36.0,
            unit_size: 14.0,
            unit_jitter: 6.0,
            outline_color: [255, 255, 255, 255],
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Default location: `<config dir>/rts-select/settings.ron`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rts-select")
            .join("settings.ron")
    }

    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let settings: Settings = ron::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_ron(&source)
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let config = ron::ser::PrettyConfig::new().depth_limit(2);
        ron::ser::to_string_pretty(self, config)
            .map_err(|e| ConfigError::Invalid(format!("serialize: {}", e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }

        let positive = [
            ("unit_spacing", self.unit_spacing),
            ("unit_size", self.unit_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 || value > limits::MAX_PIXELS {
                return Err(ConfigError::Invalid(format!(
                    "{} must be in (0, {}], got {}",
                    name, limits::MAX_PIXELS, value
                )));
            }
        }

        let non_negative = [
            ("scroll_speed", self.scroll_speed),
            ("edge_margin", self.edge_margin),
            ("unit_jitter", self.unit_jitter),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 || value > limits::MAX_PIXELS {
                return Err(ConfigError::Invalid(format!(
                    "{} must be in [0, {}], got {}",
                    name, limits::MAX_PIXELS, value
                )));
            }
        }

        match self.unit_rows.checked_mul(self.unit_cols) {
            Some(count) if count <= limits::MAX_UNITS_PER_ARMY => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "unit grid {}x{} exceeds {} units",
                    self.unit_rows, self.unit_cols, limits::MAX_UNITS_PER_ARMY
                )));
            }
        }

        // Jitter past the spacing would let neighbours swap places
        if self.unit_jitter > self.unit_spacing {
            return Err(ConfigError::Invalid(format!(
                "unit_jitter ({}) must not exceed unit_spacing ({})",
                self.unit_jitter, self.unit_spacing
            )));
        }

        Ok(())
    }
}
