//! Configuration file support for drawcmd.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/drawcmd/config.toml`. Settings cover the canvas size, its
//! initial background, and terminal presentation of the command history.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorChoice;
pub use types::{CanvasConfig, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Smallest accepted canvas edge in pixels.
const MIN_CANVAS_SIZE: i32 = 16;

/// Largest accepted canvas edge in pixels.
const MAX_CANVAS_SIZE: i32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 640
/// height = 480
/// background = "white"
///
/// [ui]
/// color = "auto"
/// prompt = "> "
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and initial background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Terminal presentation preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`: 16 - 8192
    /// - `canvas.height`: 16 - 8192
    /// - `canvas.background`: must not be empty
    fn validate_and_clamp(&mut self) {
        let range = MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE;

        if !range.contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to {}-{} range",
                self.canvas.width,
                MIN_CANVAS_SIZE,
                MAX_CANVAS_SIZE
            );
            self.canvas.width = self.canvas.width.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        }

        if !range.contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to {}-{} range",
                self.canvas.height,
                MIN_CANVAS_SIZE,
                MAX_CANVAS_SIZE
            );
            self.canvas.height = self.canvas.height.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        }

        if self.canvas.background.trim().is_empty() {
            log::warn!("Empty canvas background, falling back to 'white'");
            self.canvas.background = "white".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/drawcmd/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("drawcmd");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
