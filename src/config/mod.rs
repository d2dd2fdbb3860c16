//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/sketchpad/config.toml`. Settings
//! include canvas dimensions, drawing defaults, and export behavior.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1024
/// height = 768
/// background = "white"
///
/// [drawing]
/// default_tool = "brush"
/// default_color = "black"
/// default_thickness = 5.0
/// default_fill = false
///
/// [export]
/// directory = "~/Pictures/sketchpad"
/// filename_template = "sketch_%Y-%m-%d_%H%M%S"
/// format = "jpeg"
/// jpeg_quality = 90
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Canvas surface settings (dimensions, background)
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Drawing tool defaults (tool, color, thickness, fill)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Export settings (directory, filename, format)
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// rendering issues. Invalid values are clamped to the nearest valid
    /// value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    /// - `default_thickness`: 1.0 - 30.0
    /// - `jpeg_quality`: 1 - 100
    fn validate_and_clamp(&mut self) {
        // Canvas width/height: 16 - 8192
        if !(16..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 8192);
        }
        if !(16..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 8192);
        }

        // Thickness: 1.0 - 30.0
        if !(1.0..=30.0).contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-30.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self.drawing.default_thickness.clamp(1.0, 30.0);
        }

        // JPEG quality: 1 - 100
        if !(1..=100).contains(&self.export.jpeg_quality) {
            log::warn!(
                "Invalid jpeg_quality {}, clamping to 1-100 range",
                self.export.jpeg_quality
            );
            self.export.jpeg_quality = self.export.jpeg_quality.clamp(1, 100);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// the file is not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};
    use crate::export::ExportFormat;
    use crate::input::Tool;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.canvas.background.to_color(), WHITE);
        assert_eq!(config.drawing.default_tool, Tool::Brush);
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.drawing.default_thickness, 5.0);
        assert!(!config.drawing.default_fill);
        assert_eq!(config.export.format, ExportFormat::Jpeg);
        assert_eq!(config.export.jpeg_quality, 90);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            default_tool = "circle"
            default_fill = true
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_tool, Tool::Circle);
        assert!(config.drawing.default_fill);
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.export.jpeg_quality, 90);
    }

    #[test]
    fn rgb_array_color_spec_parses() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            default_color = [255, 128, 0]
            "#,
        )
        .unwrap();

        let color = config.drawing.default_color.to_color();
        assert!((color.r - 1.0).abs() < 1e-9);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-9);
        assert!((color.b - 0.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [canvas]
            width = 4
            height = 100000

            [drawing]
            default_thickness = 99.0

            [export]
            jpeg_quality = 0
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.canvas.height, 8192);
        assert_eq!(config.drawing.default_thickness, 30.0);
        assert_eq!(config.export.jpeg_quality, 1);
    }

    #[test]
    fn load_from_reads_a_config_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[canvas]\nwidth = 320\nheight = 240\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.width, 320);
        assert_eq!(config.canvas.height, 240);
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "canvas = not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
