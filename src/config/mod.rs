//! Configuration loading and validation.
//!
//! Settings live in a TOML file at `~/.config/strokepad/config.toml`. Every
//! field is optional; missing values fall back to the defaults below and
//! out-of-range values are clamped with a warning rather than aborting.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::draw::{Color, color};
use crate::input::Tool;
use crate::util;

/// A color setting, either a palette name or explicit RGB bytes.
///
/// ```toml
/// background = "white"
/// default_color = [34, 102, 170]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Named(String),
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the spec to a concrete color, falling back on unknown names.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Named(name) => util::parse_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{name}', using fallback");
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::new(
                f64::from(*r) / 255.0,
                f64::from(*g) / 255.0,
                f64::from(*b) / 255.0,
                1.0,
            ),
        }
    }
}

/// Drawing defaults applied at session start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    /// Initial stroke color (name or RGB triple)
    pub default_color: ColorSpec,
    /// Tool selected when the session starts
    pub default_tool: String,
    /// Stroke width in pixels
    pub stroke_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: ColorSpec::Named("red".to_string()),
            default_tool: "pen".to_string(),
            stroke_width: 2.0,
        }
    }
}

/// Canvas geometry and limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Background color, also used by the eraser
    pub background: ColorSpec,
    /// Maximum number of stored shapes (0 = unlimited)
    pub max_shapes: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: ColorSpec::Named("white".to_string()),
            max_shapes: 0,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub drawing: DrawingConfig,
    pub canvas: CanvasConfig,
}

impl Config {
    /// Loads configuration from disk, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            info!("No config file found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from {config_path:?}");
        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {config_path:?}"))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {config_path:?}"))?;

        config.validate_and_clamp();
        info!("Loaded configuration from {config_path:?}");
        Ok(config)
    }

    /// Saves the current configuration, creating parent directories as needed.
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {parent:?}"))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {config_path:?}"))?;

        info!("Saved configuration to {config_path:?}");
        Ok(())
    }

    /// Clamps out-of-range values to sane bounds, warning on each adjustment.
    pub fn validate_and_clamp(&mut self) {
        if self.canvas.width == 0 || self.canvas.width > 8192 {
            warn!(
                "canvas.width {} out of range [1, 8192], clamping",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 8192);
        }

        if self.canvas.height == 0 || self.canvas.height > 8192 {
            warn!(
                "canvas.height {} out of range [1, 8192], clamping",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 8192);
        }

        if !(0.5..=20.0).contains(&self.drawing.stroke_width) {
            warn!(
                "drawing.stroke_width {} out of range [0.5, 20.0], clamping",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = self.drawing.stroke_width.clamp(0.5, 20.0);
        }

        if self.drawing.default_tool.parse::<Tool>().is_err() {
            warn!(
                "drawing.default_tool '{}' is not a valid tool, using 'pen'",
                self.drawing.default_tool
            );
            self.drawing.default_tool = "pen".to_string();
        }
    }

    /// The tool selected at session start.
    pub fn default_tool(&self) -> Tool {
        self.drawing.default_tool.parse().unwrap_or(Tool::Pen)
    }

    /// The resolved initial stroke color.
    pub fn default_color(&self) -> Color {
        self.drawing.default_color.to_color_or(color::RED)
    }

    /// The resolved canvas background color.
    pub fn background_color(&self) -> Color {
        self.canvas.background.to_color_or(color::WHITE)
    }
}

/// Returns the path to the configuration file.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join("strokepad").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.default_tool(), Tool::Pen);
        assert_eq!(config.default_color(), RED);
        assert_eq!(config.background_color(), WHITE);
        assert_eq!(config.canvas.max_shapes, 0);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [canvas]
            width = 1024
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.canvas.width, 1024);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.drawing.stroke_width, 2.0);
    }

    #[test]
    fn rgb_color_spec_parses() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            default_color = [0, 0, 255]
            "#,
        )
        .expect("valid toml");

        let color = config.default_color();
        assert_eq!(color.b, 1.0);
        assert_eq!(color.r, 0.0);
    }

    #[test]
    fn named_color_spec_parses() {
        let config: Config = toml::from_str(
            r#"
            [canvas]
            background = "black"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.background_color(), color::BLACK);
    }

    #[test]
    fn unknown_color_name_falls_back() {
        let spec = ColorSpec::Named("chartreuse-ish".to_string());
        assert_eq!(spec.to_color_or(RED), RED);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.canvas.width = 0;
        config.canvas.height = 100_000;
        config.drawing.stroke_width = 99.0;
        config.drawing.default_tool = "chisel".to_string();

        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, 8192);
        assert_eq!(config.drawing.stroke_width, 20.0);
        assert_eq!(config.default_tool(), Tool::Pen);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).expect("serializes");
        let parsed: Config = toml::from_str(&serialized).expect("parses back");
        assert_eq!(parsed.canvas.width, config.canvas.width);
        assert_eq!(parsed.drawing.default_tool, config.drawing.default_tool);
    }
}
