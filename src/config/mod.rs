// SPDX-License-Identifier: MPL-2.0
//! This module handles the slider configuration, loading and saving it to a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[style]` - Track colors, stop geometry, insets and animation
//! - `[labels]` - Label colors, font and visibility flags
//! - `[stops]` - Stop values and their labels
//!
//! Every style field is optional. Missing colors follow the active theme and
//! missing measurements use [`defaults`]. Negative measurements are clamped to
//! zero when the style is built.
//!
//! # Examples
//!
//! ```no_run
//! use segment_slider::config;
//! use segment_slider::ui::theming::ColorScheme;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let style = config.slider_style(&ColorScheme::light());
//!
//! config::save(&config).expect("Failed to save config");
//! # let _ = style;
//! ```

pub mod color;
pub mod defaults;
pub mod paths;

pub use color::HexColor;
pub use defaults::*;

use crate::domain::ui::{AnimationDuration, Extent, FontSize};
use crate::error::{Error, Result};
use crate::slider::style::{FontFamily, LabelFont, LabelStyle, SliderStyle};
use crate::ui::theming::{ColorScheme, ThemeMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Track and stop appearance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StyleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_color: Option<HexColor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_value_color: Option<HexColor>,

    /// Circular stop points instead of rectangles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_circles: Option<bool>,

    /// Circle radius, or rectangle height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_item_height: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_item_width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circles_radius_for_selected: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_thickness: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_insets: Option<f32>,

    /// Fixed track width; unset fills the control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider_width: Option<f32>,

    /// Indicator animation duration in milliseconds (0 disables animation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_ms: Option<u64>,
}

/// Label appearance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabelsConfig {
    /// Draw labels at all. Defaults to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<HexColor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_label_color: Option<HexColor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_offset: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_inner_labels: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_labels_to_slider: Option<bool>,
}

/// Stop values and labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StopsConfig {
    #[serde(default)]
    pub values: Vec<String>,

    #[serde(default)]
    pub labels: Vec<String>,
}

impl Default for StopsConfig {
    fn default() -> Self {
        Self {
            values: DEFAULT_STOP_VALUES.iter().map(ToString::to_string).collect(),
            labels: DEFAULT_STOP_LABELS.iter().map(ToString::to_string).collect(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub stops: StopsConfig,
}

fn color_or(value: Option<HexColor>, fallback: iced::Color) -> iced::Color {
    value.map_or(fallback, HexColor::color)
}

fn extent_or(value: Option<f32>, fallback: f32) -> Extent {
    Extent::new(value.unwrap_or(fallback))
}

impl Config {
    /// Builds the slider style, filling unset colors from `colors`.
    #[must_use]
    pub fn slider_style(&self, colors: &ColorScheme) -> SliderStyle {
        let themed = SliderStyle::themed(colors);
        let style = &self.style;
        let labels = &self.labels;

        let label_style = labels.enabled.unwrap_or(true).then(|| {
            let themed_labels = themed.labels.unwrap_or_default();
            LabelStyle {
                label_color: color_or(labels.label_color, themed_labels.label_color),
                selected_label_color: color_or(
                    labels.selected_label_color,
                    themed_labels.selected_label_color,
                ),
                text_offset: extent_or(labels.text_offset, DEFAULT_TEXT_OFFSET),
                font: LabelFont {
                    size: FontSize::new(labels.font_size.unwrap_or(DEFAULT_FONT_SIZE)),
                    family: labels.font_family.unwrap_or_default(),
                },
                hide_inner_labels: labels.hide_inner_labels.unwrap_or(false),
                frame_labels_to_slider: labels.frame_labels_to_slider.unwrap_or(false),
            }
        });

        SliderStyle {
            basic_color: color_or(style.basic_color, themed.basic_color),
            selected_value_color: color_or(style.selected_value_color, themed.selected_value_color),
            use_circles: style.use_circles.unwrap_or(true),
            stop_item_height: extent_or(style.stop_item_height, DEFAULT_STOP_ITEM_HEIGHT),
            stop_item_width: extent_or(style.stop_item_width, DEFAULT_STOP_ITEM_WIDTH),
            circles_radius_for_selected: extent_or(
                style.circles_radius_for_selected,
                DEFAULT_SELECTED_RADIUS,
            ),
            track_thickness: extent_or(style.track_thickness, DEFAULT_TRACK_THICKNESS),
            horizontal_insets: extent_or(style.horizontal_insets, DEFAULT_HORIZONTAL_INSETS),
            slider_width: style.slider_width.map(Extent::new),
            animation_duration: AnimationDuration::from_millis(
                style.animation_ms.unwrap_or(DEFAULT_ANIMATION_MS),
            ),
            labels: label_style,
        }
    }
}

// =============================================================================
// Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
