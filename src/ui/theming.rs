// SPDX-License-Identifier: MPL-2.0
//! Light, dark and system theme handling.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    /// Track and unselected stops.
    pub surface_tertiary: Color,

    /// Unselected labels.
    pub text_secondary: Color,

    /// Selected stop, indicator and selected label.
    pub brand_primary: Color,

    /// Subtle fill behind the slider card.
    pub card_background: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_tertiary: palette::GRAY_200,
            text_secondary: palette::GRAY_700,
            brand_primary: palette::PRIMARY_500,

            card_background: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_200
            },
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_tertiary: palette::GRAY_700,
            text_secondary: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,

            card_background: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
        }
    }
}

/// Resolved theme: the chosen mode and its colors.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    pub is_dark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Parses a CLI value (`light`, `dark` or `system`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let is_dark = mode.is_dark();
        let colors = if is_dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self {
            colors,
            mode,
            is_dark,
        }
    }

    /// Built-in iced theme matching the resolved colors.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_track() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_tertiary.r > scheme.text_secondary.r);
    }

    #[test]
    fn dark_theme_has_dark_track() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_tertiary.r < scheme.text_secondary.r);
    }

    #[test]
    fn both_themes_have_same_brand_hue() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.brand_primary.b > light.brand_primary.r);
        assert!(dark.brand_primary.b > dark.brand_primary.r);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_parses_cli_values() {
        assert_eq!(ThemeMode::parse("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse(" light "), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("sepia"), None);
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(AppTheme::new(ThemeMode::Light).iced_theme(), Theme::Light);
        assert_eq!(AppTheme::new(ThemeMode::Dark).iced_theme(), Theme::Dark);
    }
}
