// SPDX-License-Identifier: MPL-2.0
//! Hex color strings for the settings file.

use crate::error::Error;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color written as `#RRGGBB` or `#RRGGBBAA` in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Color);

impl HexColor {
    #[must_use]
    pub fn color(self) -> Color {
        self.0
    }

    /// Parses `#RRGGBB`, `#RRGGBBAA`, or the same without the leading `#`.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let digits = input.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::Config(format!("invalid color `{input}`")));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::Config(format!("invalid color `{input}`")))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };

        Ok(Self(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            f32::from(alpha) / 255.0,
        )))
    }
}

impl From<Color> for HexColor {
    fn from(color: Color) -> Self {
        Self(color)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0.into_rgba8();
        if a == 255 {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}
