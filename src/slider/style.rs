// SPDX-License-Identifier: MPL-2.0
//! Visual configuration of the slider.
//!
//! [`SliderStyle`] carries colors, stop geometry and track placement. Label
//! rendering is optional: a style with `labels: None` is the compact variant
//! that only draws the track and its stop points.

use crate::domain::ui::{AnimationDuration, Extent, FontSize};
use crate::ui::design_tokens::{palette, sizing};
use crate::ui::theming::ColorScheme;
use iced::{font, Color, Font};
use serde::{Deserialize, Serialize};

/// Font family used for stop labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

/// Label text style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelFont {
    pub size: FontSize,
    pub family: FontFamily,
}

impl LabelFont {
    /// Converts to the toolkit font handle.
    #[must_use]
    pub fn to_font(self) -> Font {
        let family = match self.family {
            FontFamily::SansSerif => font::Family::SansSerif,
            FontFamily::Serif => font::Family::Serif,
            FontFamily::Monospace => font::Family::Monospace,
        };
        Font {
            family,
            ..Font::DEFAULT
        }
    }
}

/// Settings that only apply when stop labels are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub label_color: Color,
    pub selected_label_color: Color,
    /// Gap between the stop shape and the top of its label.
    pub text_offset: Extent,
    pub font: LabelFont,
    /// Draw only the selected stop's label.
    pub hide_inner_labels: bool,
    /// Keep the outer labels inside the track and limit each label to one stop spacing.
    pub frame_labels_to_slider: bool,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            label_color: palette::GRAY_400,
            selected_label_color: palette::PRIMARY_500,
            text_offset: Extent::new(sizing::SLIDER_TEXT_OFFSET),
            font: LabelFont::default(),
            hide_inner_labels: false,
            frame_labels_to_slider: false,
        }
    }
}

/// Full visual configuration of a segmented slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderStyle {
    /// Track and unselected stop color.
    pub basic_color: Color,
    /// Selected stop and filled track color.
    pub selected_value_color: Color,
    /// Draw stop points as circles instead of rectangles.
    pub use_circles: bool,
    /// Circle radius, or rectangle height.
    pub stop_item_height: Extent,
    /// Rectangle width; unused for circles.
    pub stop_item_width: Extent,
    pub circles_radius_for_selected: Extent,
    pub track_thickness: Extent,
    /// Space kept free on each side of the track.
    pub horizontal_insets: Extent,
    /// Explicit track width; `None` fills the control minus the insets.
    pub slider_width: Option<Extent>,
    pub animation_duration: AnimationDuration,
    /// Label settings; `None` hides labels entirely.
    pub labels: Option<LabelStyle>,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            basic_color: palette::GRAY_200,
            selected_value_color: palette::PRIMARY_500,
            use_circles: true,
            stop_item_height: Extent::new(sizing::SLIDER_STOP_RADIUS),
            stop_item_width: Extent::new(sizing::SLIDER_STOP_WIDTH),
            circles_radius_for_selected: Extent::new(sizing::SLIDER_SELECTED_RADIUS),
            track_thickness: Extent::new(sizing::SLIDER_TRACK),
            horizontal_insets: Extent::new(sizing::SLIDER_INSETS),
            slider_width: None,
            animation_duration: AnimationDuration::default(),
            labels: Some(LabelStyle::default()),
        }
    }
}

impl SliderStyle {
    /// Default geometry with colors taken from a theme color scheme.
    #[must_use]
    pub fn themed(colors: &ColorScheme) -> Self {
        let base = Self::default();
        Self {
            basic_color: colors.surface_tertiary,
            selected_value_color: colors.brand_primary,
            labels: base.labels.map(|labels| LabelStyle {
                label_color: colors.text_secondary,
                selected_label_color: colors.brand_primary,
                ..labels
            }),
            ..base
        }
    }

    /// Same style without labels.
    #[must_use]
    pub fn without_labels(self) -> Self {
        Self {
            labels: None,
            ..self
        }
    }

    #[must_use]
    pub fn has_labels(&self) -> bool {
        self.labels.is_some()
    }

    /// Half of the tallest shape drawn on the track.
    ///
    /// Stops are vertically centred at this distance from the top of the
    /// control so nothing is clipped.
    #[must_use]
    pub fn vertical_extent(&self) -> f32 {
        let stop = if self.use_circles {
            self.stop_item_height
                .value()
                .max(self.circles_radius_for_selected.value())
        } else {
            self.stop_item_height.value() / 2.0
        };
        stop.max(self.track_thickness.value() / 2.0)
    }
}
