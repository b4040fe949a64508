// SPDX-License-Identifier: MPL-2.0
//! Track geometry: where each stop point sits and which stop a pointer is over.
//!
//! All coordinates are local to the control, with the origin at its top-left
//! corner.

use super::style::SliderStyle;

/// Line height multiplier used when reserving room for labels.
pub const LABEL_LINE_HEIGHT: f32 = 1.3;

/// Horizontal alignment of a label relative to its anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlign {
    Left,
    Center,
    Right,
}

/// Where a stop label is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub x: f32,
    pub y: f32,
    pub align: LabelAlign,
    /// Widest the label may be before wrapping; infinite when unframed.
    pub max_width: f32,
}

/// Computed placement of N stop points along the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    start: f32,
    width: f32,
    count: usize,
    center_y: f32,
}

impl TrackLayout {
    /// Lays out `count` stops inside a control `control_width` pixels wide.
    #[must_use]
    pub fn new(control_width: f32, style: &SliderStyle, count: usize) -> Self {
        let insets = style.horizontal_insets.value();
        let available = (control_width - 2.0 * insets).max(0.0);
        let width = style
            .slider_width
            .map_or(available, |explicit| explicit.value().min(available));

        Self {
            start: insets.min(control_width.max(0.0)),
            width,
            count,
            center_y: style.vertical_extent(),
        }
    }

    /// Builds a layout from explicit track coordinates.
    #[must_use]
    pub fn from_track(start: f32, width: f32, count: usize) -> Self {
        Self {
            start,
            width: width.max(0.0),
            count,
            center_y: 0.0,
        }
    }

    #[must_use]
    pub fn track_start(&self) -> f32 {
        self.start
    }

    #[must_use]
    pub fn track_end(&self) -> f32 {
        self.start + self.width
    }

    #[must_use]
    pub fn track_width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.center_y
    }

    /// Distance between two neighbouring stops.
    ///
    /// A single stop owns the whole track.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        if self.count > 1 {
            self.width / (self.count - 1) as f32
        } else {
            self.width
        }
    }

    /// X coordinate of a fractional stop position.
    ///
    /// Position `1.5` lies halfway between stops 1 and 2, which is how the
    /// selection indicator is placed while it animates.
    #[must_use]
    pub fn x_at(&self, position: f32) -> f32 {
        if self.count <= 1 {
            return self.start + self.width / 2.0;
        }
        let last = (self.count - 1) as f32;
        self.start + position.clamp(0.0, last) * self.spacing()
    }

    /// X coordinate of stop `index`.
    #[must_use]
    pub fn stop_x(&self, index: usize) -> Option<f32> {
        (index < self.count).then(|| self.x_at(index as f32))
    }

    /// X coordinates of every stop, in order.
    #[must_use]
    pub fn stop_positions(&self) -> Vec<f32> {
        (0..self.count).map(|i| self.x_at(i as f32)).collect()
    }

    /// Index of the stop closest to pointer `x`.
    ///
    /// Pointers outside the track snap to the nearest end. A pointer exactly
    /// halfway between two stops resolves to the lower index.
    #[must_use]
    pub fn nearest_stop(&self, x: f32) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let spacing = self.spacing();
        if self.count == 1 || spacing <= 0.0 || x.is_nan() {
            return Some(0);
        }

        let last = self.count - 1;
        let relative = ((x - self.start) / spacing).clamp(0.0, last as f32);
        let lower = relative.floor();
        let index = if relative - lower > 0.5 {
            lower as usize + 1
        } else {
            lower as usize
        };
        Some(index.min(last))
    }

    /// Where the label of stop `index` is drawn.
    #[must_use]
    pub fn label_anchor(&self, index: usize, style: &SliderStyle) -> Option<LabelAnchor> {
        let labels = style.labels.as_ref()?;
        let x = self.stop_x(index)?;
        let y = self.center_y + style.vertical_extent() + labels.text_offset.value();

        if !labels.frame_labels_to_slider {
            return Some(LabelAnchor {
                x,
                y,
                align: LabelAlign::Center,
                max_width: f32::INFINITY,
            });
        }

        let last = self.count - 1;
        let (x, align) = match index {
            _ if self.count == 1 => (x, LabelAlign::Center),
            0 => (self.track_start(), LabelAlign::Left),
            i if i == last => (self.track_end(), LabelAlign::Right),
            _ => (x, LabelAlign::Center),
        };
        Some(LabelAnchor {
            x,
            y,
            align,
            max_width: self.spacing(),
        })
    }
}

/// Height the control needs to draw its stops and, when enabled, labels.
#[must_use]
pub fn preferred_height(style: &SliderStyle) -> f32 {
    let shapes = 2.0 * style.vertical_extent();
    match &style.labels {
        Some(labels) => {
            shapes + labels.text_offset.value() + labels.font.size.value() * LABEL_LINE_HEIGHT
        }
        None => shapes,
    }
}
