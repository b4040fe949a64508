// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Stops**: Values and labels shown when nothing is configured
//! - **Animation**: Indicator travel time
//! - **Geometry**: Stop and track measurements

use crate::domain::ui::newtypes::{animation_bounds, font_bounds};
use crate::ui::design_tokens::sizing;

// ==========================================================================
// Stop Defaults
// ==========================================================================

/// Stop values used by the demo when none are configured.
pub const DEFAULT_STOP_VALUES: [&str; 3] = ["10", "20", "30"];

/// Labels paired with [`DEFAULT_STOP_VALUES`].
pub const DEFAULT_STOP_LABELS: [&str; 3] = ["Low", "Mid", "High"];

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default indicator animation duration in milliseconds.
pub const DEFAULT_ANIMATION_MS: u64 = animation_bounds::DEFAULT_MS;

/// Frame interval used while an animation is running.
pub const ANIMATION_FRAME_MS: u64 = 16;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

pub const DEFAULT_STOP_ITEM_HEIGHT: f32 = sizing::SLIDER_STOP_RADIUS;
pub const DEFAULT_STOP_ITEM_WIDTH: f32 = sizing::SLIDER_STOP_WIDTH;
pub const DEFAULT_SELECTED_RADIUS: f32 = sizing::SLIDER_SELECTED_RADIUS;
pub const DEFAULT_TRACK_THICKNESS: f32 = sizing::SLIDER_TRACK;
pub const DEFAULT_HORIZONTAL_INSETS: f32 = sizing::SLIDER_INSETS;
pub const DEFAULT_TEXT_OFFSET: f32 = sizing::SLIDER_TEXT_OFFSET;
pub const DEFAULT_FONT_SIZE: f32 = font_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_STOP_VALUES.len() == DEFAULT_STOP_LABELS.len());

    assert!(DEFAULT_ANIMATION_MS >= animation_bounds::MIN_MS);
    assert!(DEFAULT_ANIMATION_MS <= animation_bounds::MAX_MS);
    assert!(ANIMATION_FRAME_MS > 0);
    assert!(ANIMATION_FRAME_MS < DEFAULT_ANIMATION_MS);

    assert!(DEFAULT_SELECTED_RADIUS >= DEFAULT_STOP_ITEM_HEIGHT);
    assert!(DEFAULT_HORIZONTAL_INSETS >= DEFAULT_SELECTED_RADIUS);
    assert!(DEFAULT_FONT_SIZE >= font_bounds::MIN);
    assert!(DEFAULT_FONT_SIZE <= font_bounds::MAX);
};
