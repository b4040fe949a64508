// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for slider measurements,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Extent
// =============================================================================

/// A length in logical pixels that can never be negative or NaN.
///
/// Every size, radius, offset and inset of the slider goes through this type,
/// so drawing code never has to guard against nonsensical geometry.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Extent(f32);

impl Extent {
    /// Zero-length extent.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new extent, clamping negative and NaN values to zero.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.max(0.0))
        }
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if this extent has no length.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

// =============================================================================
// Animation Duration Bounds
// =============================================================================

/// Selection animation duration bounds (0 to 2000 milliseconds).
pub mod animation_bounds {
    /// Minimum duration; zero means the indicator jumps.
    pub const MIN_MS: u64 = 0;
    /// Maximum duration in milliseconds.
    pub const MAX_MS: u64 = 2000;
    /// Default duration in milliseconds.
    pub const DEFAULT_MS: u64 = 250;
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// How long the selection indicator takes to travel between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDuration(u64);

impl AnimationDuration {
    /// Creates a new duration in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(animation_bounds::MIN_MS, animation_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if animations are effectively disabled.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(animation_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Font Size Bounds
// =============================================================================

/// Label font size bounds (6 to 72 points).
pub mod font_bounds {
    /// Smallest legible label size.
    pub const MIN: f32 = 6.0;
    /// Largest label size.
    pub const MAX: f32 = 72.0;
    /// Default label size.
    pub const DEFAULT: f32 = 13.0;
}

// =============================================================================
// FontSize
// =============================================================================

/// Label font size, guaranteed to be within valid range (6–72).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSize(f32);

impl FontSize {
    /// Creates a new font size, clamping the value to the valid range.
    #[must_use]
    pub fn new(size: f32) -> Self {
        if size.is_nan() {
            return Self::default();
        }
        Self(size.clamp(font_bounds::MIN, font_bounds::MAX))
    }

    /// Returns the raw size.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(font_bounds::DEFAULT)
    }
}
