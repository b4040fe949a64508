// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks.
//!
//! - [`widgets`] - Custom Iced widgets (the segmented slider canvas)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management and color schemes

pub mod design_tokens;
pub mod theming;
pub mod widgets;
