// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no dependency on the UI toolkit.
//!
//! # Modules
//!
//! - [`ui`]: Slider measurements ([`Extent`](ui::newtypes::Extent),
//!   [`AnimationDuration`](ui::newtypes::AnimationDuration),
//!   [`FontSize`](ui::newtypes::FontSize))

pub mod ui;
