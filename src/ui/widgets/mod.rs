// SPDX-License-Identifier: MPL-2.0
pub mod segment_slider;

pub use segment_slider::SliderCanvas;
