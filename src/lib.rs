// SPDX-License-Identifier: MPL-2.0
//! `segment_slider` is a segmented slider control built with the Iced GUI framework.
//!
//! The slider snaps to a fixed list of stop points, draws them as circles or
//! rectangles along a track, optionally labels them, and can animate the
//! selection indicator between stops. A small demo application hosts one
//! slider and persists its style settings.

#![doc(html_root_url = "https://docs.rs/segment_slider/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod slider;
pub mod ui;
