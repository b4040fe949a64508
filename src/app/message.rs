// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The pointer picked a different stop.
    SliderChanged(usize),
    /// Move the selection by the given number of stops (keyboard or buttons).
    Step(isize),
    /// Animation frame.
    Tick(Instant),
    SetAnimated(bool),
    SetUseCircles(bool),
    SetHideInnerLabels(bool),
    SetFrameLabelsToSlider(bool),
    /// Write the current style flags back to `settings.toml`.
    SaveSettings,
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    /// Config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Stop values (`--values 10,20,30`).
    pub values: Option<Vec<String>>,
    /// Stop labels (`--labels Low,Mid,High`).
    pub labels: Option<Vec<String>>,
    /// Draw the compact variant without labels (`--no-labels`).
    pub no_labels: bool,
    /// Jump between stops instead of animating (`--no-animation`).
    pub no_animation: bool,
    /// Theme override (`--theme light|dark|system`).
    pub theme: Option<ThemeMode>,
}

/// Splits a comma separated CLI list, dropping empty entries.
#[must_use]
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
