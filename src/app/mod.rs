// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single segmented slider.
//!
//! The `App` struct owns the slider model, the resolved theme and the loaded
//! settings. Pointer input from the slider widget, arrow keys and the step
//! buttons all end up in [`App::update`], which applies them to the model and
//! keeps the animation tick running while the indicator moves.

mod message;
mod subscription;
mod view;

pub use message::{parse_list, Flags, Message};

use crate::config::{self, paths, Config};
use crate::slider::SegmentSlider;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    slider: SegmentSlider<String>,
    theme: AppTheme,
    config: Config,
    animated: bool,
    /// Config load/save feedback shown under the controls.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selected", &self.slider.selected_item_index())
            .field("animated", &self.animated)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 560.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 420.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_override(flags.config_dir.clone());

    // iced 0.14 requires an `Fn` boot closure; flags are cloned per call
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        (Self::from_parts(flags, config, warning), Task::none())
    }

    /// Builds the state from already loaded settings. CLI flags win over the file.
    #[must_use]
    pub fn from_parts(flags: Flags, config: Config, warning: Option<String>) -> Self {
        let theme = AppTheme::new(flags.theme.unwrap_or(config.general.theme_mode));

        let mut style = config.slider_style(&theme.colors);
        if flags.no_labels {
            style = style.without_labels();
        }

        let values = flags.values.unwrap_or_else(|| config.stops.values.clone());
        let labels = flags.labels.unwrap_or_else(|| config.stops.labels.clone());
        if values.is_empty() {
            tracing::warn!("no stop values configured, slider is empty");
        }

        let slider = SegmentSlider::new(style)
            .with_values(values)
            .with_labels(labels);

        Self {
            slider,
            theme,
            config,
            animated: !flags.no_animation,
            notice: warning,
        }
    }

    #[must_use]
    pub fn slider(&self) -> &SegmentSlider<String> {
        &self.slider
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn title(&self) -> String {
        match self.slider.current_value() {
            Some(value) => format!("Segment Slider - {value}"),
            None => "Segment Slider".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.slider.is_animating()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SliderChanged(index) => {
                let result = self.slider.set_selected_item_index_animated(
                    index,
                    self.animated,
                    Instant::now(),
                );
                self.log_selection(result);
            }
            Message::Step(delta) => {
                let result = self.slider.step(delta, self.animated, Instant::now());
                self.log_selection(result);
            }
            Message::Tick(now) => self.slider.tick(now),
            Message::SetAnimated(animated) => {
                self.animated = animated;
                if !animated {
                    // Finish any running animation right away
                    let duration = self.slider.style().animation_duration.as_duration();
                    self.slider.tick(Instant::now() + duration);
                }
            }
            Message::SetUseCircles(use_circles) => {
                let mut style = *self.slider.style();
                style.use_circles = use_circles;
                self.slider.set_style(style);
                self.config.style.use_circles = Some(use_circles);
            }
            Message::SetHideInnerLabels(hide) => {
                self.update_labels(|labels| labels.hide_inner_labels = hide);
                self.config.labels.hide_inner_labels = Some(hide);
            }
            Message::SetFrameLabelsToSlider(frame) => {
                self.update_labels(|labels| labels.frame_labels_to_slider = frame);
                self.config.labels.frame_labels_to_slider = Some(frame);
            }
            Message::SaveSettings => {
                self.notice = match config::save(&self.config) {
                    Ok(()) => Some("Settings saved".to_string()),
                    Err(err) => {
                        tracing::error!(%err, "failed to save settings");
                        Some(format!("Failed to save settings: {err}"))
                    }
                };
            }
        }
        Task::none()
    }

    fn update_labels(&mut self, apply: impl FnOnce(&mut crate::slider::LabelStyle)) {
        let mut style = *self.slider.style();
        if let Some(labels) = style.labels.as_mut() {
            apply(labels);
            self.slider.set_style(style);
        }
    }

    fn log_selection(&self, result: crate::error::Result<bool>) {
        match result {
            Ok(true) => tracing::debug!(
                index = ?self.slider.selected_item_index(),
                value = ?self.slider.current_value(),
                "selection changed"
            ),
            Ok(false) => {}
            Err(err) => tracing::warn!(%err, "selection change rejected"),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            slider: &self.slider,
            colors: &self.theme.colors,
            animated: self.animated,
            notice: self.notice.as_deref(),
        })
    }
}
