// SPDX-License-Identifier: MPL-2.0
//! End-to-end behaviour of the slider model, its layout and the settings file.

use segment_slider::config::{self, Config};
use segment_slider::domain::ui::{AnimationDuration, Extent};
use segment_slider::error::{Error, SelectionError};
use segment_slider::slider::{SegmentSlider, SliderStyle, TrackLayout};
use segment_slider::ui::theming::ColorScheme;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn three_stop_slider() -> SegmentSlider<i32> {
    SegmentSlider::new(SliderStyle {
        horizontal_insets: Extent::ZERO,
        ..SliderStyle::default()
    })
    .with_values(vec![10, 20, 30])
    .with_labels(vec!["Low".into(), "Mid".into(), "High".into()])
}

#[test]
fn stops_are_evenly_spaced_across_the_track() {
    let slider = three_stop_slider();
    let layout = TrackLayout::new(300.0, slider.style(), slider.len());

    assert_eq!(layout.stop_positions(), vec![0.0, 150.0, 300.0]);
}

#[test]
fn pointer_picks_nearest_stop() {
    let slider = three_stop_slider();
    let layout = TrackLayout::new(300.0, slider.style(), slider.len());

    assert_eq!(layout.nearest_stop(-40.0), Some(0));
    assert_eq!(layout.nearest_stop(140.0), Some(1));
    assert_eq!(layout.nearest_stop(226.0), Some(2));
    assert_eq!(layout.nearest_stop(999.0), Some(2));
}

#[test]
fn selecting_an_index_exposes_its_value_and_label() {
    let mut slider = three_stop_slider();

    assert_eq!(slider.set_selected_item_index(1), Ok(true));
    assert_eq!(slider.selected_item_index(), Some(1));
    assert_eq!(slider.current_value(), Some(&20));
    assert_eq!(slider.label_at(1), Some("Mid"));
}

#[test]
fn reselecting_the_current_index_is_a_no_op() {
    let mut slider = three_stop_slider();
    slider.set_selected_item_index(2).unwrap();

    let now = Instant::now();
    assert_eq!(slider.set_selected_item_index_animated(2, true, now), Ok(false));
    assert!(!slider.is_animating());
}

#[test]
fn out_of_range_selection_is_rejected() {
    let mut slider = three_stop_slider();
    slider.set_selected_item_index(1).unwrap();

    let err = slider.set_selected_item_index(3).unwrap_err();
    assert_eq!(
        err,
        Error::Selection(SelectionError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(slider.selected_item_index(), Some(1));
}

#[test]
fn animated_selection_settles_on_target() {
    let mut slider = three_stop_slider();
    let mut style = *slider.style();
    style.animation_duration = AnimationDuration::from_millis(200);
    slider.set_style(style);

    let start = Instant::now();
    slider.set_selected_item_index_animated(2, true, start).unwrap();
    assert_eq!(slider.selected_item_index(), Some(2));
    assert!(slider.is_animating());

    slider.tick(start + Duration::from_millis(100));
    let midway = slider.indicator_position().unwrap();
    assert!(midway > 0.0 && midway < 2.0, "indicator at {midway}");

    slider.tick(start + Duration::from_millis(200));
    assert!(!slider.is_animating());
    assert_eq!(slider.indicator_position(), Some(2.0));
}

#[test]
fn shrinking_values_clamps_selection() {
    let mut slider = three_stop_slider();
    slider.set_selected_item_index(2).unwrap();

    slider.set_values(vec![10, 20]);
    assert_eq!(slider.selected_item_index(), Some(1));

    slider.set_values(Vec::new());
    assert_eq!(slider.selected_item_index(), None);
    assert_eq!(slider.current_value(), None);
}

#[test]
fn select_by_value_finds_matching_stop() {
    let mut slider = three_stop_slider();
    let now = Instant::now();

    assert_eq!(slider.select_value(&30, false, now), Ok(true));
    assert_eq!(slider.selected_item_index(), Some(2));
    assert_eq!(
        slider.select_value(&99, false, now),
        Err(Error::Selection(SelectionError::UnknownValue))
    );
}

#[test]
fn settings_file_drives_slider_style() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r##"
[style]
use_circles = false
selected_value_color = "#FF8800"
animation_ms = 0

[labels]
hide_inner_labels = true

[stops]
values = ["1", "2"]
labels = ["one", "two"]
"##,
    )
    .expect("Failed to write config");

    let loaded: Config = config::load_from_path(&path).expect("Failed to load config");
    let style = loaded.slider_style(&ColorScheme::light());

    assert!(!style.use_circles);
    assert!(style.animation_duration.is_instant());
    assert_eq!(style.selected_value_color.into_rgba8(), [255, 136, 0, 255]);
    assert!(style.labels.is_some_and(|labels| labels.hide_inner_labels));

    let slider = SegmentSlider::new(style)
        .with_values(loaded.stops.values.clone())
        .with_labels(loaded.stops.labels.clone());
    assert_eq!(slider.len(), 2);
    assert_eq!(slider.label_at(1), Some("two"));
}
