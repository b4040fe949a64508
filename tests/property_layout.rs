// SPDX-License-Identifier: MPL-2.0
//! Property tests for stop layout and selection.

use proptest::prelude::*;
use segment_slider::slider::{SegmentSlider, TrackLayout};

/// Nearest stop by exhaustive search, lower index on ties.
fn brute_force_nearest(layout: &TrackLayout, x: f32) -> usize {
    let positions = layout.stop_positions();
    let mut best = 0;
    for (index, position) in positions.iter().enumerate() {
        if (position - x).abs() < (positions[best] - x).abs() {
            best = index;
        }
    }
    best
}

proptest! {
    #[test]
    fn stops_are_ordered_and_inside_track(
        start in 0.0f32..200.0,
        width in 0.0f32..2000.0,
        count in 1usize..40,
    ) {
        let layout = TrackLayout::from_track(start, width, count);
        let positions = layout.stop_positions();

        prop_assert_eq!(positions.len(), count);
        for pair in positions.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        for x in positions {
            prop_assert!(x >= layout.track_start() - 1e-3);
            prop_assert!(x <= layout.track_end() + 1e-3);
        }
    }

    #[test]
    fn nearest_stop_matches_exhaustive_search(
        width in 10.0f32..2000.0,
        count in 2usize..20,
        x in -100.0f32..2100.0,
    ) {
        let layout = TrackLayout::from_track(0.0, width, count);
        let picked = layout.nearest_stop(x).unwrap();
        let expected = brute_force_nearest(&layout, x);

        if picked != expected {
            let positions = layout.stop_positions();
            let gap = ((positions[picked] - x).abs() - (positions[expected] - x).abs()).abs();
            prop_assert!(gap < 1e-2, "picked {} expected {} at x={}", picked, expected, x);
        }
    }

    #[test]
    fn valid_index_round_trips(len in 1usize..30, raw in 0usize..30) {
        let index = raw % len;
        let mut slider: SegmentSlider<usize> =
            SegmentSlider::default().with_values((0..len).collect());

        prop_assert!(slider.set_selected_item_index(index).is_ok());
        prop_assert_eq!(slider.selected_item_index(), Some(index));
        prop_assert_eq!(slider.current_value(), Some(&index));
    }

    #[test]
    fn selection_stays_in_bounds_after_resize(
        len in 1usize..30,
        new_len in 0usize..30,
        raw in 0usize..30,
    ) {
        let mut slider: SegmentSlider<usize> =
            SegmentSlider::default().with_values((0..len).collect());
        slider.set_selected_item_index(raw % len).unwrap();

        slider.set_values((0..new_len).collect());
        match slider.selected_item_index() {
            Some(index) => prop_assert!(index < new_len),
            None => prop_assert_eq!(new_len, 0),
        }
    }
}
