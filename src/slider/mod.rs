// SPDX-License-Identifier: MPL-2.0
//! Segmented slider component.
//!
//! [`SegmentSlider`] owns a list of stop values, their optional labels, the
//! selected index and the visual style. It is the model half of the control:
//! the host application keeps it in its state, feeds it selection changes and
//! frame ticks, and renders it through [`SegmentSlider::view`].
//!
//! # Selection policy
//!
//! - An empty slider has no selection and no current value.
//! - Requesting an index past the last stop is refused and keeps the previous
//!   selection.
//! - Replacing the values with a shorter list clamps the selection to the last
//!   stop.
//! - Animated selection changes update the logical selection immediately; only
//!   the drawn indicator travels.
//!
//! # Examples
//!
//! ```
//! use segment_slider::slider::{SegmentSlider, SliderStyle};
//!
//! let mut slider = SegmentSlider::new(SliderStyle::default())
//!     .with_values(vec![10, 20, 30])
//!     .with_labels(vec!["Low".into(), "Mid".into(), "High".into()]);
//!
//! slider.set_selected_item_index(1).unwrap();
//! assert_eq!(slider.current_value(), Some(&20));
//! assert_eq!(slider.label_at(1), Some("Mid"));
//! ```

pub mod animation;
pub mod layout;
pub mod selection;
pub mod stops;
pub mod style;

pub use animation::SelectionAnimation;
pub use layout::{LabelAlign, LabelAnchor, TrackLayout};
pub use selection::Selection;
pub use stops::StopList;
pub use style::{FontFamily, LabelFont, LabelStyle, SliderStyle};

use crate::error::{Result, SelectionError};
use iced::Element;
use std::time::Instant;

/// A horizontal slider that snaps to a fixed list of stop points.
#[derive(Debug, Clone)]
pub struct SegmentSlider<V> {
    stops: StopList<V>,
    selection: Selection,
    style: SliderStyle,
    animation: Option<SelectionAnimation>,
}

impl<V: Clone + PartialEq> SegmentSlider<V> {
    /// Creates an empty slider with the given style.
    #[must_use]
    pub fn new(style: SliderStyle) -> Self {
        Self {
            stops: StopList::default(),
            selection: Selection::default(),
            style,
            animation: None,
        }
    }

    #[must_use]
    pub fn with_values(mut self, values: Vec<V>) -> Self {
        self.set_values(values);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.set_labels(labels);
        self
    }

    /// Replaces the stop values.
    ///
    /// The selection moves to the first stop if there was none, or to the last
    /// stop if the old index no longer exists. Any running animation stops.
    pub fn set_values(&mut self, values: Vec<V>) {
        self.stops.set_values(values);
        self.animation = None;
        if self.selection.fit_to_len(self.stops.len()) {
            tracing::debug!(
                index = ?self.selection.index(),
                len = self.stops.len(),
                "selection adjusted after values changed"
            );
        }
    }

    /// Replaces the stop labels. Missing labels are drawn as empty text.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.stops.set_labels(labels);
    }

    #[must_use]
    pub fn values(&self) -> &[V] {
        self.stops.values()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        self.stops.labels()
    }

    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.stops.label_at(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[must_use]
    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
    }

    /// Selected stop index, or `None` when the slider has no values.
    #[must_use]
    pub fn selected_item_index(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Value of the selected stop.
    #[must_use]
    pub fn current_value(&self) -> Option<&V> {
        self.selection
            .index()
            .and_then(|index| self.stops.value_at(index))
    }

    /// Selects `index` without animation.
    ///
    /// Returns `Ok(true)` if the selection changed.
    pub fn set_selected_item_index(&mut self, index: usize) -> Result<bool> {
        self.set_selected_item_index_animated(index, false, Instant::now())
    }

    /// Selects `index`, animating the indicator when `animated` is set.
    ///
    /// The selection itself changes immediately. Re-selecting the current
    /// index does nothing, so no new animation starts.
    pub fn set_selected_item_index_animated(
        &mut self,
        index: usize,
        animated: bool,
        now: Instant,
    ) -> Result<bool> {
        let from = self.indicator_position();
        let changed = self
            .selection
            .select(index, self.stops.len())
            .inspect_err(|err| tracing::debug!(%err, "selection request refused"))?;

        if !changed {
            return Ok(false);
        }

        let duration = self.style.animation_duration;
        self.animation = match from {
            Some(from) if animated && !duration.is_instant() => Some(SelectionAnimation::new(
                from,
                index,
                now,
                duration.as_duration(),
            )),
            _ => None,
        };
        Ok(true)
    }

    /// Selects the first stop whose value equals `value`.
    pub fn select_value(&mut self, value: &V, animated: bool, now: Instant) -> Result<bool> {
        let index = self
            .stops
            .position_of(value)
            .ok_or(SelectionError::UnknownValue)?;
        self.set_selected_item_index_animated(index, animated, now)
    }

    /// Moves the selection `delta` stops, stopping at the first or last stop.
    pub fn step(&mut self, delta: isize, animated: bool, now: Instant) -> Result<bool> {
        let mut next = self.selection;
        next.step(delta, self.stops.len())?;
        let target = next.index().ok_or(SelectionError::Empty)?;
        self.set_selected_item_index_animated(target, animated, now)
    }

    /// Advances the indicator animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(animation) = self.animation.as_mut() {
            animation.advance(now);
            if animation.is_finished() {
                self.animation = None;
            }
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Fractional stop position where the selection indicator is drawn.
    #[must_use]
    pub fn indicator_position(&self) -> Option<f32> {
        match self.animation {
            Some(animation) => Some(animation.position()),
            None => self.selection.index().map(|index| index as f32),
        }
    }

    /// Builds the widget; `on_change` receives the stop index picked by the pointer.
    pub fn view<'a, Message: 'a>(
        &'a self,
        on_change: impl Fn(usize) -> Message + 'a,
    ) -> Element<'a, Message>
    where
        V: 'a,
    {
        crate::ui::widgets::segment_slider::view(self, on_change)
    }
}

impl<V: Clone + PartialEq> Default for SegmentSlider<V> {
    fn default() -> Self {
        Self::new(SliderStyle::default())
    }
}
