// SPDX-License-Identifier: MPL-2.0
//! Canvas program that draws a [`SegmentSlider`] and turns pointer input into
//! selection changes.
//!
//! Pressing anywhere on the control picks the nearest stop; keeping the button
//! (or finger) down and dragging keeps picking, even outside the control's
//! bounds. A message is only published when the picked stop differs from the
//! current selection.

use crate::slider::layout::{self, LabelAlign, TrackLayout};
use crate::slider::SegmentSlider;
use iced::advanced::text::Alignment;
use iced::alignment::Vertical;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Text};
use iced::widget::Action;
use iced::{mouse, touch, Color, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme};

/// Pointer tracking state kept by the canvas between events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tracking {
    /// Whether a press started on the control and has not been released.
    pub is_tracking: bool,
}

impl Tracking {
    pub fn start(&mut self) {
        self.is_tracking = true;
    }

    pub fn stop(&mut self) {
        self.is_tracking = false;
    }
}

/// Pointer input relevant to the slider, in control-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Press(Point),
    Move(Point),
    Release,
}

/// Extracts the slider gesture carried by `event`, if any.
///
/// Presses only count inside `bounds`; moves are reported anywhere so a drag
/// can continue past the control's edges.
#[must_use]
pub fn gesture(event: &Event, bounds: Rectangle, cursor: mouse::Cursor) -> Option<Gesture> {
    let local = |position: Point| Point::new(position.x - bounds.x, position.y - bounds.y);

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.position_in(bounds).map(Gesture::Press)
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Gesture::Move(local(*position))),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(Gesture::Release),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => bounds
            .contains(*position)
            .then(|| Gesture::Press(local(*position))),
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Gesture::Move(local(*position)))
        }
        Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(Gesture::Release)
        }
        _ => None,
    }
}

fn text_alignment(align: LabelAlign) -> Alignment {
    match align {
        LabelAlign::Left => Alignment::Left,
        LabelAlign::Center => Alignment::Center,
        LabelAlign::Right => Alignment::Right,
    }
}

/// Canvas program borrowing the slider model for one view pass.
pub struct SliderCanvas<'a, V, Message> {
    slider: &'a SegmentSlider<V>,
    on_change: Box<dyn Fn(usize) -> Message + 'a>,
}

impl<'a, V: Clone + PartialEq, Message> SliderCanvas<'a, V, Message> {
    pub fn new(slider: &'a SegmentSlider<V>, on_change: impl Fn(usize) -> Message + 'a) -> Self {
        Self {
            slider,
            on_change: Box::new(on_change),
        }
    }

    fn layout(&self, size: Size) -> TrackLayout {
        TrackLayout::new(size.width, self.slider.style(), self.slider.len())
    }

    /// Stop picked at local `x`, if it differs from the current selection.
    fn pick(&self, x: f32, bounds: Rectangle) -> Option<usize> {
        let index = self.layout(bounds.size()).nearest_stop(x)?;
        (Some(index) != self.slider.selected_item_index()).then_some(index)
    }

    fn pick_action(&self, x: f32, bounds: Rectangle) -> Action<Message> {
        match self.pick(x, bounds) {
            Some(index) => Action::publish((self.on_change)(index)).and_capture(),
            None => Action::capture(),
        }
    }

    fn draw_track(&self, frame: &mut Frame, track: &TrackLayout) {
        let style = self.slider.style();
        let thickness = style.track_thickness.value();
        let top = track.center_y() - thickness / 2.0;

        frame.fill_rectangle(
            Point::new(track.track_start(), top),
            Size::new(track.track_width(), thickness),
            style.basic_color,
        );

        // Rectangular stops show progress as a filled bar up to the indicator
        if !style.use_circles {
            if let Some(position) = self.slider.indicator_position() {
                let end = track.x_at(position);
                frame.fill_rectangle(
                    Point::new(track.track_start(), top),
                    Size::new((end - track.track_start()).max(0.0), thickness),
                    style.selected_value_color,
                );
            }
        }
    }

    fn stop_path(&self, center: Point, selected: bool) -> Path {
        let style = self.slider.style();
        if style.use_circles {
            let radius = if selected {
                style.circles_radius_for_selected.value()
            } else {
                style.stop_item_height.value()
            };
            Path::circle(center, radius)
        } else {
            let width = style.stop_item_width.value();
            let height = style.stop_item_height.value();
            Path::rectangle(
                Point::new(center.x - width / 2.0, center.y - height / 2.0),
                Size::new(width, height),
            )
        }
    }

    fn draw_stops(&self, frame: &mut Frame, track: &TrackLayout) {
        let style = self.slider.style();
        for x in track.stop_positions() {
            let path = self.stop_path(Point::new(x, track.center_y()), false);
            frame.fill(&path, style.basic_color);
        }

        if let Some(position) = self.slider.indicator_position() {
            let center = Point::new(track.x_at(position), track.center_y());
            frame.fill(&self.stop_path(center, true), style.selected_value_color);
        }
    }

    /// Color of the label of stop `index`, or `None` when it is not drawn.
    ///
    /// With `hide_inner_labels` only the selected label is drawn. Empty labels
    /// are never drawn.
    fn label_paint(&self, index: usize) -> Option<Color> {
        let labels = self.slider.style().labels?;
        let content = self.slider.label_at(index)?;
        if content.is_empty() {
            return None;
        }

        let is_selected = Some(index) == self.slider.selected_item_index();
        match (is_selected, labels.hide_inner_labels) {
            (true, _) => Some(labels.selected_label_color),
            (false, true) => None,
            (false, false) => Some(labels.label_color),
        }
    }

    fn draw_labels(&self, frame: &mut Frame, track: &TrackLayout) {
        let style = self.slider.style();
        let Some(labels) = style.labels else {
            return;
        };

        for index in 0..self.slider.len() {
            let (Some(color), Some(content), Some(anchor)) = (
                self.label_paint(index),
                self.slider.label_at(index),
                track.label_anchor(index, style),
            ) else {
                continue;
            };
            frame.fill_text(Text {
                content: content.to_string(),
                position: Point::new(anchor.x, anchor.y),
                max_width: anchor.max_width,
                color,
                size: labels.font.size.value().into(),
                font: labels.font.to_font(),
                align_x: text_alignment(anchor.align),
                align_y: Vertical::Top,
                ..Text::default()
            });
        }
    }
}

impl<V: Clone + PartialEq, Message> canvas::Program<Message> for SliderCanvas<'_, V, Message> {
    type State = Tracking;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match gesture(event, bounds, cursor)? {
            // A release ends tracking even if the values were cleared mid-drag
            Gesture::Release if state.is_tracking => {
                state.stop();
                Some(Action::capture())
            }
            _ if self.slider.is_empty() => None,
            Gesture::Press(position) => {
                state.start();
                Some(self.pick_action(position.x, bounds))
            }
            Gesture::Move(position) if state.is_tracking => {
                Some(self.pick_action(position.x, bounds))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if !self.slider.is_empty() {
            let track = self.layout(bounds.size());
            self.draw_track(&mut frame, &track);
            self.draw_stops(&mut frame, &track);
            self.draw_labels(&mut frame, &track);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_tracking {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) && !self.slider.is_empty() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Wraps the slider in a full-width canvas sized to its preferred height.
pub fn view<'a, V, Message>(
    slider: &'a SegmentSlider<V>,
    on_change: impl Fn(usize) -> Message + 'a,
) -> Element<'a, Message>
where
    V: Clone + PartialEq + 'a,
    Message: 'a,
{
    let height = layout::preferred_height(slider.style());
    Canvas::new(SliderCanvas::new(slider, on_change))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::{LabelStyle, SliderStyle};
    use iced::widget::canvas::Program as _;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(100.0, 50.0), Size::new(300.0, 40.0))
    }

    fn labeled_slider(hide_inner_labels: bool) -> SegmentSlider<i32> {
        let style = SliderStyle {
            labels: Some(LabelStyle {
                hide_inner_labels,
                ..LabelStyle::default()
            }),
            ..SliderStyle::default()
        };
        SegmentSlider::new(style)
            .with_values(vec![10, 20, 30])
            .with_labels(vec!["Low".into(), "Mid".into(), "High".into()])
    }

    fn published(action: Option<Action<usize>>) -> Option<usize> {
        action.and_then(|action| action.into_inner().0)
    }

    fn press_at(x: f32) -> (Event, mouse::Cursor) {
        (
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            mouse::Cursor::Available(Point::new(bounds().x + x, bounds().y + 10.0)),
        )
    }

    fn move_to(x: f32) -> Event {
        Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(bounds().x + x, bounds().y + 10.0),
        })
    }

    fn release() -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    #[test]
    fn press_inside_bounds_is_local() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(250.0, 60.0));
        assert_eq!(
            gesture(&event, bounds(), cursor),
            Some(Gesture::Press(Point::new(150.0, 10.0)))
        );
    }

    #[test]
    fn press_outside_bounds_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(10.0, 10.0));
        assert_eq!(gesture(&event, bounds(), cursor), None);
    }

    #[test]
    fn right_click_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        let cursor = mouse::Cursor::Available(Point::new(250.0, 60.0));
        assert_eq!(gesture(&event, bounds(), cursor), None);
    }

    #[test]
    fn moves_are_reported_outside_bounds() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(600.0, 0.0),
        });
        assert_eq!(
            gesture(&event, bounds(), mouse::Cursor::Unavailable),
            Some(Gesture::Move(Point::new(500.0, -50.0)))
        );
    }

    #[test]
    fn release_is_detected() {
        let event = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert_eq!(
            gesture(&event, bounds(), mouse::Cursor::Unavailable),
            Some(Gesture::Release)
        );
    }

    #[test]
    fn tracking_start_stop() {
        let mut tracking = Tracking::default();
        tracking.start();
        assert!(tracking.is_tracking);
        tracking.stop();
        assert!(!tracking.is_tracking);
    }

    #[test]
    fn pick_skips_current_selection() {
        let slider = SegmentSlider::new(SliderStyle::default().without_labels())
            .with_values(vec![1, 2, 3]);
        let canvas = SliderCanvas::new(&slider, |index| index);
        let track = canvas.layout(bounds().size());

        let first = track.stop_x(0).unwrap();
        let last = track.stop_x(2).unwrap();
        assert_eq!(canvas.pick(first, bounds()), None);
        assert_eq!(canvas.pick(last, bounds()), Some(2));
    }

    #[test]
    fn press_drag_release_publishes_nearest_stops() {
        let slider = SegmentSlider::new(SliderStyle::default().without_labels())
            .with_values(vec![1, 2, 3]);
        let program = SliderCanvas::new(&slider, |index| index);
        let track = program.layout(bounds().size());
        let mut state = Tracking::default();
        let idle = mouse::Cursor::Unavailable;

        // Moves before a press are ignored
        let action = program.update(&mut state, &move_to(150.0), bounds(), idle);
        assert!(action.is_none());

        let middle = track.stop_x(1).unwrap();
        let (press, cursor) = press_at(middle);
        let action = program.update(&mut state, &press, bounds(), cursor);
        assert!(state.is_tracking);
        assert_eq!(published(action), track.nearest_stop(middle));
        assert_eq!(track.nearest_stop(middle), Some(1));

        // Dragging past the right edge keeps picking the last stop
        let action = program.update(&mut state, &move_to(500.0), bounds(), idle);
        assert_eq!(published(action), Some(2));

        let action = program.update(&mut state, &release(), bounds(), idle);
        assert!(action.is_some());
        assert_eq!(published(action), None);
        assert!(!state.is_tracking);

        let action = program.update(&mut state, &move_to(middle), bounds(), idle);
        assert!(action.is_none());
    }

    #[test]
    fn press_on_selected_stop_publishes_nothing() {
        let slider = SegmentSlider::new(SliderStyle::default()).with_values(vec![1, 2, 3]);
        let program = SliderCanvas::new(&slider, |index| index);
        let first = program.layout(bounds().size()).stop_x(0).unwrap();
        let mut state = Tracking::default();

        let (press, cursor) = press_at(first);
        let action = program.update(&mut state, &press, bounds(), cursor);
        assert!(action.is_some());
        assert_eq!(published(action), None);
    }

    #[test]
    fn release_ends_tracking_on_empty_slider() {
        let slider: SegmentSlider<i32> = SegmentSlider::default();
        let program = SliderCanvas::new(&slider, |index| index);
        let mut state = Tracking { is_tracking: true };

        let cursor = mouse::Cursor::Unavailable;
        let action = program.update(&mut state, &release(), bounds(), cursor);
        assert!(action.is_some());
        assert!(!state.is_tracking);
        assert_eq!(
            program.mouse_interaction(&state, bounds(), mouse::Cursor::Unavailable),
            mouse::Interaction::default()
        );
    }

    #[test]
    fn selected_label_uses_selected_color() {
        let mut slider = labeled_slider(false);
        slider.set_selected_item_index(1).unwrap();
        let labels = slider.style().labels.unwrap();
        let program = SliderCanvas::new(&slider, |index| index);

        assert_eq!(program.label_paint(1), Some(labels.selected_label_color));
        assert_eq!(program.label_paint(0), Some(labels.label_color));
        assert_eq!(program.label_paint(2), Some(labels.label_color));
        assert_eq!(program.label_paint(3), None);
    }

    #[test]
    fn hide_inner_labels_draws_only_selected_label() {
        let mut slider = labeled_slider(true);
        slider.set_selected_item_index(1).unwrap();
        let labels = slider.style().labels.unwrap();
        let program = SliderCanvas::new(&slider, |index| index);

        assert_eq!(program.label_paint(0), None);
        assert_eq!(program.label_paint(1), Some(labels.selected_label_color));
        assert_eq!(program.label_paint(2), None);
    }

    #[test]
    fn labels_are_not_painted_without_label_style_or_text() {
        let compact = SegmentSlider::new(SliderStyle::default().without_labels())
            .with_values(vec![10, 20])
            .with_labels(vec!["Low".into(), "High".into()]);
        let program = SliderCanvas::new(&compact, |index| index);
        assert_eq!(program.label_paint(0), None);

        let partial = labeled_slider(false).with_labels(vec!["Low".into()]);
        let program = SliderCanvas::new(&partial, |index| index);
        assert!(program.label_paint(0).is_some());
        assert_eq!(program.label_paint(1), None);
    }

    #[test]
    fn label_alignment_maps_to_text_alignment() {
        assert_eq!(text_alignment(LabelAlign::Left), Alignment::Left);
        assert_eq!(text_alignment(LabelAlign::Right), Alignment::Right);
    }
}
