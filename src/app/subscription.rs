// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Arrow keys step the slider; a frame tick runs only while the selection
//! indicator is animating.

use super::Message;
use crate::config::ANIMATION_FRAME_MS;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Maps an uncaptured key press to a slider step.
pub fn key_step(event: &event::Event, status: event::Status) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
            Key::Named(Named::ArrowLeft | Named::ArrowDown) => Some(Message::Step(-1)),
            Key::Named(Named::ArrowRight | Named::ArrowUp) => Some(Message::Step(1)),
            Key::Named(Named::Home) => Some(Message::Step(isize::MIN)),
            Key::Named(Named::End) => Some(Message::Step(isize::MAX)),
            _ => None,
        },
        _ => None,
    }
}

/// Creates the keyboard subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| key_step(&event, status))
}

/// Creates the animation frame subscription.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(ANIMATION_FRAME_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{key, Location, Modifiers};

    fn key_press(named: Named) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modified_key: Key::Named(named),
            physical_key: key::Physical::Code(key::Code::ArrowLeft),
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn arrows_step_the_slider() {
        assert!(matches!(
            key_step(&key_press(Named::ArrowLeft), event::Status::Ignored),
            Some(Message::Step(-1))
        ));
        assert!(matches!(
            key_step(&key_press(Named::ArrowRight), event::Status::Ignored),
            Some(Message::Step(1))
        ));
    }

    #[test]
    fn captured_keys_are_ignored() {
        assert!(key_step(&key_press(Named::ArrowLeft), event::Status::Captured).is_none());
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(key_step(&key_press(Named::Escape), event::Status::Ignored).is_none());
    }
}
