// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window geometry always flows to the gallery. Escape is only listened
//! for while the lightbox is on screen, and animation frames are only
//! requested while a tween is in flight.

use super::Message;
use crate::ui::masonry;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval between animation frames (about 60 per second).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window open and resize events to the gallery.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::Gallery(masonry::Message::ViewportChanged(size)))
        }
        _ => None,
    })
}

/// Listens for Escape while the lightbox is visible.
pub fn create_escape_subscription(lightbox_visible: bool) -> Subscription<Message> {
    if !lightbox_visible {
        return Subscription::none();
    }
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Periodic tick driving the tweens.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
