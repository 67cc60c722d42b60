// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Frame interval for toast and scroll animations.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Routes window resizes, which drive the navbar layout.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Creates a periodic tick while a toast is attached or a scroll is animating.
pub fn create_tick_subscription(has_notifications: bool, scrolling: bool) -> Subscription<Message> {
    if has_notifications || scrolling {
        time::every(ANIMATION_FRAME).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
