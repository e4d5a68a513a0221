// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources: Escape key presses (dismissing the name prompt or the
//! album screen) and a periodic tick that only runs while notifications
//! are on screen, driving their auto-dismiss timers.

use super::{App, Message};
use iced::keyboard::{self, key};
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between notification auto-dismiss checks.
const NOTIFICATION_TICK: Duration = Duration::from_millis(500);

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    let keys = keyboard::on_key_press(|pressed, _modifiers| match pressed {
        keyboard::Key::Named(key::Named::Escape) => Some(Message::EscapePressed),
        _ => None,
    });

    if app.notifications.has_notifications() {
        Subscription::batch([keys, time::every(NOTIFICATION_TICK).map(Message::Tick)])
    } else {
        keys
    }
}
