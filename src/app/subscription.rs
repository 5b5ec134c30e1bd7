// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts and window focus arrive through the runtime event
//! stream; everything clock-driven (timers, fades, particles, playback)
//! rides on a fixed-rate tick. Pointer input over the card does not pass
//! through here; the card stage canvas reports it directly.

use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Tick period for the interaction clock. 16 ms tracks the 60 Hz frame
/// cadence the fades and particles are tuned for.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes keyboard shortcuts and window focus changes.
///
/// Escape skips the reveal video; `s` starts a share. Keyboard events a
/// widget already captured are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Focused) => Some(Message::WindowFocusChanged(true)),
        event::Event::Window(window::Event::Unfocused) => Some(Message::WindowFocusChanged(false)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match status {
                event::Status::Captured => None,
                event::Status::Ignored => match key {
                    keyboard::Key::Named(keyboard::key::Named::Escape) => {
                        Some(Message::SkipRequested)
                    }
                    keyboard::Key::Character(ref c)
                        if c.as_str().eq_ignore_ascii_case("s")
                            && !modifiers.command()
                            && !modifiers.alt() =>
                    {
                        Some(Message::ShareRequested)
                    }
                    _ => None,
                },
            }
        }
        _ => None,
    })
}

/// Creates the periodic tick subscription.
///
/// Stops once a blocking startup error is showing; nothing animated
/// remains on that screen.
pub fn create_tick_subscription(halted: bool) -> Subscription<Message> {
    if halted {
        Subscription::none()
    } else {
        time::every(TICK_INTERVAL).map(Message::Tick)
    }
}
