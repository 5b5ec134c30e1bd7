// SPDX-License-Identifier: MPL-2.0
//! Message handlers behind `App::update`.
//!
//! Pointer gestures, keyboard shortcuts, the tick, and async completions
//! are folded into the interaction controller here. Every handler is
//! synchronous except the share request, which starts a one-shot task.

use std::time::Instant;

use iced::Task;

use crate::error::Error;
use crate::interaction::{Effect, InteractionEvent, PointerId};
use crate::share::{self, ShareMethod, ShareOutcome, ShareRequest};
use crate::ui::card_art::CardArt;
use crate::ui::{card_pane, notifications};
use crate::viewer::ViewerPort;

use super::{App, Message, StartupError, VIEWER_READY_TIMEOUT};

/// Feeds one pointer gesture from the card stage into the controller.
///
/// Horizontal travel is also applied to the card surface as a rotation;
/// the resulting orbit is fed back so the gesture classifier sees both
/// the pixel travel and the camera movement it produced.
pub(super) fn handle_card_pane(app: &mut App, message: card_pane::Message) -> Task<Message> {
    let now = Instant::now();
    match message {
        card_pane::Message::Pressed(position) => {
            app.last_cursor = Some(position);
            let effects = app.controller.handle(
                InteractionEvent::PointerPressed {
                    pointer: PointerId::MOUSE,
                    position,
                },
                now,
            );
            apply_effects(app, effects);
        }
        card_pane::Message::Moved(position) => {
            if app.controller.has_open_gesture() {
                let dx = app.last_cursor.map_or(0.0, |last| position.x - last.x);
                if dx != 0.0 {
                    if let Some(orbit) = app.controller.viewer_mut().apply_drag_delta(dx) {
                        let effects = app
                            .controller
                            .handle(InteractionEvent::OrbitChanged { orbit }, now);
                        apply_effects(app, effects);
                    }
                }
                let effects = app.controller.handle(
                    InteractionEvent::PointerMoved {
                        pointer: PointerId::MOUSE,
                        position,
                    },
                    now,
                );
                apply_effects(app, effects);
            }
            app.last_cursor = Some(position);
        }
        card_pane::Message::Released => {
            app.last_cursor = None;
            let effects = app.controller.handle(
                InteractionEvent::PointerReleased {
                    pointer: PointerId::MOUSE,
                },
                now,
            );
            apply_effects(app, effects);
        }
        card_pane::Message::Canceled => {
            app.last_cursor = None;
            let effects = app.controller.handle(
                InteractionEvent::PointerCanceled {
                    pointer: PointerId::MOUSE,
                },
                now,
            );
            apply_effects(app, effects);
        }
    }
    Task::none()
}

/// Advances everything clock-driven and polls viewer readiness.
pub(super) fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    if app.startup_error.is_none()
        && !app.controller.viewer().is_ready()
        && now.saturating_duration_since(app.launched_at) > VIEWER_READY_TIMEOUT
    {
        log::error!("viewer not ready after {:?}, giving up", VIEWER_READY_TIMEOUT);
        app.startup_error = Some(StartupError::ViewerTimeout);
        return Task::none();
    }

    let effects = app.controller.handle(InteractionEvent::Tick, now);
    apply_effects(app, effects);
    app.notifications.tick();
    Task::none()
}

/// Asks the controller to leave the reveal video. Ignored on any other
/// surface.
pub(super) fn handle_skip(app: &mut App) -> Task<Message> {
    let effects = app
        .controller
        .handle(InteractionEvent::SkipRequested, Instant::now());
    apply_effects(app, effects);
    Task::none()
}

/// Starts the share pipeline unless the surface is busy or a share is
/// already running.
pub(super) fn handle_share_requested(app: &mut App) -> Task<Message> {
    if app.share_in_flight
        || !app.controller.reveal().is_model()
        || app.controller.is_interaction_locked()
    {
        log::debug!("share request ignored, surface is busy");
        return Task::none();
    }
    let Some(manifest) = app.manifest.clone() else {
        return Task::none();
    };

    app.share_in_flight = true;
    app.notifications.clear_share_results();

    let caption = share::text::share_caption(&app.i18n, &app.config.share, &manifest);
    let share_config = app.config.share.clone();
    Task::perform(
        async move {
            let image_png = match share::image::share_image_bytes(&manifest, &share_config) {
                Ok(bytes) => bytes,
                Err(err) => {
                    log::warn!("share image unavailable: {}", err);
                    return ShareOutcome::Failed {
                        detail: err.to_string(),
                    };
                }
            };
            share::run_share(
                ShareRequest {
                    text: caption,
                    image_png,
                },
                share::desktop_targets(),
            )
            .await
        },
        Message::ShareCompleted,
    )
}

/// Maps the share outcome to a notification. The confirmation is dropped
/// when the reveal surface changed while the pipeline ran.
pub(super) fn handle_share_completed(app: &mut App, outcome: ShareOutcome) -> Task<Message> {
    app.share_in_flight = false;
    if !app.controller.reveal().is_model() {
        log::debug!("share finished off the model surface, outcome not shown");
        return Task::none();
    }

    match outcome {
        ShareOutcome::Delivered { method, detail } => {
            let notification = match method {
                ShareMethod::Native => {
                    notifications::Notification::success("notification-share-native")
                }
                ShareMethod::Clipboard => {
                    notifications::Notification::success("notification-share-clipboard")
                }
                ShareMethod::Download => {
                    notifications::Notification::success("notification-share-download")
                        .with_arg("path", detail.unwrap_or_default())
                }
            };
            app.notifications.push(notification);
        }
        ShareOutcome::Cancelled => {}
        ShareOutcome::Failed { detail } => {
            log::warn!("share failed: {}", detail);
            app.notifications
                .push(notifications::Notification::error("notification-share-failed"));
        }
    }
    Task::none()
}

pub(super) fn handle_card_art_loaded(
    app: &mut App,
    result: Result<CardArt, Error>,
) -> Task<Message> {
    match result {
        Ok(art) => {
            app.card_art = Some(art);
            app.controller.viewer_mut().mark_ready();
            log::info!("card art decoded, viewer ready");
        }
        Err(err) => {
            log::error!("card art failed to load: {}", err);
            app.startup_error = Some(StartupError::Load(err));
        }
    }
    Task::none()
}

/// Pauses the reveal when focus leaves and drops any open gesture; the
/// platform will not deliver the matching release.
pub(super) fn handle_focus_changed(app: &mut App, focused: bool) -> Task<Message> {
    if focused {
        app.controller.resume_playback();
        return Task::none();
    }

    app.controller.pause_playback();
    if app.controller.has_open_gesture() {
        app.last_cursor = None;
        let effects = app.controller.handle(
            InteractionEvent::PointerCanceled {
                pointer: PointerId::MOUSE,
            },
            Instant::now(),
        );
        apply_effects(app, effects);
    }
    Task::none()
}

fn apply_effects(app: &mut App, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Haptic(cue) => {
                if app.config.effects.haptics_enabled() {
                    app.haptics.pulse(cue);
                }
            }
            Effect::Warn { message_key } => {
                app.notifications
                    .push(notifications::Notification::warning(message_key));
            }
        }
    }
}
