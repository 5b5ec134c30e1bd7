// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use std::time::Instant;

use crate::error::Error;
use crate::share::ShareOutcome;
use crate::ui::card_art::CardArt;
use crate::ui::{card_pane, notifications, video_pane};

/// Top-level messages consumed by `App::update`. The variants forward
/// pane-level messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer gestures reported by the card stage.
    CardPane(card_pane::Message),
    /// Controls on the reveal video surface.
    VideoPane(video_pane::Message),
    /// Periodic tick driving timers, fades, particles, and playback.
    Tick(Instant),
    /// The user asked to share the card (share button or `s`).
    ShareRequested,
    /// The share pipeline finished.
    ShareCompleted(ShareOutcome),
    /// The user asked to leave the reveal video early (Escape).
    SkipRequested,
    /// Card images finished decoding.
    CardArtLoaded(Result<CardArt, Error>),
    /// The window gained or lost input focus.
    WindowFocusChanged(bool),
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Card bundle directory to open. Defaults to the bundled sample card.
    pub card_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `HOLOCARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
