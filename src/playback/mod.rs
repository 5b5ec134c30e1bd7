// SPDX-License-Identifier: MPL-2.0
//! Playback capability consumed by the reveal state machine.
//!
//! The interaction core never decodes media. It drives a [`PlaybackSurface`]
//! through play/pause/rewind and watches its [`PlaybackState`] every tick to
//! detect the natural end of the reveal. The desktop binary plugs in
//! [`ClockPlayback`], which advances a poster presentation against the
//! injected clock; tests plug in scripted fakes.

pub mod clock;

pub use clock::ClockPlayback;

use std::fmt;
use std::time::Instant;

/// Where the reveal video is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackState {
    /// No playback. Initial state and the state after a rewind.
    Stopped,

    /// Actively playing. Contains the current position in seconds.
    Playing { position_secs: f64 },

    /// Paused at a position; `play` resumes from it.
    Paused { position_secs: f64 },

    /// Playback ran to the end of the clip.
    Ended,
}

impl PlaybackState {
    /// Current position in seconds.
    pub fn position_secs(&self) -> f64 {
        match self {
            Self::Stopped => 0.0,
            Self::Playing { position_secs } | Self::Paused { position_secs } => *position_secs,
            Self::Ended => f64::INFINITY,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused { .. })
    }

    pub fn has_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }
}

/// Failure to start playback. Transient: the card stays on the video
/// surface and the user can skip back manually.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackError {
    StartRejected(String),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::StartRejected(detail) => {
                write!(f, "playback start rejected: {}", detail)
            }
        }
    }
}

impl std::error::Error for PlaybackError {}

/// Operations the reveal state machine requires from the video surface.
pub trait PlaybackSurface {
    /// Starts or resumes playback. From `Ended` this restarts at zero.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pauses at the current position. No-op unless playing.
    fn pause(&mut self);

    /// Stops playback and seeks back to the beginning.
    fn rewind(&mut self);

    /// Advances the position against the injected clock. Called every tick
    /// regardless of state so elapsed time is never replayed.
    fn advance(&mut self, now: Instant);

    fn state(&self) -> PlaybackState;

    /// Total clip length in seconds.
    fn duration_secs(&self) -> f64;
}
