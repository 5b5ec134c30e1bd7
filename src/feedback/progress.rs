// SPDX-License-Identifier: MPL-2.0
//! Radial hold-progress indicator state.
//!
//! Starts the moment a hold is recognized and fills over the video
//! activation delay, so reaching full coincides with the reveal starting.
//! The fill fraction is recomputed on every tick from the injected clock and
//! cached for the view; the view never reads the wall clock itself.

use std::time::{Duration, Instant};

use super::haptics::HapticCue;

#[derive(Debug, Clone, Copy)]
struct ProgressWindow {
    started_at: Instant,
    total: Duration,
    completion_reported: bool,
}

/// Fill state of the hold-progress ring.
#[derive(Debug, Default)]
pub struct HoldProgress {
    window: Option<ProgressWindow>,
    fraction: f32,
}

impl HoldProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the fill from zero over `total`.
    pub fn begin(&mut self, now: Instant, total: Duration) {
        self.window = Some(ProgressWindow {
            started_at: now,
            total,
            completion_reported: false,
        });
        self.fraction = 0.0;
    }

    /// Hides the indicator. Idempotent.
    pub fn cancel(&mut self) {
        self.window = None;
        self.fraction = 0.0;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.window.is_some()
    }

    /// Fill fraction in [0, 1] as of the last tick.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Recomputes the fill fraction. Returns the completion cue exactly once
    /// when the fill first reaches full; the indicator stays visible at full
    /// until canceled.
    pub fn tick(&mut self, now: Instant) -> Option<HapticCue> {
        let window = self.window.as_mut()?;

        let elapsed = now.saturating_duration_since(window.started_at);
        self.fraction = if window.total.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / window.total.as_secs_f32()).min(1.0)
        };

        if self.fraction >= 1.0 && !window.completion_reported {
            window.completion_reported = true;
            return Some(HapticCue::ProgressComplete);
        }
        None
    }
}
