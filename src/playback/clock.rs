// SPDX-License-Identifier: MPL-2.0
//! Clock-driven playback used by the desktop binary.
//!
//! The reveal presentation ships as a poster frame plus a duration in the
//! card manifest. This surface plays that presentation by accumulating tick
//! time: the UI animates progress against `position_secs / duration_secs`
//! and the state machine sees `Ended` exactly when the configured duration
//! has elapsed.

use std::time::Instant;

use super::{PlaybackError, PlaybackState, PlaybackSurface};

#[derive(Debug)]
pub struct ClockPlayback {
    duration_secs: f64,
    state: PlaybackState,
    last_advance: Option<Instant>,
}

impl ClockPlayback {
    /// `duration_secs` comes from the card manifest and is validated
    /// positive when the manifest loads.
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs,
            state: PlaybackState::Stopped,
            last_advance: None,
        }
    }
}

impl PlaybackSurface for ClockPlayback {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.state = match self.state {
            PlaybackState::Paused { position_secs } => PlaybackState::Playing { position_secs },
            PlaybackState::Playing { position_secs } => PlaybackState::Playing { position_secs },
            PlaybackState::Stopped | PlaybackState::Ended => PlaybackState::Playing {
                position_secs: 0.0,
            },
        };
        Ok(())
    }

    fn pause(&mut self) {
        if let PlaybackState::Playing { position_secs } = self.state {
            self.state = PlaybackState::Paused { position_secs };
        }
    }

    fn rewind(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    fn advance(&mut self, now: Instant) {
        // Consume elapsed time in every state so play() never inherits a
        // stale span from before it was called.
        let elapsed = match self.last_advance.replace(now) {
            Some(previous) => now.saturating_duration_since(previous),
            None => return,
        };

        if let PlaybackState::Playing { position_secs } = self.state {
            let position = position_secs + elapsed.as_secs_f64();
            self.state = if position >= self.duration_secs {
                PlaybackState::Ended
            } else {
                PlaybackState::Playing {
                    position_secs: position,
                }
            };
        }
    }

    fn state(&self) -> PlaybackState {
        self.state
    }

    fn duration_secs(&self) -> f64 {
        self.duration_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn advance_by(playback: &mut ClockPlayback, t0: Instant, offsets_ms: &[u64]) {
        for &offset in offsets_ms {
            playback.advance(t0 + Duration::from_millis(offset));
        }
    }

    #[test]
    fn accumulates_position_only_while_playing() {
        let mut playback = ClockPlayback::new(8.0);
        let t0 = Instant::now();

        // Stopped: ticks consume time but the position stays put
        advance_by(&mut playback, t0, &[0, 1_000]);
        assert_eq!(playback.state(), PlaybackState::Stopped);

        playback.play().unwrap();
        advance_by(&mut playback, t0, &[2_000, 5_000]);
        assert_eq!(
            playback.state(),
            PlaybackState::Playing { position_secs: 4.0 }
        );
    }

    #[test]
    fn ends_when_position_reaches_duration() {
        let mut playback = ClockPlayback::new(2.0);
        let t0 = Instant::now();
        playback.advance(t0);
        playback.play().unwrap();
        // Single jump to the exact duration, no float accumulation
        advance_by(&mut playback, t0, &[2_000]);
        assert!(playback.state().has_ended());

        let mut shy = ClockPlayback::new(2.0);
        shy.advance(t0);
        shy.play().unwrap();
        advance_by(&mut shy, t0, &[1_999]);
        assert!(shy.state().is_playing());
    }

    #[test]
    fn pause_freezes_position_and_play_resumes_it() {
        let mut playback = ClockPlayback::new(10.0);
        let t0 = Instant::now();
        playback.advance(t0);
        playback.play().unwrap();
        advance_by(&mut playback, t0, &[3_000]);

        playback.pause();
        assert_eq!(
            playback.state(),
            PlaybackState::Paused { position_secs: 3.0 }
        );

        // Time passing while paused does not move the position
        advance_by(&mut playback, t0, &[7_000]);
        assert!(playback.state().is_paused());

        playback.play().unwrap();
        advance_by(&mut playback, t0, &[8_000]);
        assert_eq!(
            playback.state(),
            PlaybackState::Playing { position_secs: 4.0 }
        );
    }

    #[test]
    fn rewind_returns_to_stopped_from_any_state() {
        let mut playback = ClockPlayback::new(1.0);
        let t0 = Instant::now();
        playback.advance(t0);
        playback.play().unwrap();
        advance_by(&mut playback, t0, &[1_500]);
        assert!(playback.state().has_ended());

        playback.rewind();
        assert_eq!(playback.state(), PlaybackState::Stopped);
        assert_eq!(playback.state().position_secs(), 0.0);
    }

    #[test]
    fn play_after_end_restarts_from_zero() {
        let mut playback = ClockPlayback::new(1.0);
        let t0 = Instant::now();
        playback.advance(t0);
        playback.play().unwrap();
        advance_by(&mut playback, t0, &[2_000]);
        assert!(playback.state().has_ended());

        playback.play().unwrap();
        assert_eq!(
            playback.state(),
            PlaybackState::Playing { position_secs: 0.0 }
        );
    }

    #[test]
    fn first_advance_after_construction_only_baselines() {
        let mut playback = ClockPlayback::new(10.0);
        let t0 = Instant::now();
        playback.play().unwrap();

        // No prior tick: this one establishes the baseline
        playback.advance(t0 + Duration::from_secs(100));
        assert_eq!(playback.state().position_secs(), 0.0);
    }
}
