// SPDX-License-Identifier: MPL-2.0
//! State enums for hold recognition and the model/video reveal.

use std::time::Instant;

/// Where the user is on the path from pressing to a recognized hold.
///
/// State transitions:
/// - `Idle` -> `Pending`: an accepted pointer-down opens a gesture.
/// - `Pending` -> `Active`: the hold-initiation timer fires before the
///   pointer moved far enough to count as a drag.
/// - `Pending` -> `Idle`: drag confirmation or an early release.
/// - `Active` -> `Idle`: release, cancel, or the video taking over.
///
/// A confirmed drag never re-enters `Pending`; the pointer has to lift and
/// press again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldState {
    /// No hold in progress.
    Idle,
    /// Pointer is down, waiting for the hold-initiation timer.
    Pending { pressed_at: Instant },
    /// The hold was recognized; feedback is running and video activation is
    /// scheduled.
    Active { confirmed_at: Instant },
}

impl HoldState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, HoldState::Idle)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, HoldState::Pending { .. })
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, HoldState::Active { .. })
    }
}

/// The two surfaces a transition can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealSurface {
    Model,
    Video,
}

/// Which surface the card is currently presenting.
///
/// State transitions:
/// - `Model` -> `Transitioning { to: Video }`: video activation fires.
/// - `Transitioning { to: Video }` -> `Video`: the fade completes and
///   playback starts.
/// - `Video` -> `Transitioning { to: Model }`: playback ends or is skipped.
/// - `Transitioning { to: Model }` -> `Model`: the fade completes.
///
/// While `Transitioning`, the interaction lock is held: no new gesture can
/// open and no other transition can start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealState {
    /// The 3D model is showing and interactive.
    Model,
    /// Cross-fading towards `to`.
    Transitioning { to: RevealSurface, started_at: Instant },
    /// The reveal video is showing.
    Video,
}

impl RevealState {
    #[must_use]
    pub fn is_model(&self) -> bool {
        matches!(self, RevealState::Model)
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self, RevealState::Video)
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self, RevealState::Transitioning { .. })
    }

    /// Target surface while transitioning, `None` otherwise.
    #[must_use]
    pub fn transition_target(&self) -> Option<RevealSurface> {
        match self {
            RevealState::Transitioning { to, .. } => Some(*to),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hold_state_predicates() {
        let t0 = Instant::now();
        assert!(HoldState::Idle.is_idle());
        assert!(HoldState::Pending { pressed_at: t0 }.is_pending());
        assert!(HoldState::Active { confirmed_at: t0 }.is_active());
        assert!(!HoldState::Idle.is_active());
    }

    #[test]
    fn reveal_state_predicates_and_target() {
        let t0 = Instant::now();
        assert!(RevealState::Model.is_model());
        assert!(RevealState::Video.is_video());

        let fading = RevealState::Transitioning {
            to: RevealSurface::Video,
            started_at: t0,
        };
        assert!(fading.is_transitioning());
        assert_eq!(fading.transition_target(), Some(RevealSurface::Video));
        assert_eq!(RevealState::Model.transition_target(), None);
    }
}
