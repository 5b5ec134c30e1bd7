// SPDX-License-Identifier: MPL-2.0
//! Haptic cues emitted at interaction milestones.

/// The two moments that get a tactile pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticCue {
    /// A press was recognized as a hold.
    HoldConfirmed,
    /// The hold-progress indicator reached full.
    ProgressComplete,
}

/// Delivery target for haptic cues.
///
/// The interaction core only emits cues; whether and how they reach the user
/// depends on the platform adapter. Desktops have no haptics hardware, so the
/// binary wires in [`NoopHaptics`].
pub trait HapticsPort {
    fn pulse(&mut self, cue: HapticCue);
}

/// Logs cues instead of vibrating anything.
#[derive(Debug, Default)]
pub struct NoopHaptics;

impl HapticsPort for NoopHaptics {
    fn pulse(&mut self, cue: HapticCue) {
        log::debug!("haptic cue (no hardware): {:?}", cue);
    }
}
