// SPDX-License-Identifier: MPL-2.0
//! User feedback during a hold: progress ring, sparkle particles, haptics.

pub mod haptics;
pub mod particles;
pub mod progress;

pub use haptics::{HapticCue, HapticsPort, NoopHaptics};
pub use particles::{Particle, ParticleField};
pub use progress::HoldProgress;
