// SPDX-License-Identifier: MPL-2.0
//! Hold-to-reveal interaction core.
//!
//! One pointer stream drives everything: a press is held until it either
//! becomes a recognized hold (leading to the video reveal) or moves far
//! enough to become a camera drag. [`InteractionController`] owns that
//! disambiguation plus the model/video reveal lifecycle, the camera
//! idle behavior, and the hold feedback. All timing flows through the
//! injected clock, never the wall clock.

pub mod controller;
pub mod events;
pub mod session;
pub mod state;
pub mod timers;

pub use controller::{Effect, InteractionController, InteractionTuning};
pub use events::{InteractionEvent, PointerId};
pub use session::InteractionSession;
pub use state::{HoldState, RevealState, RevealSurface};
pub use timers::{TimerKey, TimerRegistry};
