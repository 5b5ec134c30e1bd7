// SPDX-License-Identifier: MPL-2.0
//! Capability boundary towards the 3D card surface.
//!
//! The interaction core never talks to a rendering engine directly. It is
//! handed a [`ViewerPort`] at construction, so the full capability set is
//! checked by the type system before the state machine can exist. The
//! in-process [`CardViewer`] adapter backs the desktop binary; tests supply
//! recording fakes.

pub mod card;

pub use card::CardViewer;

use crate::camera::CameraOrbit;
use std::fmt;

/// Failure reported by the 3D surface.
///
/// These are transient by contract: callers log and degrade to a no-op,
/// they never take down the interaction state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// The surface has not finished initializing.
    NotReady,
    /// The surface rejected the operation.
    Backend(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::NotReady => write!(f, "viewer surface not ready"),
            ViewerError::Backend(msg) => write!(f, "viewer backend error: {}", msg),
        }
    }
}

/// Operations the interaction core requires from the 3D surface.
pub trait ViewerPort {
    /// Whether the surface finished loading the card model.
    fn is_ready(&self) -> bool;

    /// Current camera orbit.
    fn orientation(&self) -> Result<CameraOrbit, ViewerError>;

    /// Moves the camera. Writes are best-effort; a failure leaves the
    /// previous orientation in place.
    fn set_orientation(&mut self, orbit: CameraOrbit) -> Result<(), ViewerError>;

    /// Enables or disables the surface's own pointer handling. Disabled
    /// while a hold is active so the camera stops following the pointer.
    fn set_input_enabled(&mut self, enabled: bool);
}
