// SPDX-License-Identifier: MPL-2.0
//! In-process stand-in for an external 3D card widget.
//!
//! A real deployment would bridge to a rendering engine here. This adapter
//! keeps the orbit state, readiness flag and input lock that the rest of the
//! application observes, and converts horizontal pointer travel into azimuth
//! changes the way an orbit-controls widget would.

use super::{ViewerError, ViewerPort};
use crate::camera::{orbit::normalize_angle, CameraOrbit};

/// Azimuth change per pixel of horizontal drag (radians).
const DRAG_ROTATE_SENSITIVITY: f32 = 0.01;

/// Desktop card surface: owns the live orbit and its input lock.
#[derive(Debug, Clone)]
pub struct CardViewer {
    orbit: CameraOrbit,
    ready: bool,
    input_enabled: bool,
}

impl CardViewer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            orbit: CameraOrbit::default(),
            ready: false,
            input_enabled: true,
        }
    }

    /// Marks the surface ready. Called once the card art finished decoding.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    /// Applies a horizontal drag of `dx` pixels to the camera azimuth.
    ///
    /// Returns the new orbit so the caller can feed the orientation-change
    /// stream, or `None` when the surface ignores input (not ready, or input
    /// locked during an active hold).
    pub fn apply_drag_delta(&mut self, dx: f32) -> Option<CameraOrbit> {
        if !self.ready || !self.input_enabled {
            return None;
        }
        self.orbit.theta = normalize_angle(self.orbit.theta + dx * DRAG_ROTATE_SENSITIVITY);
        Some(self.orbit)
    }

    /// Whether the surface currently accepts pointer input.
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }
}

impl Default for CardViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerPort for CardViewer {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn orientation(&self) -> Result<CameraOrbit, ViewerError> {
        if !self.ready {
            return Err(ViewerError::NotReady);
        }
        Ok(self.orbit)
    }

    fn set_orientation(&mut self, orbit: CameraOrbit) -> Result<(), ViewerError> {
        if !self.ready {
            return Err(ViewerError::NotReady);
        }
        self.orbit = orbit;
        Ok(())
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_fails_until_ready() {
        let viewer = CardViewer::new();
        assert_eq!(viewer.orientation(), Err(ViewerError::NotReady));
    }

    #[test]
    fn mark_ready_unlocks_orientation_access() {
        let mut viewer = CardViewer::new();
        viewer.mark_ready();
        assert!(viewer.orientation().is_ok());
    }

    #[test]
    fn drag_rotates_azimuth_when_ready() {
        let mut viewer = CardViewer::new();
        viewer.mark_ready();
        let before = viewer.orientation().unwrap().theta;

        let after = viewer.apply_drag_delta(50.0).expect("input enabled");
        assert!((after.theta - before - 50.0 * DRAG_ROTATE_SENSITIVITY).abs() < 1e-5);
    }

    #[test]
    fn drag_is_ignored_before_ready() {
        let mut viewer = CardViewer::new();
        assert!(viewer.apply_drag_delta(50.0).is_none());
    }

    #[test]
    fn drag_is_ignored_while_input_locked() {
        let mut viewer = CardViewer::new();
        viewer.mark_ready();
        viewer.set_input_enabled(false);
        assert!(viewer.apply_drag_delta(50.0).is_none());

        viewer.set_input_enabled(true);
        assert!(viewer.apply_drag_delta(50.0).is_some());
    }

    #[test]
    fn set_orientation_overwrites_orbit() {
        let mut viewer = CardViewer::new();
        viewer.mark_ready();
        let target = CameraOrbit::new(1.0, 1.2, 3.0);
        viewer.set_orientation(target).expect("ready");
        assert_eq!(viewer.orientation().unwrap(), target);
    }

    #[test]
    fn drag_keeps_azimuth_normalized() {
        let mut viewer = CardViewer::new();
        viewer.mark_ready();
        let orbit = viewer.apply_drag_delta(10_000.0).expect("input enabled");
        assert!((0.0..std::f32::consts::PI * 2.0).contains(&orbit.theta));
    }
}
