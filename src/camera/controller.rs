// SPDX-License-Identifier: MPL-2.0
//! Drives the camera between interactions.
//!
//! Two behaviors live here. Idle auto-rotation advances the azimuth a little
//! every tick while nothing suspends it. Snapping re-orients the camera to
//! the circularly nearest canonical card face, pinning the elevation back to
//! horizontal and keeping the orbit radius.
//!
//! Every read or write of the live camera goes through the [`ViewerPort`]
//! and is best-effort: a failure is logged and swallowed so the interaction
//! state machine never observes it.

use super::orbit::{closest_snap_angle, normalize_angle};
use crate::app::config::{self, CameraConfig};
use crate::viewer::ViewerPort;
use std::time::Instant;

/// Static camera parameters, resolved from configuration at startup.
#[derive(Debug, Clone)]
pub struct CameraTuning {
    /// Auto-rotation speed in radians per second. Zero disables rotation.
    pub speed_rad_per_sec: f32,
    /// Canonical card faces in degrees of azimuth.
    pub snap_angles_deg: Vec<f32>,
    /// Elevation the camera is pinned to when snapping (radians).
    pub snap_elevation_rad: f32,
}

impl CameraTuning {
    pub fn from_config(camera: &CameraConfig) -> Self {
        Self {
            speed_rad_per_sec: camera.auto_rotate_speed(),
            snap_angles_deg: config::SNAP_ANGLES_DEG.to_vec(),
            snap_elevation_rad: config::SNAP_ELEVATION_RAD,
        }
    }
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

/// Auto-rotation and snap state. The live camera stays in the viewer; this
/// only remembers whether rotation is allowed and when it last advanced.
#[derive(Debug)]
pub struct CameraController {
    tuning: CameraTuning,
    suspended: bool,
    last_tick: Option<Instant>,
}

impl CameraController {
    #[must_use]
    pub fn new(tuning: CameraTuning) -> Self {
        Self {
            tuning,
            suspended: false,
            last_tick: None,
        }
    }

    /// Stops auto-rotation while a gesture or transition is in flight.
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Allows auto-rotation again. The next tick resumes from the camera's
    /// current position without a catch-up jump.
    pub fn resume(&mut self) {
        self.suspended = false;
    }

    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Advances auto-rotation by the time elapsed since the previous tick.
    ///
    /// The elapsed time is always consumed, even while suspended or before
    /// the viewer is ready, so resuming never replays the suspended span.
    pub fn tick(&mut self, viewer: &mut dyn ViewerPort, now: Instant) {
        let elapsed = match self.last_tick.replace(now) {
            Some(previous) => now.saturating_duration_since(previous),
            None => return,
        };

        if self.suspended || self.tuning.speed_rad_per_sec <= 0.0 || !viewer.is_ready() {
            return;
        }

        let orbit = match viewer.orientation() {
            Ok(orbit) => orbit,
            Err(err) => {
                log::warn!("auto-rotate skipped, orientation read failed: {}", err);
                return;
            }
        };

        let mut next = orbit;
        next.theta =
            normalize_angle(orbit.theta + self.tuning.speed_rad_per_sec * elapsed.as_secs_f32());
        if let Err(err) = viewer.set_orientation(next) {
            log::warn!("auto-rotate skipped, orientation write failed: {}", err);
        }
    }

    /// Re-orients the camera to the nearest canonical face.
    ///
    /// Elevation is pinned to the configured horizontal value and the radius
    /// is preserved. Returns the target azimuth in degrees when the snap was
    /// written, `None` when the viewer refused (logged, not an error).
    pub fn snap_to_nearest(&self, viewer: &mut dyn ViewerPort) -> Option<f32> {
        let orbit = match viewer.orientation() {
            Ok(orbit) => orbit,
            Err(err) => {
                log::warn!("camera snap skipped, orientation read failed: {}", err);
                return None;
            }
        };

        let target_deg = closest_snap_angle(orbit.azimuth_degrees(), &self.tuning.snap_angles_deg);
        let snapped = orbit.snapped_to(target_deg, self.tuning.snap_elevation_rad);
        match viewer.set_orientation(snapped) {
            Ok(()) => {
                log::debug!("camera snapped to {} degrees", target_deg);
                Some(target_deg)
            }
            Err(err) => {
                log::warn!("camera snap skipped, orientation write failed: {}", err);
                None
            }
        }
    }
}
