// SPDX-License-Identifier: MPL-2.0
//! Per-gesture bookkeeping from pointer-down to pointer-up.

use iced::Point;

use crate::camera::{orbit::circular_distance_rad, CameraOrbit};

use super::events::PointerId;

/// Everything remembered about the pointer currently on the card.
///
/// A session opens on an accepted pointer-down and closes on the matching
/// release or cancel. It survives drag confirmation and even hold
/// cancellation: as long as the finger is down, its movement keeps counting
/// as interaction.
#[derive(Debug, Clone)]
pub struct InteractionSession {
    pointer: PointerId,
    start_position: Point,
    current_position: Point,
    /// Camera orientation at pointer-down, if the viewer could report one.
    /// Drives the orbit-delta drag trigger.
    start_orbit: Option<CameraOrbit>,
    is_dragging: bool,
}

impl InteractionSession {
    #[must_use]
    pub fn begin(pointer: PointerId, position: Point, start_orbit: Option<CameraOrbit>) -> Self {
        Self {
            pointer,
            start_position: position,
            current_position: position,
            start_orbit,
            is_dragging: false,
        }
    }

    #[must_use]
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    #[must_use]
    pub fn start_position(&self) -> Point {
        self.start_position
    }

    #[must_use]
    pub fn current_position(&self) -> Point {
        self.current_position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Records a new pointer position and returns the straight-line distance
    /// from the gesture origin, in logical pixels.
    pub fn track_movement(&mut self, position: Point) -> f32 {
        self.current_position = position;
        self.travel_distance()
    }

    /// Straight-line distance between the gesture origin and the latest
    /// tracked position.
    #[must_use]
    pub fn travel_distance(&self) -> f32 {
        let dx = self.current_position.x - self.start_position.x;
        let dy = self.current_position.y - self.start_position.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Absolute azimuth change (radians, shortest way around) between the
    /// pointer-down snapshot and `orbit`. `None` when no snapshot was
    /// available at pointer-down.
    #[must_use]
    pub fn orbit_delta_from_start(&self, orbit: CameraOrbit) -> Option<f32> {
        self.start_orbit
            .map(|start| circular_distance_rad(start.theta, orbit.theta))
    }

    /// Marks the gesture as a confirmed drag. Never reverts.
    pub fn confirm_drag(&mut self) {
        self.is_dragging = true;
    }
}
