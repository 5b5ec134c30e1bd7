// SPDX-License-Identifier: MPL-2.0
//! Spherical camera coordinates and snap-angle math.
//!
//! The 3D surface owns the live camera; this module only provides the value
//! type exchanged with it and the pure angle arithmetic used for snapping.

use std::f32::consts::PI;

/// Camera position on the orbit sphere around the card.
///
/// `theta` is the azimuth and `phi` the elevation, both in radians.
/// `radius` is the distance from the card center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOrbit {
    pub theta: f32,
    pub phi: f32,
    pub radius: f32,
}

impl CameraOrbit {
    #[must_use]
    pub fn new(theta: f32, phi: f32, radius: f32) -> Self {
        Self { theta, phi, radius }
    }

    /// Azimuth normalized to [0, 2π).
    #[must_use]
    pub fn normalized_theta(&self) -> f32 {
        normalize_angle(self.theta)
    }

    /// Azimuth in degrees, normalized to [0, 360).
    #[must_use]
    pub fn azimuth_degrees(&self) -> f32 {
        self.normalized_theta().to_degrees()
    }

    /// Returns the orbit rotated to `theta_deg` with the elevation pinned to
    /// `phi` and the radius preserved. Used for snapping to a card face.
    #[must_use]
    pub fn snapped_to(&self, theta_deg: f32, phi: f32) -> Self {
        Self {
            theta: theta_deg.to_radians(),
            phi,
            radius: self.radius,
        }
    }
}

impl Default for CameraOrbit {
    fn default() -> Self {
        Self {
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,
            radius: 1.0,
        }
    }
}

/// Normalizes an angle in radians to the range [0, 2π).
///
/// Idempotent: normalizing an already-normalized angle returns it unchanged.
#[must_use]
pub fn normalize_angle(angle: f32) -> f32 {
    let two_pi = PI * 2.0;
    let mut normalized = angle % two_pi;
    if normalized < 0.0 {
        normalized += two_pi;
    }
    normalized
}

/// Normalizes an angle in degrees to the range [0, 360).
#[must_use]
pub fn normalize_degrees(angle: f32) -> f32 {
    let mut normalized = angle % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    normalized
}

/// Absolute distance between two angles in radians, measured the shortest
/// way around the circle. Always in [0, π].
#[must_use]
pub fn circular_distance_rad(a: f32, b: f32) -> f32 {
    let raw = (normalize_angle(a) - normalize_angle(b)).abs();
    raw.min(PI * 2.0 - raw)
}

/// Returns the angle from `angles_deg` circularly closest to `current_deg`.
///
/// Distance is measured around the circle, so 350° is 10° away from 0°.
/// On an exact tie the earlier angle in the list wins; with the canonical
/// faces `[0, 180]` this sends both 90° and 270° to the front face.
///
/// Returns 0.0 for an empty list (callers pass the configured face list,
/// which is validated non-empty at compile time).
#[must_use]
pub fn closest_snap_angle(current_deg: f32, angles_deg: &[f32]) -> f32 {
    let current = normalize_degrees(current_deg);

    let mut best_angle = 0.0;
    let mut best_distance = f32::INFINITY;
    for &candidate in angles_deg {
        let raw = (normalize_degrees(candidate) - current).abs();
        let distance = raw.min(360.0 - raw);
        if distance < best_distance {
            best_distance = distance;
            best_angle = candidate;
        }
    }
    best_angle
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACES: &[f32] = &[0.0, 180.0];

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "expected {} to equal {}", a, b);
    }

    #[test]
    fn normalize_angle_wraps_positive_overflow() {
        assert_close(normalize_angle(2.5 * PI), 0.5 * PI);
    }

    #[test]
    fn normalize_angle_wraps_negative() {
        assert_close(normalize_angle(-0.5 * PI), 1.5 * PI);
    }

    #[test]
    fn normalize_angle_is_idempotent() {
        let angles = [-7.3, -PI, 0.0, 0.25, PI, 3.9, 6.2, 12.0];
        for angle in angles {
            let once = normalize_angle(angle);
            let twice = normalize_angle(once);
            assert_close(once, twice);
            assert!((0.0..PI * 2.0).contains(&once));
        }
    }

    #[test]
    fn normalize_degrees_wraps_both_directions() {
        assert_close(normalize_degrees(540.0), 180.0);
        assert_close(normalize_degrees(-90.0), 270.0);
        assert_close(normalize_degrees(360.0), 0.0);
    }

    #[test]
    fn circular_distance_takes_shortest_arc() {
        assert_close(circular_distance_rad(0.1, PI * 2.0 - 0.1), 0.2);
        assert_close(circular_distance_rad(0.0, PI), PI);
        assert_close(circular_distance_rad(1.0, 1.0), 0.0);
    }

    #[test]
    fn snap_inside_back_interval_picks_back_face() {
        assert_close(closest_snap_angle(95.0, FACES), 180.0);
        assert_close(closest_snap_angle(180.0, FACES), 180.0);
        assert_close(closest_snap_angle(265.0, FACES), 180.0);
    }

    #[test]
    fn snap_outside_back_interval_picks_front_face() {
        assert_close(closest_snap_angle(85.0, FACES), 0.0);
        assert_close(closest_snap_angle(0.0, FACES), 0.0);
        assert_close(closest_snap_angle(275.0, FACES), 0.0);
        assert_close(closest_snap_angle(359.0, FACES), 0.0);
    }

    #[test]
    fn snap_boundaries_resolve_to_front_face() {
        // The back interval is exclusive at both ends: (90, 270)
        assert_close(closest_snap_angle(90.0, FACES), 0.0);
        assert_close(closest_snap_angle(270.0, FACES), 0.0);
    }

    #[test]
    fn snap_handles_unnormalized_current_angle() {
        // 455 normalizes to 95 (back interval), -275 to 85 (front interval)
        assert_close(closest_snap_angle(455.0, FACES), 180.0);
        assert_close(closest_snap_angle(-275.0, FACES), 0.0);
    }

    #[test]
    fn snapped_to_preserves_radius_and_pins_elevation() {
        let orbit = CameraOrbit::new(2.1, 0.3, 4.5);
        let snapped = orbit.snapped_to(180.0, std::f32::consts::FRAC_PI_2);
        assert_close(snapped.theta, PI);
        assert_close(snapped.phi, std::f32::consts::FRAC_PI_2);
        assert_close(snapped.radius, 4.5);
    }

    #[test]
    fn azimuth_degrees_reports_normalized_value() {
        let orbit = CameraOrbit::new(-PI / 2.0, 0.0, 1.0);
        assert_close(orbit.azimuth_degrees(), 270.0);
    }
}
