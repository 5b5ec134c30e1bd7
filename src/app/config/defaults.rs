// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Hold gesture**: press-and-hold recognition timing
//! - **Drag gesture**: drag confirmation thresholds
//! - **Reveal**: transition fade timing and fallback video length
//! - **Camera**: auto-rotate speed, snap timing and canonical angles
//! - **Effects**: particle emission and haptic cues
//! - **Viewer**: readiness polling bounds

// ==========================================================================
// Hold Gesture Defaults
// ==========================================================================

/// Time a press must stay put before the hold is recognized (milliseconds).
pub const DEFAULT_HOLD_DURATION_MS: u64 = 1000;

/// Minimum allowed hold duration.
pub const MIN_HOLD_DURATION_MS: u64 = 200;

/// Maximum allowed hold duration.
pub const MAX_HOLD_DURATION_MS: u64 = 5000;

/// Time between hold recognition and the video reveal (milliseconds).
/// The hold progress indicator fills over exactly this window.
pub const DEFAULT_VIDEO_ACTIVATION_DELAY_MS: u64 = 1000;

/// Minimum allowed video activation delay.
pub const MIN_VIDEO_ACTIVATION_DELAY_MS: u64 = 200;

/// Maximum allowed video activation delay.
pub const MAX_VIDEO_ACTIVATION_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Drag Gesture Defaults
// ==========================================================================

/// Pointer travel from the press origin that turns a press into a drag (pixels).
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 10.0;

/// Minimum allowed drag threshold.
pub const MIN_DRAG_THRESHOLD_PX: f32 = 1.0;

/// Maximum allowed drag threshold.
pub const MAX_DRAG_THRESHOLD_PX: f32 = 100.0;

/// Camera azimuth delta from the press-time snapshot that confirms a drag
/// (radians). Second, independent drag trigger next to pointer travel.
pub const DEFAULT_ORBIT_DRAG_EPSILON_RAD: f32 = 0.05;

/// Minimum allowed orbit drag epsilon.
pub const MIN_ORBIT_DRAG_EPSILON_RAD: f32 = 0.005;

/// Maximum allowed orbit drag epsilon.
pub const MAX_ORBIT_DRAG_EPSILON_RAD: f32 = 1.0;

// ==========================================================================
// Reveal Transition Defaults
// ==========================================================================

/// Cross-fade length when swapping between the model and video surfaces
/// (milliseconds).
pub const DEFAULT_FADE_DURATION_MS: u64 = 300;

/// Minimum allowed fade duration.
pub const MIN_FADE_DURATION_MS: u64 = 50;

/// Maximum allowed fade duration.
pub const MAX_FADE_DURATION_MS: u64 = 2000;

/// Reveal video length assumed when the card manifest does not provide one
/// (seconds).
pub const DEFAULT_REVEAL_DURATION_SECS: f64 = 8.0;

// ==========================================================================
// Camera Defaults
// ==========================================================================

/// Idle time after the last interaction before the camera snaps to the
/// nearest canonical face (milliseconds).
pub const DEFAULT_CAMERA_SNAP_DELAY_MS: u64 = 1500;

/// Minimum allowed camera snap delay.
pub const MIN_CAMERA_SNAP_DELAY_MS: u64 = 100;

/// Maximum allowed camera snap delay.
pub const MAX_CAMERA_SNAP_DELAY_MS: u64 = 10_000;

/// Idle auto-rotation speed (radians per second).
pub const DEFAULT_AUTO_ROTATE_SPEED_RAD_PER_SEC: f32 = 0.35;

/// Minimum auto-rotation speed (0 disables rotation).
pub const MIN_AUTO_ROTATE_SPEED_RAD_PER_SEC: f32 = 0.0;

/// Maximum auto-rotation speed.
pub const MAX_AUTO_ROTATE_SPEED_RAD_PER_SEC: f32 = 2.0;

/// Delay before auto-rotation resumes after a gesture ends or the view
/// returns from the video (milliseconds).
pub const DEFAULT_AUTO_ROTATE_RESUME_DELAY_MS: u64 = 1500;

/// Minimum allowed auto-rotate resume delay.
pub const MIN_AUTO_ROTATE_RESUME_DELAY_MS: u64 = 100;

/// Maximum allowed auto-rotate resume delay.
pub const MAX_AUTO_ROTATE_RESUME_DELAY_MS: u64 = 10_000;

/// Canonical card faces the camera snaps to (degrees of azimuth).
pub const SNAP_ANGLES_DEG: &[f32] = &[0.0, 180.0];

/// Elevation the camera is pinned to when snapping (radians). Horizontal.
pub const SNAP_ELEVATION_RAD: f32 = std::f32::consts::FRAC_PI_2;

// ==========================================================================
// Effects Defaults
// ==========================================================================

/// Interval between particle bursts while a hold is active (milliseconds).
pub const DEFAULT_PARTICLE_INTERVAL_MS: u64 = 80;

/// Minimum allowed particle interval.
pub const MIN_PARTICLE_INTERVAL_MS: u64 = 16;

/// Maximum allowed particle interval.
pub const MAX_PARTICLE_INTERVAL_MS: u64 = 1000;

/// How long an individual particle lives (milliseconds).
pub const DEFAULT_PARTICLE_LIFETIME_MS: u64 = 900;

/// Minimum allowed particle lifetime.
pub const MIN_PARTICLE_LIFETIME_MS: u64 = 100;

/// Maximum allowed particle lifetime.
pub const MAX_PARTICLE_LIFETIME_MS: u64 = 5000;

/// Particles spawned per burst.
pub const DEFAULT_PARTICLES_PER_BURST: u32 = 3;

/// Minimum particles per burst.
pub const MIN_PARTICLES_PER_BURST: u32 = 1;

/// Maximum particles per burst.
pub const MAX_PARTICLES_PER_BURST: u32 = 16;

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// How long the app waits for the 3D surface to report ready before giving
/// up with a load error (seconds).
pub const VIEWER_READY_TIMEOUT_SECS: u64 = 10;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Hold gesture validation
    assert!(MIN_HOLD_DURATION_MS > 0);
    assert!(MAX_HOLD_DURATION_MS >= MIN_HOLD_DURATION_MS);
    assert!(DEFAULT_HOLD_DURATION_MS >= MIN_HOLD_DURATION_MS);
    assert!(DEFAULT_HOLD_DURATION_MS <= MAX_HOLD_DURATION_MS);
    assert!(MIN_VIDEO_ACTIVATION_DELAY_MS > 0);
    assert!(DEFAULT_VIDEO_ACTIVATION_DELAY_MS >= MIN_VIDEO_ACTIVATION_DELAY_MS);
    assert!(DEFAULT_VIDEO_ACTIVATION_DELAY_MS <= MAX_VIDEO_ACTIVATION_DELAY_MS);

    // Drag gesture validation
    assert!(MIN_DRAG_THRESHOLD_PX > 0.0);
    assert!(MAX_DRAG_THRESHOLD_PX > MIN_DRAG_THRESHOLD_PX);
    assert!(DEFAULT_DRAG_THRESHOLD_PX >= MIN_DRAG_THRESHOLD_PX);
    assert!(DEFAULT_DRAG_THRESHOLD_PX <= MAX_DRAG_THRESHOLD_PX);
    assert!(MIN_ORBIT_DRAG_EPSILON_RAD > 0.0);
    assert!(DEFAULT_ORBIT_DRAG_EPSILON_RAD >= MIN_ORBIT_DRAG_EPSILON_RAD);
    assert!(DEFAULT_ORBIT_DRAG_EPSILON_RAD <= MAX_ORBIT_DRAG_EPSILON_RAD);

    // Reveal transition validation
    assert!(MIN_FADE_DURATION_MS > 0);
    assert!(DEFAULT_FADE_DURATION_MS >= MIN_FADE_DURATION_MS);
    assert!(DEFAULT_FADE_DURATION_MS <= MAX_FADE_DURATION_MS);
    assert!(DEFAULT_REVEAL_DURATION_SECS > 0.0);

    // Camera validation
    assert!(MIN_CAMERA_SNAP_DELAY_MS > 0);
    assert!(DEFAULT_CAMERA_SNAP_DELAY_MS >= MIN_CAMERA_SNAP_DELAY_MS);
    assert!(DEFAULT_CAMERA_SNAP_DELAY_MS <= MAX_CAMERA_SNAP_DELAY_MS);
    assert!(MIN_AUTO_ROTATE_SPEED_RAD_PER_SEC >= 0.0);
    assert!(DEFAULT_AUTO_ROTATE_SPEED_RAD_PER_SEC >= MIN_AUTO_ROTATE_SPEED_RAD_PER_SEC);
    assert!(DEFAULT_AUTO_ROTATE_SPEED_RAD_PER_SEC <= MAX_AUTO_ROTATE_SPEED_RAD_PER_SEC);
    assert!(DEFAULT_AUTO_ROTATE_RESUME_DELAY_MS >= MIN_AUTO_ROTATE_RESUME_DELAY_MS);
    assert!(DEFAULT_AUTO_ROTATE_RESUME_DELAY_MS <= MAX_AUTO_ROTATE_RESUME_DELAY_MS);
    assert!(!SNAP_ANGLES_DEG.is_empty());
    assert!(SNAP_ELEVATION_RAD > 0.0);

    // Snap angles must be normalized and ascending for nearest-face search
    let mut i = 0;
    while i < SNAP_ANGLES_DEG.len() {
        assert!(SNAP_ANGLES_DEG[i] >= 0.0);
        assert!(SNAP_ANGLES_DEG[i] < 360.0);
        if i > 0 {
            assert!(SNAP_ANGLES_DEG[i] > SNAP_ANGLES_DEG[i - 1]);
        }
        i += 1;
    }

    // Effects validation
    assert!(MIN_PARTICLE_INTERVAL_MS > 0);
    assert!(DEFAULT_PARTICLE_INTERVAL_MS >= MIN_PARTICLE_INTERVAL_MS);
    assert!(DEFAULT_PARTICLE_INTERVAL_MS <= MAX_PARTICLE_INTERVAL_MS);
    assert!(MIN_PARTICLE_LIFETIME_MS > 0);
    assert!(DEFAULT_PARTICLE_LIFETIME_MS >= MIN_PARTICLE_LIFETIME_MS);
    assert!(DEFAULT_PARTICLE_LIFETIME_MS <= MAX_PARTICLE_LIFETIME_MS);
    assert!(MIN_PARTICLES_PER_BURST > 0);
    assert!(DEFAULT_PARTICLES_PER_BURST >= MIN_PARTICLES_PER_BURST);
    assert!(DEFAULT_PARTICLES_PER_BURST <= MAX_PARTICLES_PER_BURST);

    // Viewer validation
    assert!(VIEWER_READY_TIMEOUT_SECS > 0);
};
