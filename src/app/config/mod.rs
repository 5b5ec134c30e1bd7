// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[interaction]` - Hold/drag gesture recognition timing
//! - `[camera]` - Auto-rotation and snap behavior
//! - `[effects]` - Particle and haptic feedback
//! - `[share]` - Share pipeline policy
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `HOLOCARD_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use holocard::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Which platform template the share text should use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SharePlatform {
    /// Detect from the operating system at startup.
    #[default]
    Auto,
    Windows,
    Macos,
    Linux,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light or dark).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Hold/drag gesture recognition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionConfig {
    /// How long a press must stay put before the hold is recognized (ms).
    #[serde(
        default = "default_hold_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hold_duration_ms: Option<u64>,

    /// Delay between hold recognition and the video reveal (ms).
    #[serde(
        default = "default_video_activation_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_activation_delay_ms: Option<u64>,

    /// Pointer travel that turns a press into a drag (px).
    #[serde(
        default = "default_drag_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_threshold_px: Option<f32>,

    /// Cross-fade length for the model/video surface swap (ms).
    #[serde(
        default = "default_fade_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fade_duration_ms: Option<u64>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hold_duration_ms: Some(DEFAULT_HOLD_DURATION_MS),
            video_activation_delay_ms: Some(DEFAULT_VIDEO_ACTIVATION_DELAY_MS),
            drag_threshold_px: Some(DEFAULT_DRAG_THRESHOLD_PX),
            fade_duration_ms: Some(DEFAULT_FADE_DURATION_MS),
        }
    }
}

impl InteractionConfig {
    /// Hold duration, clamped into the supported range.
    pub fn hold_duration(&self) -> Duration {
        let ms = self
            .hold_duration_ms
            .unwrap_or(DEFAULT_HOLD_DURATION_MS)
            .clamp(MIN_HOLD_DURATION_MS, MAX_HOLD_DURATION_MS);
        Duration::from_millis(ms)
    }

    /// Video activation delay, clamped into the supported range.
    pub fn video_activation_delay(&self) -> Duration {
        let ms = self
            .video_activation_delay_ms
            .unwrap_or(DEFAULT_VIDEO_ACTIVATION_DELAY_MS)
            .clamp(MIN_VIDEO_ACTIVATION_DELAY_MS, MAX_VIDEO_ACTIVATION_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Drag threshold in pixels, clamped into the supported range.
    pub fn drag_threshold_px(&self) -> f32 {
        self.drag_threshold_px
            .unwrap_or(DEFAULT_DRAG_THRESHOLD_PX)
            .clamp(MIN_DRAG_THRESHOLD_PX, MAX_DRAG_THRESHOLD_PX)
    }

    /// Fade duration, clamped into the supported range.
    pub fn fade_duration(&self) -> Duration {
        let ms = self
            .fade_duration_ms
            .unwrap_or(DEFAULT_FADE_DURATION_MS)
            .clamp(MIN_FADE_DURATION_MS, MAX_FADE_DURATION_MS);
        Duration::from_millis(ms)
    }
}

/// Camera auto-rotation and snap settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Idle time after the last interaction before the camera snaps (ms).
    #[serde(
        default = "default_snap_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub snap_delay_ms: Option<u64>,

    /// Idle auto-rotation speed (radians per second, 0 disables).
    #[serde(
        default = "default_auto_rotate_speed",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_rotate_speed: Option<f32>,

    /// Delay before auto-rotation resumes after a gesture or reveal ends (ms).
    #[serde(
        default = "default_auto_rotate_resume_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_rotate_resume_delay_ms: Option<u64>,

    /// Camera azimuth delta that confirms a drag (radians).
    #[serde(
        default = "default_orbit_drag_epsilon_rad",
        skip_serializing_if = "Option::is_none"
    )]
    pub orbit_drag_epsilon_rad: Option<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            snap_delay_ms: Some(DEFAULT_CAMERA_SNAP_DELAY_MS),
            auto_rotate_speed: Some(DEFAULT_AUTO_ROTATE_SPEED_RAD_PER_SEC),
            auto_rotate_resume_delay_ms: Some(DEFAULT_AUTO_ROTATE_RESUME_DELAY_MS),
            orbit_drag_epsilon_rad: Some(DEFAULT_ORBIT_DRAG_EPSILON_RAD),
        }
    }
}

impl CameraConfig {
    /// Snap delay, clamped into the supported range.
    pub fn snap_delay(&self) -> Duration {
        let ms = self
            .snap_delay_ms
            .unwrap_or(DEFAULT_CAMERA_SNAP_DELAY_MS)
            .clamp(MIN_CAMERA_SNAP_DELAY_MS, MAX_CAMERA_SNAP_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Auto-rotation speed, clamped into the supported range.
    pub fn auto_rotate_speed(&self) -> f32 {
        self.auto_rotate_speed
            .unwrap_or(DEFAULT_AUTO_ROTATE_SPEED_RAD_PER_SEC)
            .clamp(
                MIN_AUTO_ROTATE_SPEED_RAD_PER_SEC,
                MAX_AUTO_ROTATE_SPEED_RAD_PER_SEC,
            )
    }

    /// Auto-rotate resume delay, clamped into the supported range.
    pub fn auto_rotate_resume_delay(&self) -> Duration {
        let ms = self
            .auto_rotate_resume_delay_ms
            .unwrap_or(DEFAULT_AUTO_ROTATE_RESUME_DELAY_MS)
            .clamp(
                MIN_AUTO_ROTATE_RESUME_DELAY_MS,
                MAX_AUTO_ROTATE_RESUME_DELAY_MS,
            );
        Duration::from_millis(ms)
    }

    /// Orbit drag epsilon, clamped into the supported range.
    pub fn orbit_drag_epsilon_rad(&self) -> f32 {
        self.orbit_drag_epsilon_rad
            .unwrap_or(DEFAULT_ORBIT_DRAG_EPSILON_RAD)
            .clamp(MIN_ORBIT_DRAG_EPSILON_RAD, MAX_ORBIT_DRAG_EPSILON_RAD)
    }
}

/// Particle and haptic feedback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffectsConfig {
    /// Interval between particle bursts while a hold is active (ms).
    #[serde(
        default = "default_particle_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub particle_interval_ms: Option<u64>,

    /// How long an individual particle lives (ms).
    #[serde(
        default = "default_particle_lifetime_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub particle_lifetime_ms: Option<u64>,

    /// Particles spawned per burst.
    #[serde(
        default = "default_particles_per_burst",
        skip_serializing_if = "Option::is_none"
    )]
    pub particles_per_burst: Option<u32>,

    /// Whether haptic cues are forwarded to the platform.
    #[serde(default = "default_haptics_enabled", skip_serializing_if = "Option::is_none")]
    pub haptics_enabled: Option<bool>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_interval_ms: Some(DEFAULT_PARTICLE_INTERVAL_MS),
            particle_lifetime_ms: Some(DEFAULT_PARTICLE_LIFETIME_MS),
            particles_per_burst: Some(DEFAULT_PARTICLES_PER_BURST),
            haptics_enabled: Some(true),
        }
    }
}

impl EffectsConfig {
    /// Particle spawn interval, clamped into the supported range.
    pub fn particle_interval(&self) -> Duration {
        let ms = self
            .particle_interval_ms
            .unwrap_or(DEFAULT_PARTICLE_INTERVAL_MS)
            .clamp(MIN_PARTICLE_INTERVAL_MS, MAX_PARTICLE_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Particle lifetime, clamped into the supported range.
    pub fn particle_lifetime(&self) -> Duration {
        let ms = self
            .particle_lifetime_ms
            .unwrap_or(DEFAULT_PARTICLE_LIFETIME_MS)
            .clamp(MIN_PARTICLE_LIFETIME_MS, MAX_PARTICLE_LIFETIME_MS);
        Duration::from_millis(ms)
    }

    /// Particles per burst, clamped into the supported range.
    pub fn particles_per_burst(&self) -> u32 {
        self.particles_per_burst
            .unwrap_or(DEFAULT_PARTICLES_PER_BURST)
            .clamp(MIN_PARTICLES_PER_BURST, MAX_PARTICLES_PER_BURST)
    }

    /// Whether haptic cues should reach the platform port.
    pub fn haptics_enabled(&self) -> bool {
        self.haptics_enabled.unwrap_or(true)
    }
}

/// Share pipeline policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShareConfig {
    /// Whether a placeholder image may be synthesized when the card ships
    /// no pre-rendered share image.
    #[serde(
        default = "default_allow_placeholder",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_placeholder: Option<bool>,

    /// Which platform template the share text uses.
    #[serde(default)]
    pub platform: SharePlatform,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            allow_placeholder: Some(true),
            platform: SharePlatform::Auto,
        }
    }
}

impl ShareConfig {
    /// Whether placeholder synthesis is permitted.
    pub fn allow_placeholder(&self) -> bool {
        self.allow_placeholder.unwrap_or(true)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Hold/drag gesture recognition settings.
    #[serde(default)]
    pub interaction: InteractionConfig,

    /// Camera auto-rotation and snap settings.
    #[serde(default)]
    pub camera: CameraConfig,

    /// Particle and haptic feedback settings.
    #[serde(default)]
    pub effects: EffectsConfig,

    /// Share pipeline policy.
    #[serde(default)]
    pub share: ShareConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_hold_duration_ms() -> Option<u64> {
    Some(DEFAULT_HOLD_DURATION_MS)
}

fn default_video_activation_delay_ms() -> Option<u64> {
    Some(DEFAULT_VIDEO_ACTIVATION_DELAY_MS)
}

fn default_drag_threshold_px() -> Option<f32> {
    Some(DEFAULT_DRAG_THRESHOLD_PX)
}

fn default_fade_duration_ms() -> Option<u64> {
    Some(DEFAULT_FADE_DURATION_MS)
}

fn default_snap_delay_ms() -> Option<u64> {
    Some(DEFAULT_CAMERA_SNAP_DELAY_MS)
}

fn default_auto_rotate_speed() -> Option<f32> {
    Some(DEFAULT_AUTO_ROTATE_SPEED_RAD_PER_SEC)
}

fn default_auto_rotate_resume_delay_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_ROTATE_RESUME_DELAY_MS)
}

fn default_orbit_drag_epsilon_rad() -> Option<f32> {
    Some(DEFAULT_ORBIT_DRAG_EPSILON_RAD)
}

fn default_particle_interval_ms() -> Option<u64> {
    Some(DEFAULT_PARTICLE_INTERVAL_MS)
}

fn default_particle_lifetime_ms() -> Option<u64> {
    Some(DEFAULT_PARTICLE_LIFETIME_MS)
}

fn default_particles_per_burst() -> Option<u32> {
    Some(DEFAULT_PARTICLES_PER_BURST)
}

fn default_haptics_enabled() -> Option<bool> {
    Some(true)
}

fn default_allow_placeholder() -> Option<bool> {
    Some(true)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("config load failed, using defaults: {}", err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
