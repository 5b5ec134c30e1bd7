// SPDX-License-Identifier: MPL-2.0
//! The hold-to-reveal state machine.
//!
//! [`InteractionController`] is the single authority over gesture
//! classification, the model/video reveal, camera idle behavior, and hold
//! feedback. The application shell feeds it [`InteractionEvent`]s together
//! with the current `Instant` and forwards the returned [`Effect`]s; the
//! controller itself performs no I/O beyond the viewer and playback ports
//! it owns.
//!
//! Gesture rules, in the order they are evaluated:
//! - A press is accepted only on the model surface, outside transitions,
//!   and while no other pointer owns a gesture.
//! - While the hold is pending, pointer travel beyond the drag threshold or
//!   a camera azimuth change beyond the orbit epsilon reclassifies the
//!   gesture as a drag. Whichever trigger fires first wins, and a drag
//!   never becomes a hold again within the same gesture.
//! - If neither trigger fires before the hold-initiation timer, the hold is
//!   recognized: camera input locks, feedback starts, and video activation
//!   is scheduled.
//! - Once a hold is active, pointer movement no longer cancels it. Only
//!   lifting the pointer does.

use std::time::{Duration, Instant};

use iced::Point;

use crate::app::config::Config;
use crate::camera::{CameraController, CameraOrbit};
use crate::feedback::{HapticCue, HoldProgress, ParticleField};
use crate::playback::PlaybackSurface;
use crate::viewer::ViewerPort;

use super::events::{InteractionEvent, PointerId};
use super::session::InteractionSession;
use super::state::{HoldState, RevealState, RevealSurface};
use super::timers::{TimerKey, TimerRegistry};

/// Static interaction timing, resolved from configuration at startup.
#[derive(Debug, Clone)]
pub struct InteractionTuning {
    pub hold_duration: Duration,
    pub video_activation_delay: Duration,
    pub drag_threshold_px: f32,
    pub orbit_drag_epsilon_rad: f32,
    pub fade_duration: Duration,
    pub camera_snap_delay: Duration,
    pub auto_rotate_resume_delay: Duration,
    pub particle_interval: Duration,
}

impl InteractionTuning {
    pub fn from_config(config: &Config) -> Self {
        Self {
            hold_duration: config.interaction.hold_duration(),
            video_activation_delay: config.interaction.video_activation_delay(),
            drag_threshold_px: config.interaction.drag_threshold_px(),
            orbit_drag_epsilon_rad: config.camera.orbit_drag_epsilon_rad(),
            fade_duration: config.interaction.fade_duration(),
            camera_snap_delay: config.camera.snap_delay(),
            auto_rotate_resume_delay: config.camera.auto_rotate_resume_delay(),
            particle_interval: config.effects.particle_interval(),
        }
    }
}

impl Default for InteractionTuning {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Side effects the shell must carry out after handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Deliver a haptic cue through the platform port.
    Haptic(HapticCue),
    /// Surface a non-blocking warning to the user, by message key.
    Warn { message_key: &'static str },
}

/// Gesture, reveal, camera, and feedback state for one card.
///
/// Generic over the viewer and playback ports so the full capability set is
/// checked where the controller is constructed.
pub struct InteractionController<V, P> {
    tuning: InteractionTuning,
    timers: TimerRegistry,
    session: Option<InteractionSession>,
    hold: HoldState,
    reveal: RevealState,
    /// Held exactly while `reveal` is `Transitioning`. Blocks new gestures
    /// and competing transitions.
    interaction_locked: bool,
    last_interaction: Option<Instant>,
    camera: CameraController,
    progress: HoldProgress,
    particles: ParticleField,
    viewer: V,
    playback: P,
}

impl<V: ViewerPort, P: PlaybackSurface> InteractionController<V, P> {
    pub fn new(
        tuning: InteractionTuning,
        camera: CameraController,
        particles: ParticleField,
        viewer: V,
        playback: P,
    ) -> Self {
        Self {
            tuning,
            timers: TimerRegistry::new(),
            session: None,
            hold: HoldState::Idle,
            reveal: RevealState::Model,
            interaction_locked: false,
            last_interaction: None,
            camera,
            progress: HoldProgress::new(),
            particles,
            viewer,
            playback,
        }
    }

    /// Feeds one event through the state machine.
    pub fn handle(&mut self, event: InteractionEvent, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            InteractionEvent::PointerPressed { pointer, position } => {
                self.on_pointer_pressed(pointer, position, now);
            }
            InteractionEvent::PointerMoved { pointer, position } => {
                self.on_pointer_moved(pointer, position, now);
            }
            InteractionEvent::PointerReleased { pointer }
            | InteractionEvent::PointerCanceled { pointer } => {
                self.on_pointer_released(pointer, now);
            }
            InteractionEvent::OrbitChanged { orbit } => {
                self.on_orbit_changed(orbit, now);
            }
            InteractionEvent::SkipRequested => {
                if self.reveal.is_video() {
                    log::debug!("video skipped by user");
                    self.return_to_model(now);
                }
            }
            InteractionEvent::Tick => {
                self.advance(now, &mut effects);
            }
        }
        effects
    }

    fn on_pointer_pressed(&mut self, pointer: PointerId, position: Point, now: Instant) {
        if let Some(session) = &self.session {
            log::debug!(
                "pointer {} ignored, pointer {} owns the gesture",
                pointer.0,
                session.pointer().0
            );
            return;
        }
        if !self.reveal.is_model() || self.interaction_locked {
            log::debug!("pointer-down rejected, card surface is busy");
            return;
        }

        let start_orbit = self.viewer.orientation().ok();
        self.session = Some(InteractionSession::begin(pointer, position, start_orbit));
        self.hold = HoldState::Pending { pressed_at: now };
        self.last_interaction = Some(now);
        self.camera.suspend();
        self.timers.cancel(TimerKey::CameraSnap);
        self.timers.cancel(TimerKey::AutoRotateResume);
        self.timers
            .schedule(TimerKey::HoldInitiator, now, self.tuning.hold_duration);
        log::debug!("gesture opened by pointer {}", pointer.0);
    }

    fn on_pointer_moved(&mut self, pointer: PointerId, position: Point, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.pointer() != pointer {
            return;
        }

        self.last_interaction = Some(now);
        let distance = session.track_movement(position);
        let still_arming = !session.is_dragging() && self.hold.is_pending();
        if still_arming && distance > self.tuning.drag_threshold_px {
            self.confirm_drag("pointer travel");
        }
    }

    fn on_orbit_changed(&mut self, orbit: CameraOrbit, now: Instant) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        self.last_interaction = Some(now);
        if session.is_dragging() || !self.hold.is_pending() {
            return;
        }
        let Some(delta) = session.orbit_delta_from_start(orbit) else {
            return;
        };
        if delta > self.tuning.orbit_drag_epsilon_rad {
            self.confirm_drag("orbit delta");
        }
    }

    fn on_pointer_released(&mut self, pointer: PointerId, now: Instant) {
        if self.session.as_ref().map(InteractionSession::pointer) != Some(pointer) {
            return;
        }
        let Some(session) = self.session.take() else {
            return;
        };

        let class = if session.is_dragging() {
            "drag"
        } else if self.hold.is_active() {
            "hold"
        } else {
            "tap"
        };
        log::debug!(
            "gesture closed as {} after {:.1}px of travel",
            class,
            session.travel_distance()
        );

        self.cancel_hold();
        self.last_interaction = Some(now);
        self.timers
            .schedule(TimerKey::CameraSnap, now, self.tuning.camera_snap_delay);
        self.timers.schedule(
            TimerKey::AutoRotateResume,
            now,
            self.tuning.auto_rotate_resume_delay,
        );
    }

    /// Reclassifies the open gesture as a drag. The hold arming is dropped,
    /// but the session stays open so the release is still processed.
    fn confirm_drag(&mut self, trigger: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.is_dragging() {
            return;
        }
        session.confirm_drag();
        self.timers.cancel(TimerKey::HoldInitiator);
        if self.hold.is_pending() {
            self.hold = HoldState::Idle;
        }
        log::debug!("gesture classified as drag ({})", trigger);
    }

    /// Tears down an in-flight hold and its feedback. Idempotent; safe to
    /// call with no hold in progress.
    pub fn cancel_hold(&mut self) {
        self.timers.cancel(TimerKey::HoldInitiator);
        self.timers.cancel(TimerKey::VideoActivation);
        self.timers.cancel(TimerKey::ParticleSpawn);
        self.progress.cancel();
        self.particles.halt_emission();
        self.viewer.set_input_enabled(true);
        self.hold = HoldState::Idle;
    }

    /// Starts the fade from the model to the reveal video. Ignored unless
    /// the model is showing and no transition is in flight.
    pub fn show_video(&mut self, now: Instant) {
        if !self.reveal.is_model() || self.interaction_locked {
            log::debug!("show_video ignored, card surface is busy");
            return;
        }
        self.begin_transition(RevealSurface::Video, now);
    }

    /// Starts the fade from the video back to the model. Ignored unless the
    /// video is showing.
    pub fn return_to_model(&mut self, now: Instant) {
        if !self.reveal.is_video() {
            log::debug!("return_to_model ignored, video not showing");
            return;
        }
        self.begin_transition(RevealSurface::Model, now);
    }

    fn begin_transition(&mut self, to: RevealSurface, now: Instant) {
        self.cancel_hold();
        self.interaction_locked = true;
        self.camera.suspend();
        self.reveal = RevealState::Transitioning {
            to,
            started_at: now,
        };
        self.timers
            .schedule(TimerKey::FadeTransition, now, self.tuning.fade_duration);
        log::info!("reveal transition started towards {:?}", to);
    }

    /// Advances everything clock-driven by one tick: feedback, due timers,
    /// camera auto-rotation, playback position, and the natural end of the
    /// reveal video.
    fn advance(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        self.particles.update(now);
        if let Some(cue) = self.progress.tick(now) {
            effects.push(Effect::Haptic(cue));
        }

        for key in self.timers.due(now) {
            self.dispatch_timer(key, now, effects);
        }

        self.camera.tick(&mut self.viewer, now);
        self.playback.advance(now);
        if self.reveal.is_video() && self.playback.state().has_ended() {
            log::info!("reveal video finished");
            self.return_to_model(now);
        }
    }

    fn dispatch_timer(&mut self, key: TimerKey, now: Instant, effects: &mut Vec<Effect>) {
        match key {
            TimerKey::HoldInitiator => self.on_hold_recognized(now, effects),
            TimerKey::VideoActivation => self.on_video_activation(now),
            TimerKey::FadeTransition => self.on_fade_complete(now, effects),
            TimerKey::CameraSnap => self.on_camera_snap(now),
            TimerKey::AutoRotateResume => self.on_rotate_resume(),
            TimerKey::ParticleSpawn => {
                if self.hold.is_active() {
                    self.particles.spawn_burst(now);
                }
            }
        }
    }

    fn on_hold_recognized(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let origin = match &self.session {
            Some(session) if !session.is_dragging() => session.start_position(),
            _ => {
                log::debug!("stale hold timer ignored");
                return;
            }
        };
        if !self.hold.is_pending() || !self.reveal.is_model() || self.interaction_locked {
            log::debug!("stale hold timer ignored");
            return;
        }

        self.hold = HoldState::Active { confirmed_at: now };
        // Face the card before the reveal; the camera may have been
        // mid-rotation when the press landed.
        self.camera.snap_to_nearest(&mut self.viewer);
        self.viewer.set_input_enabled(false);
        self.progress.begin(now, self.tuning.video_activation_delay);
        self.particles.begin_emitting(origin);
        self.particles.spawn_burst(now);
        self.timers
            .schedule_repeating(TimerKey::ParticleSpawn, now, self.tuning.particle_interval);
        self.timers.schedule(
            TimerKey::VideoActivation,
            now,
            self.tuning.video_activation_delay,
        );
        effects.push(Effect::Haptic(HapticCue::HoldConfirmed));
        log::debug!("hold recognized, video activation armed");
    }

    fn on_video_activation(&mut self, now: Instant) {
        if !self.hold.is_active() {
            log::debug!("stale video activation ignored");
            return;
        }
        self.show_video(now);
    }

    fn on_fade_complete(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let Some(target) = self.reveal.transition_target() else {
            log::debug!("stale fade timer ignored");
            return;
        };

        match target {
            RevealSurface::Video => {
                self.reveal = RevealState::Video;
                self.interaction_locked = false;
                if let Err(err) = self.playback.play() {
                    log::warn!("reveal playback failed to start: {}", err);
                    effects.push(Effect::Warn {
                        message_key: "notification-playback-start-failed",
                    });
                } else {
                    log::info!("reveal video playing");
                }
            }
            RevealSurface::Model => {
                self.playback.rewind();
                self.reveal = RevealState::Model;
                self.interaction_locked = false;
                // Let the model settle on screen before the camera wakes up.
                self.timers.schedule(
                    TimerKey::CameraSnap,
                    now,
                    self.tuning.video_activation_delay,
                );
                self.timers.schedule(
                    TimerKey::AutoRotateResume,
                    now,
                    self.tuning.video_activation_delay,
                );
                log::info!("back on the model surface");
            }
        }
    }

    fn on_camera_snap(&mut self, now: Instant) {
        let idle_long_enough = self.last_interaction.map_or(true, |at| {
            now.saturating_duration_since(at) >= self.tuning.camera_snap_delay
        });
        if self.session.is_some() || !self.reveal.is_model() || !idle_long_enough {
            log::debug!("camera snap skipped, card is busy");
            return;
        }
        self.camera.snap_to_nearest(&mut self.viewer);
    }

    fn on_rotate_resume(&mut self) {
        if self.session.is_some() || !self.reveal.is_model() {
            log::debug!("auto-rotate resume skipped, card is busy");
            return;
        }
        self.camera.resume();
    }

    /// Pauses the reveal video, keeping its position. Used when the window
    /// loses focus.
    pub fn pause_playback(&mut self) {
        if self.reveal.is_video() && self.playback.state().is_playing() {
            self.playback.pause();
        }
    }

    /// Resumes a reveal video paused by [`pause_playback`](Self::pause_playback).
    pub fn resume_playback(&mut self) {
        if self.reveal.is_video() && self.playback.state().is_paused() {
            if let Err(err) = self.playback.play() {
                log::warn!("reveal playback failed to resume: {}", err);
            }
        }
    }

    pub fn hold(&self) -> HoldState {
        self.hold
    }

    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    pub fn is_interaction_locked(&self) -> bool {
        self.interaction_locked
    }

    pub fn has_open_gesture(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.session
            .as_ref()
            .map_or(false, InteractionSession::is_dragging)
    }

    pub fn progress(&self) -> &HoldProgress {
        &self.progress
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut V {
        &mut self.viewer
    }

    pub fn playback(&self) -> &P {
        &self.playback
    }

    /// Fade completion fraction in [0, 1] while transitioning, `None`
    /// otherwise. Drives the cross-fade alpha in the view.
    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        match self.reveal {
            RevealState::Transitioning { started_at, .. } => {
                let elapsed = now.saturating_duration_since(started_at);
                Some((elapsed.as_secs_f32() / self.tuning.fade_duration.as_secs_f32()).min(1.0))
            }
            _ => None,
        }
    }

    /// Playback position as a fraction of the clip, in [0, 1].
    pub fn playback_progress(&self) -> f32 {
        let duration = self.playback.duration_secs();
        if duration <= 0.0 {
            return 0.0;
        }
        let fraction = self.playback.state().position_secs() / duration;
        fraction.clamp(0.0, 1.0) as f32
    }
}
