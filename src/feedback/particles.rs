// SPDX-License-Identifier: MPL-2.0
//! Sparkle particles emitted around the pointer during an active hold.
//!
//! Spawning is driven by the controller's repeating particle timer; this
//! module only owns the particles themselves. Emission stops the moment the
//! hold ends, but already-spawned particles live out their lifetime so the
//! effect fades instead of popping off.

use std::time::{Duration, Instant};

use iced::{Point, Vector};
use rand::Rng;

use crate::app::config::EffectsConfig;

/// Initial particle speed range in logical pixels per second.
const SPEED_RANGE: std::ops::Range<f32> = 30.0..90.0;
/// Positional jitter around the spawn origin, in logical pixels.
const ORIGIN_JITTER: f32 = 6.0;

/// One sparkle. `position` and `alpha` are refreshed every tick for the
/// renderer; the rest is fixed at spawn.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Point,
    pub alpha: f32,
    velocity: Vector,
    spawned_at: Instant,
}

/// All live sparkles plus the current emission origin.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    origin: Option<Point>,
    lifetime: Duration,
    per_burst: u32,
    last_update: Option<Instant>,
}

impl ParticleField {
    #[must_use]
    pub fn from_config(effects: &EffectsConfig) -> Self {
        Self {
            particles: Vec::new(),
            origin: None,
            lifetime: effects.particle_lifetime(),
            per_burst: effects.particles_per_burst(),
            last_update: None,
        }
    }

    /// Starts emitting around `origin`. Bursts are triggered externally by
    /// the particle timer calling [`spawn_burst`](Self::spawn_burst).
    pub fn begin_emitting(&mut self, origin: Point) {
        self.origin = Some(origin);
    }

    /// Stops emitting. Live particles keep aging out.
    pub fn halt_emission(&mut self) {
        self.origin = None;
    }

    #[must_use]
    pub fn is_emitting(&self) -> bool {
        self.origin.is_some()
    }

    /// Spawns one burst at the emission origin. No-op while not emitting.
    pub fn spawn_burst(&mut self, now: Instant) {
        let Some(origin) = self.origin else {
            return;
        };

        let mut rng = rand::thread_rng();
        for _ in 0..self.per_burst {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.gen_range(SPEED_RANGE);
            let jitter_x = rng.gen_range(-ORIGIN_JITTER..ORIGIN_JITTER);
            let jitter_y = rng.gen_range(-ORIGIN_JITTER..ORIGIN_JITTER);

            self.particles.push(Particle {
                position: Point::new(origin.x + jitter_x, origin.y + jitter_y),
                alpha: 1.0,
                velocity: Vector::new(angle.cos() * speed, angle.sin() * speed),
                spawned_at: now,
            });
        }
    }

    /// Moves particles, fades them with age, and drops the expired ones.
    pub fn update(&mut self, now: Instant) {
        let elapsed = match self.last_update.replace(now) {
            Some(previous) => now.saturating_duration_since(previous),
            None => return,
        };

        let dt = elapsed.as_secs_f32();
        let lifetime = self.lifetime;
        self.particles.retain_mut(|particle| {
            let age = now.saturating_duration_since(particle.spawned_at);
            if age >= lifetime {
                return false;
            }
            particle.position.x += particle.velocity.x * dt;
            particle.position.y += particle.velocity.y * dt;
            particle.alpha = 1.0 - age.as_secs_f32() / lifetime.as_secs_f32();
            true
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> ParticleField {
        // Defaults: 900ms lifetime, 3 particles per burst
        ParticleField::from_config(&EffectsConfig::default())
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn burst_requires_an_emission_origin() {
        let mut particles = field();
        particles.spawn_burst(Instant::now());
        assert!(particles.is_empty());
    }

    #[test]
    fn burst_spawns_configured_count_near_origin() {
        let mut particles = field();
        let origin = Point::new(200.0, 150.0);
        particles.begin_emitting(origin);
        particles.spawn_burst(Instant::now());

        assert_eq!(particles.len(), 3);
        for particle in particles.iter() {
            assert!((particle.position.x - origin.x).abs() <= ORIGIN_JITTER);
            assert!((particle.position.y - origin.y).abs() <= ORIGIN_JITTER);
            assert_eq!(particle.alpha, 1.0);
        }
    }

    #[test]
    fn particles_move_and_fade_with_age() {
        let mut particles = field();
        let t0 = Instant::now();
        particles.begin_emitting(Point::ORIGIN);
        particles.update(t0);
        particles.spawn_burst(t0);

        particles.update(t0 + ms(450));
        for particle in particles.iter() {
            assert!(particle.alpha < 1.0);
            assert!(particle.alpha > 0.0);
            // Speed is never zero, so every particle has left the origin
            let moved = particle.position.x.abs() + particle.position.y.abs();
            assert!(moved > 0.0);
        }
    }

    #[test]
    fn particles_expire_after_their_lifetime() {
        let mut particles = field();
        let t0 = Instant::now();
        particles.begin_emitting(Point::ORIGIN);
        particles.update(t0);
        particles.spawn_burst(t0);
        assert_eq!(particles.len(), 3);

        particles.update(t0 + ms(900));
        assert!(particles.is_empty());
    }

    #[test]
    fn halting_emission_keeps_live_particles() {
        let mut particles = field();
        let t0 = Instant::now();
        particles.begin_emitting(Point::ORIGIN);
        particles.update(t0);
        particles.spawn_burst(t0);

        particles.halt_emission();
        assert!(!particles.is_emitting());
        assert_eq!(particles.len(), 3);

        // Further bursts are rejected, existing ones age normally
        particles.spawn_burst(t0 + ms(100));
        assert_eq!(particles.len(), 3);
        particles.update(t0 + ms(450));
        assert_eq!(particles.len(), 3);
    }
}
