// SPDX-License-Identifier: MPL-2.0
//! Deterministic delayed-work registry for the interaction state machine.
//!
//! Every pending piece of delayed work (hold recognition, video activation,
//! fade completion, camera snap, rotation resume, particle spawning) is keyed
//! by a [`TimerKey`]. At most one deadline can be live per key: scheduling a
//! key again replaces the previous deadline, which is what prevents a
//! superseded gesture's callbacks from firing later.
//!
//! Nothing here touches the wall clock. Deadlines are set and drained against
//! caller-provided `Instant`s, so tests control time completely.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Identity of a delayed action. One live deadline per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKey {
    /// Pending press becomes a recognized hold.
    HoldInitiator,
    /// Recognized hold reveals the video.
    VideoActivation,
    /// Surface cross-fade completes.
    FadeTransition,
    /// Camera snaps to the nearest face after inactivity.
    CameraSnap,
    /// Idle auto-rotation resumes.
    AutoRotateResume,
    /// Next particle burst while a hold is active.
    ParticleSpawn,
}

#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    deadline: Instant,
    /// Re-arm interval for repeating timers.
    period: Option<Duration>,
}

/// Enum-keyed deadline store drained from the tick loop.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    entries: HashMap<TimerKey, TimerEntry>,
}

impl TimerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Schedules `key` to fire once at `now + delay`.
    ///
    /// Replaces any previous deadline under the same key, one-shot or
    /// repeating. The replacement is atomic from the caller's point of view:
    /// the superseded deadline can never fire afterwards.
    pub fn schedule(&mut self, key: TimerKey, now: Instant, delay: Duration) {
        self.entries.insert(
            key,
            TimerEntry {
                deadline: now + delay,
                period: None,
            },
        );
    }

    /// Schedules `key` to fire every `period`, starting at `now + period`.
    ///
    /// Replaces any previous deadline under the same key.
    pub fn schedule_repeating(&mut self, key: TimerKey, now: Instant, period: Duration) {
        self.entries.insert(
            key,
            TimerEntry {
                deadline: now + period,
                period: Some(period),
            },
        );
    }

    /// Cancels `key`. Canceling an absent key is a no-op.
    ///
    /// Returns whether a deadline was actually removed.
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        self.entries.remove(&key).is_some()
    }

    /// Drops every pending deadline. Used on teardown and on transitions
    /// that invalidate all outstanding work.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_scheduled(&self, key: TimerKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Deadline currently registered for `key`, if any.
    #[must_use]
    pub fn deadline(&self, key: TimerKey) -> Option<Instant> {
        self.entries.get(&key).map(|entry| entry.deadline)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the keys whose deadline has passed, ordered by deadline
    /// (ties broken by key declaration order so drains are deterministic).
    ///
    /// One-shot keys are removed. A repeating key fires at most once per
    /// drain and is re-armed at `now + period`; missed periods are not
    /// replayed.
    pub fn due(&mut self, now: Instant) -> Vec<TimerKey> {
        let mut fired: Vec<(Instant, TimerKey)> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .map(|(key, entry)| (entry.deadline, *key))
            .collect();
        fired.sort();

        for (_, key) in &fired {
            match self.entries.get(key).and_then(|entry| entry.period) {
                Some(period) => {
                    self.entries.insert(
                        *key,
                        TimerEntry {
                            deadline: now + period,
                            period: Some(period),
                        },
                    );
                }
                None => {
                    self.entries.remove(key);
                }
            }
        }

        fired.into_iter().map(|(_, key)| key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn one_shot_fires_exactly_once_at_deadline() {
        let mut timers = TimerRegistry::new();
        let t0 = Instant::now();
        timers.schedule(TimerKey::HoldInitiator, t0, ms(100));

        assert!(timers.due(t0 + ms(99)).is_empty());
        assert_eq!(timers.due(t0 + ms(100)), vec![TimerKey::HoldInitiator]);
        assert!(timers.due(t0 + ms(200)).is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn scheduling_replaces_prior_deadline() {
        let mut timers = TimerRegistry::new();
        let t0 = Instant::now();
        timers.schedule(TimerKey::HoldInitiator, t0, ms(100));
        timers.schedule(TimerKey::HoldInitiator, t0 + ms(50), ms(100));

        // The superseded deadline must not fire
        assert!(timers.due(t0 + ms(100)).is_empty());
        assert_eq!(
            timers.due(t0 + ms(150)),
            vec![TimerKey::HoldInitiator],
            "only the replacement deadline fires"
        );
    }

    #[test]
    fn cancel_prevents_firing_and_reports_removal() {
        let mut timers = TimerRegistry::new();
        let t0 = Instant::now();
        timers.schedule(TimerKey::CameraSnap, t0, ms(100));

        assert!(timers.cancel(TimerKey::CameraSnap));
        assert!(timers.due(t0 + ms(100)).is_empty());
    }

    #[test]
    fn cancel_absent_key_is_noop() {
        let mut timers = TimerRegistry::new();
        assert!(!timers.cancel(TimerKey::VideoActivation));
    }

    #[test]
    fn cancel_all_clears_everything() {
        let mut timers = TimerRegistry::new();
        let t0 = Instant::now();
        timers.schedule(TimerKey::HoldInitiator, t0, ms(10));
        timers.schedule_repeating(TimerKey::ParticleSpawn, t0, ms(10));

        timers.cancel_all();

        assert!(timers.is_empty());
        assert!(timers.due(t0 + ms(50)).is_empty());
    }

    #[test]
    fn due_orders_by_deadline() {
        let mut timers = TimerRegistry::new();
        let t0 = Instant::now();
        timers.schedule(TimerKey::CameraSnap, t0, ms(30));
        timers.schedule(TimerKey::HoldInitiator, t0, ms(10));
        timers.schedule(TimerKey::VideoActivation, t0, ms(20));

        assert_eq!(
            timers.due(t0 + ms(30)),
            vec![
                TimerKey::HoldInitiator,
                TimerKey::VideoActivation,
                TimerKey::CameraSnap
            ]
        );
    }

    #[test]
    fn equal_deadlines_drain_in_key_order() {
        let mut timers = TimerRegistry::new();
        let t0 = Instant::now();
        timers.schedule(TimerKey::AutoRotateResume, t0, ms(10));
        timers.schedule(TimerKey::CameraSnap, t0, ms(10));

        assert_eq!(
            timers.due(t0 + ms(10)),
            vec![TimerKey::CameraSnap, TimerKey::AutoRotateResume]
        );
    }

    #[test]
    fn repeating_timer_rearms_after_each_drain() {
        let mut timers = TimerRegistry::new();
        let t0 = Instant::now();
        timers.schedule_repeating(TimerKey::ParticleSpawn, t0, ms(100));

        assert_eq!(timers.due(t0 + ms(100)), vec![TimerKey::ParticleSpawn]);
        assert!(timers.is_scheduled(TimerKey::ParticleSpawn));
        assert_eq!(timers.due(t0 + ms(200)), vec![TimerKey::ParticleSpawn]);
    }

    #[test]
    fn repeating_timer_fires_once_per_drain_without_catchup() {
        let mut timers = TimerRegistry::new();
        let t0 = Instant::now();
        timers.schedule_repeating(TimerKey::ParticleSpawn, t0, ms(10));

        // 100ms late: a single fire, re-armed relative to the drain time
        assert_eq!(timers.due(t0 + ms(100)), vec![TimerKey::ParticleSpawn]);
        assert_eq!(
            timers.deadline(TimerKey::ParticleSpawn),
            Some(t0 + ms(110))
        );
    }

    #[test]
    fn deadline_reports_scheduled_instant() {
        let mut timers = TimerRegistry::new();
        let t0 = Instant::now();
        timers.schedule(TimerKey::FadeTransition, t0, ms(300));
        assert_eq!(timers.deadline(TimerKey::FadeTransition), Some(t0 + ms(300)));
        assert_eq!(timers.deadline(TimerKey::CameraSnap), None);
    }
}
