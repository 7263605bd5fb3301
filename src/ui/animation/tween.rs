// SPDX-License-Identifier: MPL-2.0
//! Time-based tweens on interpolable values.
//!
//! An [`Animated`] value is a single track: starting a new tween cancels the
//! one in flight and restarts from the value sampled at that instant, so the
//! latest intent always wins without a visible jump.

use super::easing::Easing;
use std::time::{Duration, Instant};

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    fn lerp(self, target: Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, target: Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Timing of a tween: how long it runs, its curve and its start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Transition {
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Eased progress `elapsed` after the tween was started.
    fn progress(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        self.easing
            .apply(active.as_secs_f32() / self.duration.as_secs_f32())
    }

    fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween<T> {
    from: T,
    to: T,
    started_at: Instant,
    transition: Transition,
}

impl<T: Lerp> Tween<T> {
    fn sample(&self, now: Instant) -> T {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.from.lerp(self.to, self.transition.progress(elapsed))
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.transition.total()
    }
}

/// A value that may be tweening towards a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated<T> {
    value: T,
    tween: Option<Tween<T>>,
}

impl<T: Lerp> Animated<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value, tween: None }
    }

    /// Value at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> T {
        self.tween.map_or(self.value, |tween| tween.sample(now))
    }

    /// Where the track is heading (its current value when idle).
    #[must_use]
    pub fn target(&self) -> T {
        self.tween.map_or(self.value, |tween| tween.to)
    }

    /// Jumps to `value`, cancelling any tween.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.tween = None;
    }

    /// Starts a tween to `target`, cancelling the one in flight.
    pub fn animate_to(&mut self, target: T, transition: Transition, now: Instant) {
        let from = self.value(now);
        self.value = from;
        self.tween = Some(Tween {
            from,
            to: target,
            started_at: now,
            transition,
        });
    }

    /// Settles a finished tween. Returns `true` when one completed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.tween {
            Some(tween) if tween.is_finished(now) => {
                self.value = tween.to;
                self.tween = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}

impl<T: Lerp + Default> Default for Animated<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
