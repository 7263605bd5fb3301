// SPDX-License-Identifier: MPL-2.0
//! Timing domain types for the gallery choreography.
//!
//! Both types hold seconds and clamp to their configured range so any value
//! read from `settings.toml` can be used directly.

use crate::config::{
    DEFAULT_STAGGER_SECS, DEFAULT_UPDATE_DURATION_SECS, MAX_STAGGER_SECS,
    MAX_UPDATE_DURATION_SECS, MIN_STAGGER_SECS, MIN_UPDATE_DURATION_SECS,
};
use std::time::Duration;

/// Duration of relayout tweens.
///
/// # Example
///
/// ```
/// use tribute_gallery::ui::state::UpdateDuration;
///
/// assert_eq!(UpdateDuration::new(0.3).value(), 0.3);
/// assert_eq!(UpdateDuration::new(60.0).value(), 5.0); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateDuration(f32);

impl UpdateDuration {
    /// Creates a new duration, clamping to the valid range. NaN falls back
    /// to the default.
    #[must_use]
    pub fn new(secs: f32) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(MIN_UPDATE_DURATION_SECS, MAX_UPDATE_DURATION_SECS))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        whole_millis(self.0)
    }
}

impl Default for UpdateDuration {
    fn default() -> Self {
        Self(DEFAULT_UPDATE_DURATION_SECS)
    }
}

/// Delay added per item to the entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger(f32);

impl Stagger {
    /// Creates a new stagger step, clamping to the valid range. NaN falls
    /// back to the default.
    #[must_use]
    pub fn new(secs: f32) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(MIN_STAGGER_SECS, MAX_STAGGER_SECS))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        whole_millis(self.0)
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self(DEFAULT_STAGGER_SECS)
    }
}

/// Rounds to whole milliseconds so `0.6` maps to exactly 600 ms.
fn whole_millis(secs: f32) -> Duration {
    Duration::from_millis((secs * 1000.0).round() as u64)
}
