// SPDX-License-Identifier: MPL-2.0
//! Modal lightbox showing one selected item.
//!
//! The selection survives the closing transition and is only cleared once
//! the image has finished fading out.

use crate::gallery::ItemId;
use crate::ui::animation::{Animated, Easing, Transition};
use std::time::{Duration, Instant};

/// Image scale while hidden.
const HIDDEN_SCALE: f32 = 0.8;

const BACKDROP_IN: Transition = Transition::new(Duration::from_millis(300), Easing::POWER2_OUT);
const IMAGE_IN: Transition = Transition::new(Duration::from_millis(400), Easing::POWER3_OUT)
    .with_delay(Duration::from_millis(100));
const BACKDROP_OUT: Transition = Transition::new(Duration::from_millis(200), Easing::POWER2_IN);
const IMAGE_OUT: Transition = Transition::new(Duration::from_millis(250), Easing::POWER2_IN);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Lightbox values at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightboxSample {
    pub backdrop: f32,
    pub image_scale: f32,
    pub image_opacity: f32,
}

#[derive(Debug, Clone)]
pub struct Lightbox {
    phase: LightboxPhase,
    selected: Option<ItemId>,
    backdrop: Animated<f32>,
    image_scale: Animated<f32>,
    image_opacity: Animated<f32>,
}

impl Default for Lightbox {
    fn default() -> Self {
        Self {
            phase: LightboxPhase::Closed,
            selected: None,
            backdrop: Animated::new(0.0),
            image_scale: Animated::new(HIDDEN_SCALE),
            image_opacity: Animated::new(0.0),
        }
    }
}

impl Lightbox {
    /// Shows `id`. While closing, the open transition resumes from the
    /// current values.
    pub fn open(&mut self, id: ItemId, now: Instant) {
        if self.phase == LightboxPhase::Closed {
            self.backdrop.set(0.0);
            self.image_scale.set(HIDDEN_SCALE);
            self.image_opacity.set(0.0);
        }
        tracing::debug!(item = %id, "lightbox opening");
        self.selected = Some(id);

        if matches!(self.phase, LightboxPhase::Closed | LightboxPhase::Closing) {
            self.phase = LightboxPhase::Opening;
            self.backdrop.animate_to(1.0, BACKDROP_IN, now);
            self.image_scale.animate_to(1.0, IMAGE_IN, now);
            self.image_opacity.animate_to(1.0, IMAGE_IN, now);
        }
    }

    /// Starts closing. Returns `false` when already closing or closed.
    pub fn close(&mut self, now: Instant) -> bool {
        if matches!(self.phase, LightboxPhase::Closed | LightboxPhase::Closing) {
            return false;
        }
        self.phase = LightboxPhase::Closing;
        self.image_scale.animate_to(HIDDEN_SCALE, IMAGE_OUT, now);
        self.image_opacity.animate_to(0.0, IMAGE_OUT, now);
        self.backdrop.animate_to(0.0, BACKDROP_OUT, now);
        true
    }

    pub fn tick(&mut self, now: Instant) {
        self.backdrop.tick(now);
        self.image_scale.tick(now);
        self.image_opacity.tick(now);
        let image_settled = !self.image_scale.is_animating() && !self.image_opacity.is_animating();

        match self.phase {
            LightboxPhase::Opening if !self.is_animating() => {
                self.phase = LightboxPhase::Open;
            }
            LightboxPhase::Closing if image_settled => {
                tracing::debug!("lightbox closed");
                self.phase = LightboxPhase::Closed;
                self.selected = None;
            }
            _ => {}
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.backdrop.is_animating()
            || self.image_scale.is_animating()
            || self.image_opacity.is_animating()
    }

    #[must_use]
    pub fn phase(&self) -> LightboxPhase {
        self.phase
    }

    /// Whether the overlay should be drawn and Escape listened for.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != LightboxPhase::Closed
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn sample(&self, now: Instant) -> LightboxSample {
        LightboxSample {
            backdrop: self.backdrop.value(now),
            image_scale: self.image_scale.value(now),
            image_opacity: self.image_opacity.value(now),
        }
    }
}
