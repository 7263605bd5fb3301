// SPDX-License-Identifier: MPL-2.0
//! Per-item animated visual state.

use crate::gallery::PositionedItem;
use crate::ui::animation::{Animated, Lerp, Transition};
use std::time::Instant;

/// Blur radius an item starts from when blur-to-focus is enabled.
pub const ENTRANCE_BLUR: f32 = 10.0;

/// Box of an item in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    /// The box shrunk (or grown) by `scale` about its centre.
    #[must_use]
    pub fn scaled(self, scale: f32) -> Self {
        let width = self.width * scale;
        let height = self.height * scale;
        Self {
            x: self.x + (self.width - width) / 2.0,
            y: self.y + (self.height - height) / 2.0,
            width,
            height,
        }
    }
}

impl From<&PositionedItem> for Geometry {
    fn from(item: &PositionedItem) -> Self {
        Self {
            x: item.x,
            y: item.y,
            width: item.width,
            height: item.height,
        }
    }
}

impl Lerp for Geometry {
    fn lerp(self, target: Self, fraction: f32) -> Self {
        Self {
            x: self.x.lerp(target.x, fraction),
            y: self.y.lerp(target.y, fraction),
            width: self.width.lerp(target.width, fraction),
            height: self.height.lerp(target.height, fraction),
        }
    }
}

/// Opacity and blur radius of an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub opacity: f32,
    pub blur: f32,
}

impl Appearance {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        blur: 0.0,
    };
}

impl Default for Appearance {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl Lerp for Appearance {
    fn lerp(self, target: Self, fraction: f32) -> Self {
        Self {
            opacity: self.opacity.lerp(target.opacity, fraction),
            blur: self.blur.lerp(target.blur, fraction),
        }
    }
}

/// Animation phase of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    Entering,
    Updating,
    Idle,
}

/// Everything needed to draw one item at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualSample {
    pub geometry: Geometry,
    pub appearance: Appearance,
    pub scale: f32,
    pub overlay: f32,
}

/// Animation tracks of one gallery item.
#[derive(Debug, Clone)]
pub struct ItemVisual {
    pub(crate) geometry: Animated<Geometry>,
    pub(crate) appearance: Animated<Appearance>,
    pub(crate) scale: Animated<f32>,
    pub(crate) overlay: Animated<f32>,
    phase: ItemPhase,
    hovered: bool,
}

impl ItemVisual {
    /// Starts an entrance from `start` to `target`.
    pub(crate) fn entering(
        start: Geometry,
        target: Geometry,
        blur_to_focus: bool,
        transition: Transition,
        now: Instant,
    ) -> Self {
        let hidden = Appearance {
            opacity: 0.0,
            blur: if blur_to_focus { ENTRANCE_BLUR } else { 0.0 },
        };
        let mut visual = Self {
            geometry: Animated::new(start),
            appearance: Animated::new(hidden),
            scale: Animated::new(1.0),
            overlay: Animated::new(0.0),
            phase: ItemPhase::Entering,
            hovered: false,
        };
        visual.geometry.animate_to(target, transition, now);
        visual
            .appearance
            .animate_to(Appearance::VISIBLE, transition, now);
        visual
    }

    /// Moves to a new box, leaving opacity, scale and overlay alone.
    pub(crate) fn update_to(&mut self, target: Geometry, transition: Transition, now: Instant) {
        self.geometry.animate_to(target, transition, now);
        if self.phase == ItemPhase::Idle {
            self.phase = ItemPhase::Updating;
        }
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Settles finished tracks and advances the phase.
    pub(crate) fn tick(&mut self, now: Instant) {
        self.geometry.tick(now);
        self.appearance.tick(now);
        self.scale.tick(now);
        self.overlay.tick(now);

        let settled = match self.phase {
            ItemPhase::Entering => !self.geometry.is_animating() && !self.appearance.is_animating(),
            ItemPhase::Updating => !self.geometry.is_animating(),
            ItemPhase::Idle => false,
        };
        if settled {
            self.phase = ItemPhase::Idle;
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.geometry.is_animating()
            || self.appearance.is_animating()
            || self.scale.is_animating()
            || self.overlay.is_animating()
    }

    #[must_use]
    pub fn phase(&self) -> ItemPhase {
        self.phase
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn sample(&self, now: Instant) -> VisualSample {
        VisualSample {
            geometry: self.geometry.value(now),
            appearance: self.appearance.value(now),
            scale: self.scale.value(now),
            overlay: self.overlay.value(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::animation::Easing;
    use std::time::Duration;

    const BOX: Geometry = Geometry {
        x: 10.0,
        y: 20.0,
        width: 100.0,
        height: 50.0,
    };

    #[test]
    fn scaled_keeps_the_centre() {
        let shrunk = BOX.scaled(0.9);
        assert_abs_diff_eq!(shrunk.width, 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(shrunk.height, 45.0, epsilon = 1e-4);
        assert_abs_diff_eq!(shrunk.x + shrunk.width / 2.0, 60.0, epsilon = 1e-4);
        assert_abs_diff_eq!(shrunk.y + shrunk.height / 2.0, 45.0, epsilon = 1e-4);
    }

    #[test]
    fn entrance_fades_in_and_goes_idle() {
        let now = Instant::now();
        let start = Geometry { y: 500.0, ..BOX };
        let transition = Transition::new(Duration::from_millis(800), Easing::POWER3_OUT);
        let mut visual = ItemVisual::entering(start, BOX, true, transition, now);

        let initial = visual.sample(now);
        assert_abs_diff_eq!(initial.appearance.opacity, 0.0);
        assert_abs_diff_eq!(initial.appearance.blur, ENTRANCE_BLUR);
        assert_abs_diff_eq!(initial.geometry.y, 500.0);
        assert_eq!(visual.phase(), ItemPhase::Entering);

        visual.tick(now + Duration::from_millis(800));
        assert_eq!(visual.phase(), ItemPhase::Idle);
        assert_eq!(visual.sample(now).geometry, BOX);
        assert_eq!(visual.sample(now).appearance, Appearance::VISIBLE);
    }

    #[test]
    fn update_only_touches_geometry() {
        let now = Instant::now();
        let mut visual = ItemVisual::entering(
            BOX,
            BOX,
            false,
            Transition::new(Duration::ZERO, Easing::Linear),
            now,
        );
        visual.tick(now);
        assert_eq!(visual.phase(), ItemPhase::Idle);

        let target = Geometry { x: 300.0, ..BOX };
        visual.update_to(
            target,
            Transition::new(Duration::from_millis(600), Easing::POWER3_OUT),
            now,
        );
        assert_eq!(visual.phase(), ItemPhase::Updating);
        assert!(visual.geometry.is_animating());
        assert!(!visual.appearance.is_animating());

        visual.tick(now + Duration::from_millis(600));
        assert_eq!(visual.phase(), ItemPhase::Idle);
        assert_abs_diff_eq!(visual.sample(now).geometry.x, 300.0);
    }
}
