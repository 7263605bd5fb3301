// SPDX-License-Identifier: MPL-2.0
//! Entrance, relayout and hover choreography for the gallery items.
//!
//! The controller owns one [`ItemVisual`] per item id. The first non-empty
//! layout mounts the gallery and plays the staggered entrance; every later
//! layout only moves and resizes boxes, except for ids seen for the first
//! time, which enter on their own.

use super::direction::EntranceDirection;
use super::visual::{Geometry, ItemPhase, ItemVisual};
use crate::gallery::{ItemId, PositionedItem};
use crate::ui::animation::{Easing, Ramp, Transition};
use iced::Size;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// Entrance timing. Not configurable.
const ENTRANCE_DURATION: Duration = Duration::from_millis(800);

/// Hover tween duration for both scale and overlay.
const HOVER_DURATION: Duration = Duration::from_millis(300);

/// Overlay opacity while hovered.
pub const HOVER_OVERLAY_OPACITY: f32 = 0.3;

/// Whether the gallery has played its entrance yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Unmounted,
    Mounted,
}

/// Tunables of the choreography.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationOptions {
    /// Curve of relayout tweens.
    pub easing: Easing,
    /// Duration of relayout tweens.
    pub duration: Duration,
    /// Delay added per item to the entrance.
    pub stagger: Duration,
    pub direction: EntranceDirection,
    pub blur_to_focus: bool,
    pub scale_on_hover: bool,
    pub hover_scale: f32,
    pub color_shift_on_hover: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            easing: Easing::POWER3_OUT,
            duration: Duration::from_millis(600),
            stagger: Duration::from_millis(50),
            direction: EntranceDirection::Bottom,
            blur_to_focus: true,
            scale_on_hover: true,
            hover_scale: 0.95,
            color_shift_on_hover: false,
        }
    }
}

/// Sizes the entrance positions are computed against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stage {
    pub window: Size,
    pub container: Size,
}

#[derive(Debug, Clone, Default)]
pub struct Controller {
    lifecycle: Lifecycle,
    visuals: HashMap<ItemId, ItemVisual>,
    options: AnimationOptions,
}

impl Controller {
    #[must_use]
    pub fn new(options: AnimationOptions) -> Self {
        Self {
            lifecycle: Lifecycle::Unmounted,
            visuals: HashMap::new(),
            options,
        }
    }

    /// Reacts to a freshly computed grid.
    ///
    /// Must only be called once the images of the grid have settled.
    pub fn apply_layout(
        &mut self,
        grid: &[PositionedItem],
        stage: Stage,
        now: Instant,
        rng: &mut impl Rng,
    ) {
        if self.lifecycle == Lifecycle::Unmounted && grid.is_empty() {
            return;
        }

        let present: HashSet<&ItemId> = grid.iter().map(PositionedItem::id).collect();
        self.visuals.retain(|id, _| present.contains(id));

        let entrance = Transition::new(ENTRANCE_DURATION, Easing::POWER3_OUT);
        let update = Transition::new(self.options.duration, self.options.easing);
        let mut entering = 0u32;

        for placed in grid {
            let target = Geometry::from(placed);
            if let Some(visual) = self.visuals.get_mut(placed.id()) {
                visual.update_to(target, update, now);
                continue;
            }

            let direction = self.options.direction.resolve(rng);
            let (x, y) = direction.start_position(placed, stage.window, stage.container);
            let start = Geometry { x, y, ..target };
            let delay = self.options.stagger * entering;
            entering += 1;

            self.visuals.insert(
                placed.id().clone(),
                ItemVisual::entering(
                    start,
                    target,
                    self.options.blur_to_focus,
                    entrance.with_delay(delay),
                    now,
                ),
            );
        }

        if self.lifecycle == Lifecycle::Unmounted {
            tracing::debug!(items = grid.len(), "gallery mounted");
            self.lifecycle = Lifecycle::Mounted;
        }
    }

    /// Pointer moved over an item.
    pub fn pointer_entered(&mut self, id: &ItemId, now: Instant) {
        self.hover(id, true, now);
    }

    /// Pointer left an item.
    pub fn pointer_left(&mut self, id: &ItemId, now: Instant) {
        self.hover(id, false, now);
    }

    fn hover(&mut self, id: &ItemId, hovered: bool, now: Instant) {
        let options = self.options;
        let Some(visual) = self.visuals.get_mut(id) else {
            return;
        };
        visual.set_hovered(hovered);

        if options.scale_on_hover {
            let scale = if hovered { options.hover_scale } else { 1.0 };
            visual.scale.animate_to(
                scale,
                Transition::new(HOVER_DURATION, Easing::POWER2_OUT),
                now,
            );
        }
        if options.color_shift_on_hover {
            let overlay = if hovered { HOVER_OVERLAY_OPACITY } else { 0.0 };
            visual.overlay.animate_to(
                overlay,
                Transition::new(HOVER_DURATION, Easing::Power(1, Ramp::Out)),
                now,
            );
        }
    }

    /// Settles finished tweens on every item.
    pub fn tick(&mut self, now: Instant) {
        for visual in self.visuals.values_mut() {
            visual.tick(now);
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.visuals.values().any(ItemVisual::is_animating)
    }

    #[must_use]
    pub fn visual(&self, id: &ItemId) -> Option<&ItemVisual> {
        self.visuals.get(id)
    }

    #[must_use]
    pub fn phase(&self, id: &ItemId) -> Option<ItemPhase> {
        self.visuals.get(id).map(ItemVisual::phase)
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{layout, GalleryItem};
    use crate::test_utils::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const STAGE: Stage = Stage {
        window: Size::new(1200.0, 800.0),
        container: Size::new(1000.0, 1200.0),
    };

    fn grid(width: f32, columns: usize) -> Vec<PositionedItem> {
        let items = vec![
            GalleryItem::new("1", "1.jpg", 400.0),
            GalleryItem::new("2", "2.jpg", 250.0),
            GalleryItem::new("3", "3.jpg", 600.0),
        ];
        layout(&items, width, columns)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn empty_grid_does_not_mount() {
        let mut controller = Controller::default();
        controller.apply_layout(&[], STAGE, Instant::now(), &mut rng());
        assert_eq!(controller.lifecycle(), Lifecycle::Unmounted);
    }

    #[test]
    fn first_layout_plays_staggered_entrance_from_bottom() {
        let now = Instant::now();
        let mut controller = Controller::default();
        let grid = grid(1000.0, 4);
        controller.apply_layout(&grid, STAGE, now, &mut rng());

        assert_eq!(controller.lifecycle(), Lifecycle::Mounted);
        for placed in &grid {
            let visual = controller.visual(placed.id()).expect("visual exists");
            assert_eq!(visual.phase(), ItemPhase::Entering);
            let sample = visual.sample(now);
            assert_abs_diff_eq!(sample.appearance.opacity, 0.0);
            assert_abs_diff_eq!(sample.geometry.y, 1000.0);
            assert_abs_diff_eq!(sample.geometry.x, placed.x);
        }

        // The third item waits two stagger steps before moving.
        let third = controller.visual(grid[2].id()).expect("visual exists");
        assert_abs_diff_eq!(
            third.sample(now + Duration::from_millis(99)).geometry.y,
            1000.0
        );

        controller.tick(now + Duration::from_millis(900));
        assert!(!controller.is_animating());
        for placed in &grid {
            assert_eq!(controller.phase(placed.id()), Some(ItemPhase::Idle));
            let sample = controller.visual(placed.id()).expect("visual").sample(now);
            assert_abs_diff_eq!(sample.geometry.y, placed.y);
            assert_abs_diff_eq!(sample.appearance.opacity, 1.0);
        }
    }

    #[test]
    fn relayout_moves_existing_items_only() {
        let now = Instant::now();
        let mut controller = Controller::default();
        controller.apply_layout(&grid(1000.0, 4), STAGE, now, &mut rng());
        let settled = now + Duration::from_secs(1);
        controller.tick(settled);

        let narrow = grid(600.0, 3);
        controller.apply_layout(&narrow, STAGE, settled, &mut rng());

        for placed in &narrow {
            let visual = controller.visual(placed.id()).expect("visual exists");
            assert_eq!(visual.phase(), ItemPhase::Updating);
            let sample = visual.sample(settled);
            assert_abs_diff_eq!(sample.appearance.opacity, 1.0);
        }

        controller.tick(settled + Duration::from_millis(600));
        for placed in &narrow {
            let sample = controller
                .visual(placed.id())
                .expect("visual")
                .sample(settled);
            assert_abs_diff_eq!(sample.geometry.x, placed.x);
            assert_abs_diff_eq!(sample.geometry.width, placed.width);
            assert_eq!(controller.phase(placed.id()), Some(ItemPhase::Idle));
        }
    }

    #[test]
    fn new_ids_enter_and_missing_ids_are_dropped() {
        let now = Instant::now();
        let mut controller = Controller::default();
        controller.apply_layout(&grid(1000.0, 4), STAGE, now, &mut rng());

        let items = vec![
            GalleryItem::new("1", "1.jpg", 400.0),
            GalleryItem::new("9", "9.jpg", 300.0),
        ];
        let next = layout(&items, 1000.0, 4);
        controller.apply_layout(&next, STAGE, now, &mut rng());

        assert!(controller.visual(&ItemId::from("2")).is_none());
        assert_eq!(
            controller.phase(&ItemId::from("9")),
            Some(ItemPhase::Entering)
        );
    }

    #[test]
    fn hover_scales_and_restores() {
        let now = Instant::now();
        let mut controller = Controller::default();
        controller.apply_layout(&grid(1000.0, 4), STAGE, now, &mut rng());
        let id = ItemId::from("1");

        controller.pointer_entered(&id, now);
        let visual = controller.visual(&id).expect("visual");
        assert!(visual.is_hovered());
        assert_abs_diff_eq!(visual.scale.target(), 0.95);
        // Color shift is off by default.
        assert!(!visual.overlay.is_animating());

        let later = now + Duration::from_millis(150);
        controller.pointer_left(&id, later);
        let visual = controller.visual(&id).expect("visual");
        assert!(!visual.is_hovered());
        assert_abs_diff_eq!(visual.scale.target(), 1.0);
        // Restarted from the value reached mid-tween, not from 0.95.
        assert!(visual.scale.value(later) < 1.0);
        assert!(visual.scale.value(later) > 0.95);
    }

    #[test]
    fn color_shift_targets_overlay() {
        let now = Instant::now();
        let mut controller = Controller::new(AnimationOptions {
            color_shift_on_hover: true,
            scale_on_hover: false,
            ..AnimationOptions::default()
        });
        controller.apply_layout(&grid(1000.0, 4), STAGE, now, &mut rng());
        let id = ItemId::from("2");

        controller.pointer_entered(&id, now);
        let visual = controller.visual(&id).expect("visual");
        assert_abs_diff_eq!(visual.overlay.target(), HOVER_OVERLAY_OPACITY);
        assert!(!visual.scale.is_animating());
    }

    #[test]
    fn hover_on_unknown_id_is_a_no_op() {
        let mut controller = Controller::default();
        controller.pointer_entered(&ItemId::from("ghost"), Instant::now());
        assert!(!controller.is_animating());
    }

    #[test]
    fn center_entrance_starts_in_the_container_middle() {
        let now = Instant::now();
        let mut controller = Controller::new(AnimationOptions {
            direction: EntranceDirection::Center,
            blur_to_focus: false,
            ..AnimationOptions::default()
        });
        let grid = grid(1000.0, 4);
        controller.apply_layout(&grid, STAGE, now, &mut rng());

        let first = &grid[0];
        let sample = controller.visual(first.id()).expect("visual").sample(now);
        assert_abs_diff_eq!(sample.geometry.x, 500.0 - first.width / 2.0);
        assert_abs_diff_eq!(sample.geometry.y, 600.0 - first.height / 2.0);
        assert_abs_diff_eq!(sample.appearance.blur, 0.0);
    }
}
