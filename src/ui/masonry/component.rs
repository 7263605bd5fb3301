// SPDX-License-Identifier: MPL-2.0
//! Masonry gallery component: owns the item list, the responsive column
//! count, the preload gate, the item choreography and the lightbox.

use super::controller::{AnimationOptions, Controller, Lifecycle, Stage};
use super::lightbox::Lightbox;
use crate::error::Error;
use crate::gallery::{
    content_height, layout, GalleryItem, ItemId, PositionedItem, ResponsiveColumns,
};
use crate::media::{Generation, ImageData, PreloadGate, PreloadRequest, Settle};
use iced::Size;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Decoded image of an item, or the fact that it could not be loaded.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loaded(ImageData),
    Failed,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The window was opened or resized.
    ViewportChanged(Size),
    /// One image of a preload run settled.
    ImageSettled {
        generation: Generation,
        id: ItemId,
        result: Result<ImageData, Error>,
    },
    PointerEntered(ItemId),
    PointerLeft(ItemId),
    Selected(ItemId),
    CloseRequested,
    /// Animation frame.
    Tick(Instant),
}

/// Work the application must perform on behalf of the component.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Decode these images in the background and report each one back.
    Preload(Vec<PreloadRequest>),
}

pub struct State {
    items: Vec<GalleryItem>,
    grid: Vec<PositionedItem>,
    columns: ResponsiveColumns,
    window: Size,
    horizontal_padding: f32,
    gate: PreloadGate,
    images: HashMap<ItemId, ImageSlot>,
    controller: Controller,
    lightbox: Lightbox,
    now: Instant,
    rng: StdRng,
}

impl State {
    /// Creates the component. `horizontal_padding` is the total page
    /// padding subtracted from the window width to get the container width.
    #[must_use]
    pub fn new(
        columns: ResponsiveColumns,
        options: AnimationOptions,
        horizontal_padding: f32,
    ) -> Self {
        Self {
            items: Vec::new(),
            grid: Vec::new(),
            columns,
            window: Size::ZERO,
            horizontal_padding,
            gate: PreloadGate::new(),
            images: HashMap::new(),
            controller: Controller::new(options),
            lightbox: Lightbox::default(),
            now: Instant::now(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the random source used for the `random` entrance.
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Replaces the item list and starts preloading its images.
    pub fn set_items(&mut self, items: Vec<GalleryItem>) -> Effect {
        let keep: HashSet<&ItemId> = items.iter().map(|item| &item.id).collect();
        self.images.retain(|id, _| keep.contains(id));
        self.items = items;

        let references = self
            .items
            .iter()
            .map(|item| (item.id.clone(), item.image.clone()));
        let requests = self.gate.begin(references);
        if self.gate.is_ready() {
            self.relayout();
        }
        if requests.is_empty() {
            Effect::None
        } else {
            Effect::Preload(requests)
        }
    }

    pub fn handle(&mut self, message: Message, now: Instant) -> Effect {
        self.now = now;
        match message {
            Message::ViewportChanged(size) => {
                self.window = size;
                if let Some(columns) = self.columns.update(size.width) {
                    tracing::debug!(columns, "column count changed");
                }
                self.relayout();
            }
            Message::ImageSettled {
                generation,
                id,
                result,
            } => {
                if self.gate.settle(generation, &id) == Settle::Stale {
                    return Effect::None;
                }
                let slot = match result {
                    Ok(image) => ImageSlot::Loaded(image),
                    Err(err) => {
                        tracing::warn!(item = %id, %err, "failed to load gallery image");
                        ImageSlot::Failed
                    }
                };
                self.images.insert(id, slot);
                if self.gate.is_ready() {
                    self.relayout();
                }
            }
            Message::PointerEntered(id) => self.controller.pointer_entered(&id, now),
            Message::PointerLeft(id) => self.controller.pointer_left(&id, now),
            Message::Selected(id) => {
                if self.controller.visual(&id).is_some() {
                    self.lightbox.open(id, now);
                }
            }
            Message::CloseRequested => {
                self.lightbox.close(now);
            }
            Message::Tick(_) => {
                self.controller.tick(now);
                self.lightbox.tick(now);
            }
        }
        Effect::None
    }

    /// Recomputes the grid for the current width, columns and items.
    fn relayout(&mut self) {
        if !self.gate.is_ready() {
            return;
        }
        let grid = layout(&self.items, self.container_width(), self.columns.current());
        if grid.is_empty() && !self.items.is_empty() {
            return;
        }
        if grid == self.grid && self.controller.lifecycle() == Lifecycle::Mounted {
            return;
        }
        self.grid = grid;
        let stage = Stage {
            window: self.window,
            container: Size::new(self.container_width(), content_height(&self.grid)),
        };
        self.controller
            .apply_layout(&self.grid, stage, self.now, &mut self.rng);
    }

    #[must_use]
    pub fn container_width(&self) -> f32 {
        (self.window.width - self.horizontal_padding).max(0.0)
    }

    #[must_use]
    pub fn window(&self) -> Size {
        self.window
    }

    #[must_use]
    pub fn grid(&self) -> &[PositionedItem] {
        &self.grid
    }

    #[must_use]
    pub fn content_height(&self) -> f32 {
        content_height(&self.grid)
    }

    #[must_use]
    pub fn image(&self, id: &ItemId) -> Option<&ImageSlot> {
        self.images.get(id)
    }

    /// Number of items whose image could not be loaded.
    #[must_use]
    pub fn failed_images(&self) -> usize {
        self.images
            .values()
            .filter(|slot| matches!(slot, ImageSlot::Failed))
            .count()
    }

    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.gate.is_ready()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns.current()
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Whether frames are needed to advance a tween.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating() || self.lightbox.is_animating()
    }

    /// The selected item as currently laid out.
    #[must_use]
    pub fn selected_item(&self) -> Option<&PositionedItem> {
        let id = self.lightbox.selected()?;
        self.grid.iter().find(|placed| placed.id() == id)
    }
}
