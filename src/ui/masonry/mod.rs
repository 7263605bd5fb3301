// SPDX-License-Identifier: MPL-2.0
//! Animated masonry gallery with a modal lightbox.
//!
//! [`component::State`] is driven by [`component::Message`]s forwarded from
//! the application; [`view::view`] draws the tiles and [`view::lightbox`]
//! the overlay stacked above the page.

pub mod component;
pub mod controller;
pub mod direction;
pub mod lightbox;
pub mod view;
pub mod visual;

pub use component::{Effect, ImageSlot, Message, State};
pub use controller::{AnimationOptions, Lifecycle};
pub use direction::EntranceDirection;
pub use lightbox::LightboxPhase;
pub use view::ViewContext;
