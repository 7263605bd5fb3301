// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: items, the manifest they come from, responsive column
//! resolution and the masonry layout engine.
//!
//! Nothing in here depends on the GUI toolkit; the presentation layer in
//! [`crate::ui::masonry`] consumes the positioned boxes produced here.

pub mod columns;
pub mod item;
pub mod layout;
pub mod manifest;

pub use columns::{Breakpoint, ColumnResolver, ResponsiveColumns};
pub use item::{GalleryItem, ItemId, PositionedItem};
pub use layout::{content_height, layout};
pub use manifest::{Header, Manifest};
