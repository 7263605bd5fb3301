// SPDX-License-Identifier: MPL-2.0
//! Gallery item types shared by the layout engine and the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Fallback nominal height for the featured item when none is given.
pub const DEFAULT_FEATURED_HEIGHT: f32 = 900.0;

/// Fallback nominal height for regular items when none is given.
pub const DEFAULT_ITEM_HEIGHT: f32 = 400.0;

/// Stable identifier of a gallery item.
///
/// Visual state, image handles and the lightbox selection are all keyed by
/// this identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A single photo in the gallery, as supplied by the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: ItemId,

    /// Image reference. Relative paths are resolved against the manifest
    /// directory when the manifest is loaded.
    #[serde(rename = "img", alias = "image")]
    pub image: PathBuf,

    /// Optional link target associated with the photo.
    #[serde(
        default,
        rename = "url",
        alias = "link",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,

    /// Nominal height used as a packing hint, not the rendered size.
    #[serde(default)]
    pub height: f32,

    /// Marks the item to be pinned first and enlarged.
    #[serde(default, rename = "main", alias = "featured")]
    pub featured: bool,

    /// Alternative text shown under the photo in the lightbox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl GalleryItem {
    /// Creates a regular item with the given nominal height.
    #[must_use]
    pub fn new(id: impl Into<String>, image: impl Into<PathBuf>, height: f32) -> Self {
        Self {
            id: ItemId::new(id),
            image: image.into(),
            link: None,
            height,
            featured: false,
            alt: None,
        }
    }

    /// Marks this item as featured.
    #[must_use]
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Nominal height, substituting `fallback` when the manifest value is
    /// missing or unusable.
    #[must_use]
    pub fn nominal_height_or(&self, fallback: f32) -> f32 {
        if self.height.is_finite() && self.height > 0.0 {
            self.height
        } else {
            fallback
        }
    }
}

/// A gallery item with its computed box in container coordinates.
///
/// Only valid for the container width it was computed against.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedItem {
    pub item: GalleryItem,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Whether this item was laid out as the featured item.
    pub is_featured: bool,
}

impl PositionedItem {
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.item.id
    }

    /// Bottom edge of the box.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
