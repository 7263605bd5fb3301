// SPDX-License-Identifier: MPL-2.0
//! `tribute_gallery` is an animated masonry photo gallery built with the Iced GUI framework.
//!
//! It packs a static list of photos into responsive columns, animates them
//! into place once every image has loaded, and shows a selected photo in a
//! lightbox. UI strings are localized with Fluent and behavior is tuned
//! through an optional `settings.toml`.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
