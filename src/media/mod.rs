// SPDX-License-Identifier: MPL-2.0
//! Image decoding and the preload gate that holds the gallery back until
//! every photo has settled.

pub mod image;
pub mod preload;

pub use image::{load_image, ImageData};
pub use preload::{load_in_background, Generation, PreloadGate, PreloadRequest, Settle};
