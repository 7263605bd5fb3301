// SPDX-License-Identifier: MPL-2.0
//! Validated UI state values read from the configuration.

pub mod hover_scale;
pub mod timing;

pub use hover_scale::HoverScale;
pub use timing::{Stagger, UpdateDuration};
