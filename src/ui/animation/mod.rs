// SPDX-License-Identifier: MPL-2.0
//! Tweening primitives driving the gallery choreography.

pub mod easing;
pub mod tween;

pub use easing::{Easing, Ramp};
pub use tween::{Animated, Lerp, Transition};
