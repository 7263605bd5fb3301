// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`masonry`] - Animated masonry gallery and its lightbox
//! - [`header`] - Greeting header above the gallery
//!
//! # Shared Infrastructure
//!
//! - [`animation`] - Easing curves and time-based tweens
//! - [`state`] - Validated values read from the configuration
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod animation;
pub mod design_tokens;
pub mod header;
pub mod masonry;
pub mod state;
pub mod styles;
