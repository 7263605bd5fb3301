// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Animation**: Relayout tween, entrance stagger and origin
//! - **Hover**: Hover scale and color shift
//! - **Layout**: Column fallback and bounds
//! - **Window**: Initial window size and page padding

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Easing of relayout tweens.
pub const DEFAULT_EASE: &str = "power3.out";

/// Duration of relayout tweens, in seconds.
pub const DEFAULT_UPDATE_DURATION_SECS: f32 = 0.6;

/// Minimum relayout duration (0 = jump).
pub const MIN_UPDATE_DURATION_SECS: f32 = 0.0;

/// Maximum relayout duration.
pub const MAX_UPDATE_DURATION_SECS: f32 = 5.0;

/// Delay added per item to the entrance, in seconds.
pub const DEFAULT_STAGGER_SECS: f32 = 0.05;

/// Minimum stagger step.
pub const MIN_STAGGER_SECS: f32 = 0.0;

/// Maximum stagger step.
pub const MAX_STAGGER_SECS: f32 = 1.0;

/// Origin of the entrance animation.
pub const DEFAULT_ANIMATE_FROM: &str = "bottom";

/// Whether items start blurred and come into focus.
pub const DEFAULT_BLUR_TO_FOCUS: bool = true;

// ==========================================================================
// Hover Defaults
// ==========================================================================

/// Whether hovered items scale.
pub const DEFAULT_SCALE_ON_HOVER: bool = true;

/// Scale of a hovered item.
pub const DEFAULT_HOVER_SCALE: f32 = 0.95;

/// Minimum hover scale.
pub const MIN_HOVER_SCALE: f32 = 0.5;

/// Maximum hover scale.
pub const MAX_HOVER_SCALE: f32 = 1.5;

/// Whether hovered items get the color overlay.
pub const DEFAULT_COLOR_SHIFT_ON_HOVER: bool = false;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Column count when no breakpoint matches.
pub const DEFAULT_FALLBACK_COLUMNS: usize = 1;

/// Largest column count accepted from the configuration.
pub const MAX_COLUMNS: usize = 12;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Horizontal padding on each side of the page.
pub const PAGE_PADDING: f32 = 24.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Animation validation
    assert!(MIN_UPDATE_DURATION_SECS >= 0.0);
    assert!(MAX_UPDATE_DURATION_SECS > MIN_UPDATE_DURATION_SECS);
    assert!(DEFAULT_UPDATE_DURATION_SECS >= MIN_UPDATE_DURATION_SECS);
    assert!(DEFAULT_UPDATE_DURATION_SECS <= MAX_UPDATE_DURATION_SECS);
    assert!(MIN_STAGGER_SECS >= 0.0);
    assert!(MAX_STAGGER_SECS > MIN_STAGGER_SECS);
    assert!(DEFAULT_STAGGER_SECS >= MIN_STAGGER_SECS);
    assert!(DEFAULT_STAGGER_SECS <= MAX_STAGGER_SECS);

    // Hover validation
    assert!(MIN_HOVER_SCALE > 0.0);
    assert!(MAX_HOVER_SCALE > MIN_HOVER_SCALE);
    assert!(DEFAULT_HOVER_SCALE >= MIN_HOVER_SCALE);
    assert!(DEFAULT_HOVER_SCALE <= MAX_HOVER_SCALE);

    // Layout validation
    assert!(DEFAULT_FALLBACK_COLUMNS > 0);
    assert!(MAX_COLUMNS >= DEFAULT_FALLBACK_COLUMNS);

    // Window validation
    assert!(PAGE_PADDING >= 0.0);
    assert!(DEFAULT_WINDOW_WIDTH > PAGE_PADDING * 2.0);
    assert!(DEFAULT_WINDOW_HEIGHT > 0.0);
};
