// SPDX-License-Identifier: MPL-2.0
//! Hover scale domain type.

use crate::config::{DEFAULT_HOVER_SCALE, MAX_HOVER_SCALE, MIN_HOVER_SCALE};

/// Scale applied to a hovered gallery item.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.5–1.5).
///
/// # Example
///
/// ```
/// use tribute_gallery::ui::state::HoverScale;
///
/// let scale = HoverScale::new(1.05);
/// assert_eq!(scale.value(), 1.05);
///
/// // Values outside range are clamped
/// assert_eq!(HoverScale::new(0.1).value(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverScale(f32);

impl HoverScale {
    /// Creates a new hover scale, clamping to valid range. Non-finite
    /// values fall back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(MIN_HOVER_SCALE, MAX_HOVER_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if hovering shrinks the item.
    #[must_use]
    pub fn shrinks(self) -> bool {
        self.0 < 1.0
    }
}

impl Default for HoverScale {
    fn default() -> Self {
        Self(DEFAULT_HOVER_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(HoverScale::new(0.0).value(), MIN_HOVER_SCALE);
        assert_eq!(HoverScale::new(9.0).value(), MAX_HOVER_SCALE);
        assert_eq!(HoverScale::new(f32::INFINITY), HoverScale::default());
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(HoverScale::default().value(), DEFAULT_HOVER_SCALE);
        assert!(HoverScale::default().shrinks());
        assert!(!HoverScale::new(1.1).shrinks());
    }
}
