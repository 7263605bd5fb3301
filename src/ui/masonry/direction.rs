// SPDX-License-Identifier: MPL-2.0
//! Where items come from when the gallery first appears.

use crate::gallery::PositionedItem;
use iced::Size;
use rand::Rng;
use std::str::FromStr;

/// Distance kept between the viewport edge and an off-screen start position.
const OFFSCREEN_MARGIN: f32 = 200.0;

/// Vertical offset of the fallback entrance, relative to the final box.
const OFFSET_DISTANCE: f32 = 100.0;

/// Origin of the entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntranceDirection {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
    Center,
    /// One of top, bottom, left or right, drawn per item.
    Random,
    /// Slightly below the final box. Used for unrecognised names.
    Offset,
}

impl FromStr for EntranceDirection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            "center" => Self::Center,
            "random" => Self::Random,
            _ => Self::Offset,
        })
    }
}

impl EntranceDirection {
    /// Resolves [`EntranceDirection::Random`] to a concrete edge.
    pub fn resolve(self, rng: &mut impl Rng) -> Self {
        match self {
            Self::Random => match rng.gen_range(0..4) {
                0 => Self::Top,
                1 => Self::Bottom,
                2 => Self::Left,
                _ => Self::Right,
            },
            other => other,
        }
    }

    /// Starting top-left corner for `item`.
    ///
    /// `window` is the viewport and `container` the gallery surface.
    #[must_use]
    pub fn start_position(
        self,
        item: &PositionedItem,
        window: Size,
        container: Size,
    ) -> (f32, f32) {
        match self {
            Self::Top => (item.x, -OFFSCREEN_MARGIN),
            Self::Bottom => (item.x, window.height + OFFSCREEN_MARGIN),
            Self::Left => (-OFFSCREEN_MARGIN, item.y),
            Self::Right => (window.width + OFFSCREEN_MARGIN, item.y),
            Self::Center => (
                container.width / 2.0 - item.width / 2.0,
                container.height / 2.0 - item.height / 2.0,
            ),
            // Random is resolved by the caller; treat a stray one as offset.
            Self::Random | Self::Offset => (item.x, item.y + OFFSET_DISTANCE),
        }
    }
}
