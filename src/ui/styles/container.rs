// SPDX-License-Identifier: MPL-2.0
//! Container styles for the page and the gallery tiles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

/// Page background behind the header and the gallery.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Rounded tile frame holding a photo.
pub fn tile(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::TILE,
        ..Default::default()
    }
}

/// Neutral tile drawn in place of an image that failed to load.
pub fn placeholder(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::NAVY_700
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Veil standing in for the entrance blur; `strength` goes from 0 to 1.
pub fn blur_veil(strength: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: strength.clamp(0.0, 1.0) * opacity::BLUR_VEIL_MAX,
            ..palette::NAVY_900
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Diagonal magenta-to-blue hover tint, scaled by `alpha`.
pub fn color_shift(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let stop = opacity::SHIFT_STOP * alpha.clamp(0.0, 1.0);
        let gradient = Linear::new(Degrees(45.0))
            .add_stop(
                0.0,
                Color {
                    a: stop,
                    ..palette::SHIFT_MAGENTA
                },
            )
            .add_stop(
                1.0,
                Color {
                    a: stop,
                    ..palette::SHIFT_BLUE
                },
            );
        container::Style {
            background: Some(Background::Gradient(Gradient::Linear(gradient))),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
