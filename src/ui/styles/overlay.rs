// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window backdrop; `strength` is the animated backdrop opacity.
pub fn backdrop(strength: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * strength.clamp(0.0, 1.0),
            ..palette::NAVY_900
        })),
        ..Default::default()
    }
}

/// Card around the enlarged photo.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CARD * alpha.clamp(0.0, 1.0),
            ..palette::NAVY_800
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::CARD.into(),
            ..Default::default()
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Frame of the enlarged photo; the featured photo gets the accent ring.
pub fn image_frame(featured: bool, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = alpha.clamp(0.0, 1.0);
        let ring = if featured {
            Border {
                color: Color {
                    a: alpha,
                    ..palette::ACCENT_CYAN
                },
                width: border::WIDTH_ACCENT,
                radius: radius::IMAGE.into(),
            }
        } else {
            Border {
                radius: radius::IMAGE.into(),
                ..Default::default()
            }
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::GRAY_900
            })),
            border: ring,
            ..Default::default()
        }
    }
}

/// Tooltip bubble shown over the lightbox.
pub fn indicator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
