// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round close button on the lightbox.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_HOVER,
        _ => opacity::OVERLAY_CONTROL,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// View mode toggle; the active mode is drawn filled.
pub fn toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match (active, status) {
            (true, _) => (WHITE, palette::NAVY_900),
            (false, button::Status::Hovered) => (
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                },
                WHITE,
            ),
            (false, _) => (Color::TRANSPARENT, palette::GRAY_200),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..WHITE
                },
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
