// SPDX-License-Identifier: MPL-2.0
//! Greeting header shown above the gallery.

use crate::gallery::Header;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{container, row, text, Column};
use iced::{Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub header: &'a Header,
}

/// Title, subtitle, message and the participants signing the greeting.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = ctx.header;
    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .max_width(900.0);

    if !header.title.is_empty() {
        content = content.push(
            text(header.title.as_str())
                .size(typography::DISPLAY)
                .color(palette::WHITE),
        );
    }
    if !header.subtitle.is_empty() {
        content = content.push(
            text(header.subtitle.as_str())
                .size(typography::TITLE_MD)
                .color(palette::GRAY_200)
                .align_x(Horizontal::Center),
        );
    }
    if !header.message.is_empty() {
        content = content.push(
            row![
                text(header.message.as_str())
                    .size(typography::BODY_LG)
                    .color(palette::WHITE),
                text("♥")
                    .size(typography::TITLE_MD)
                    .color(palette::HEART_RED),
            ]
            .spacing(spacing::XS),
        );
    }
    if let Some(signature) = signature(ctx.i18n, &header.participants) {
        content = content.push(
            text(signature)
                .size(typography::BODY)
                .color(palette::GRAY_200),
        );
    }

    container(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

/// "From: A, B, C", or nothing when nobody signed.
fn signature(i18n: &I18n, participants: &[String]) -> Option<String> {
    if participants.is_empty() {
        return None;
    }
    let names = participants.join(", ");
    Some(i18n.tr_with_args("header-signed-by", &[("names", names.as_str())]))
}
