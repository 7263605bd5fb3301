// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a scrollable column (mode toggle, header, gallery) with the
//! lightbox stacked above it while an item is selected.

use super::{Message, ViewMode};
use crate::config::PAGE_PADDING;
use crate::gallery::Header;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::header;
use crate::ui::masonry;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, scrollable, text, Column, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub header: &'a Header,
    pub gallery: &'a masonry::State,
    pub view_mode: ViewMode,
}

/// Renders the page and, on top of it, the lightbox.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(spacing::LG)
        .padding(PAGE_PADDING)
        .width(Length::Fill)
        .push(mode_toggle(ctx.i18n, ctx.view_mode));

    if ctx.view_mode.shows_text() {
        page = page.push(header::view(header::ViewContext {
            i18n: ctx.i18n,
            header: ctx.header,
        }));
    }
    if ctx.view_mode.shows_images() {
        page = page.push(
            masonry::view::view(ctx.gallery, masonry::ViewContext { i18n: ctx.i18n })
                .map(Message::Gallery),
        );
    }

    let base = container(scrollable(page).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);
    if let Some(overlay) =
        masonry::view::lightbox(ctx.gallery, masonry::ViewContext { i18n: ctx.i18n })
    {
        layers = layers.push(overlay.map(Message::Gallery));
    }
    layers.into()
}

fn mode_toggle(i18n: &I18n, current: ViewMode) -> Element<'_, Message> {
    let buttons: Vec<Element<'_, Message>> = ViewMode::ALL
        .into_iter()
        .map(|mode| {
            button(text(i18n.tr(mode.label_key())).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::ViewModeSelected(mode))
                .style(styles::button::toggle(mode == current))
                .into()
        })
        .collect();

    container(Row::with_children(buttons).spacing(spacing::XS))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
