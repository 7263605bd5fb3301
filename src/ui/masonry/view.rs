// SPDX-License-Identifier: MPL-2.0
//! Rendering of the masonry surface and the lightbox overlay.

use super::component::{ImageSlot, Message, State};
use super::visual::{Geometry, VisualSample, ENTRANCE_BLUR};
use crate::gallery::PositionedItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, center, container, image, mouse_area, opaque, pin, text, tooltip, Column, Space, Stack,
};
use iced::{mouse, ContentFit, Element, Length, Size};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// The positioned tiles, sized to the laid out content.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    if !state.is_ready() {
        return status_line(ctx.i18n.tr("gallery-loading"));
    }
    if state.grid().is_empty() {
        if state.container_width() > 0.0 {
            return status_line(ctx.i18n.tr("gallery-empty"));
        }
        return Space::new().into();
    }

    let now = state.now();
    let mut surface = Stack::new()
        .width(Length::Fixed(state.container_width()))
        .height(Length::Fixed(state.content_height()));

    for placed in state.grid() {
        let Some(visual) = state.controller().visual(placed.id()) else {
            continue;
        };
        let sample = visual.sample(now);
        let bounds = sample.geometry.scaled(sample.scale);
        let content = tile(state, placed, sample, bounds);
        surface = surface.push(pin(content).x(bounds.x).y(bounds.y));
    }

    container(surface)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn status_line<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(typography::BODY_LG))
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .into()
}

fn tile<'a>(
    state: &'a State,
    placed: &'a PositionedItem,
    sample: VisualSample,
    bounds: Geometry,
) -> Element<'a, Message> {
    let width = (bounds.width - sizing::TILE_GUTTER * 2.0).max(0.0);
    let height = (bounds.height - sizing::TILE_GUTTER * 2.0).max(0.0);
    let opacity = sample.appearance.opacity;

    let picture: Element<'a, Message> = match state.image(placed.id()) {
        Some(ImageSlot::Loaded(data)) => image(data.handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .opacity(opacity)
            .into(),
        _ => container(Space::new())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .style(styles::container::placeholder(opacity))
            .into(),
    };

    let mut layers = Stack::new().push(picture);
    if sample.appearance.blur > 0.0 {
        let strength = sample.appearance.blur / ENTRANCE_BLUR * opacity;
        layers = layers.push(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::blur_veil(strength)),
        );
    }
    if sample.overlay > 0.0 {
        layers = layers.push(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::color_shift(sample.overlay)),
        );
    }

    let framed = container(layers)
        .padding(sizing::TILE_GUTTER)
        .style(styles::container::tile);

    let id = placed.id();
    mouse_area(framed)
        .on_enter(Message::PointerEntered(id.clone()))
        .on_exit(Message::PointerLeft(id.clone()))
        .on_press(Message::Selected(id.clone()))
        .interaction(mouse::Interaction::ZoomIn)
        .into()
}

/// The lightbox overlay, when an item is selected.
pub fn lightbox<'a>(state: &'a State, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !state.lightbox().is_visible() {
        return None;
    }
    let placed = state.selected_item()?;
    let sample = state.lightbox().sample(state.now());

    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop(sample.backdrop)),
    )
    .on_press(Message::CloseRequested)
    .interaction(mouse::Interaction::ZoomOut);

    let natural = match state.image(placed.id()) {
        Some(ImageSlot::Loaded(data)) => Size::new(data.width as f32, data.height as f32),
        _ => Size::new(placed.width, placed.height),
    };
    let displayed = fit_within(natural, state.window(), sample.image_scale);

    let picture: Element<'a, Message> = match state.image(placed.id()) {
        Some(ImageSlot::Loaded(data)) => image(data.handle.clone())
            .width(Length::Fixed(displayed.width))
            .height(Length::Fixed(displayed.height))
            .content_fit(ContentFit::Contain)
            .opacity(sample.image_opacity)
            .into(),
        _ => container(Space::new())
            .width(Length::Fixed(displayed.width))
            .height(Length::Fixed(displayed.height))
            .style(styles::container::placeholder(sample.image_opacity))
            .into(),
    };

    let frame = container(picture)
        .style(styles::overlay::image_frame(placed.is_featured, sample.image_opacity));

    let mut body = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(frame);
    if let Some(alt) = placed.item.alt.as_deref() {
        body = body.push(text(alt).size(typography::CAPTION));
    }

    let label = text(ctx.i18n.tr("lightbox-close")).size(typography::CAPTION);
    let hint = container(label)
        .padding(spacing::XXS)
        .style(styles::overlay::indicator);
    let close = tooltip(
        button(
            container(text("×").size(typography::GLYPH))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(Length::Fixed(sizing::CLOSE_BUTTON))
        .height(Length::Fixed(sizing::CLOSE_BUTTON))
        .padding(0)
        .on_press(Message::CloseRequested)
        .style(styles::button::close),
        hint,
        tooltip::Position::Bottom,
    );

    let card = Stack::new()
        .push(
            container(body)
                .padding(spacing::MD)
                .style(styles::overlay::card(sample.backdrop)),
        )
        .push(
            container(close)
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Top)
                .padding(spacing::MD),
        );

    Some(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(center(opaque(card)))
            .into(),
    )
}

/// Size of an image of `natural` size shown in `window`, never upscaled,
/// then multiplied by the animated `scale`.
fn fit_within(natural: Size, window: Size, scale: f32) -> Size {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return Size::ZERO;
    }
    let max_width = window.width * sizing::LIGHTBOX_FRACTION;
    let max_height = window.height * sizing::LIGHTBOX_FRACTION;
    let fit = (max_width / natural.width)
        .min(max_height / natural.height)
        .clamp(0.0, 1.0);
    Size::new(natural.width * fit * scale, natural.height * fit * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn small_images_are_not_upscaled() {
        let size = fit_within(Size::new(400.0, 300.0), Size::new(1920.0, 1080.0), 1.0);
        assert_eq!(size, Size::new(400.0, 300.0));
    }

    #[test]
    fn large_images_fit_the_window() {
        let size = fit_within(Size::new(4000.0, 2000.0), Size::new(1000.0, 1000.0), 1.0);
        assert_abs_diff_eq!(size.width, 800.0, epsilon = 1e-3);
        assert_abs_diff_eq!(size.height, 400.0, epsilon = 1e-3);
    }

    #[test]
    fn scale_applies_after_fitting() {
        let size = fit_within(Size::new(400.0, 300.0), Size::new(1920.0, 1080.0), 0.8);
        assert_abs_diff_eq!(size.width, 320.0, epsilon = 1e-3);
        assert_eq!(
            fit_within(Size::ZERO, Size::new(10.0, 10.0), 1.0),
            Size::ZERO
        );
    }
}
