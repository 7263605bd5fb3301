// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{Message, ViewMode};
use crate::media::{self, PreloadRequest};
use crate::ui::masonry::{self, Effect};
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut masonry::State,
    pub view_mode: &'a mut ViewMode,
}

/// Dispatches a top-level message.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message, now: Instant) -> Task<Message> {
    match message {
        Message::Gallery(msg) => {
            let effect = ctx.gallery.handle(msg, now);
            run_effect(effect)
        }
        Message::ViewModeSelected(mode) => {
            *ctx.view_mode = mode;
            Task::none()
        }
        Message::EscapePressed => {
            let effect = ctx.gallery.handle(masonry::Message::CloseRequested, now);
            run_effect(effect)
        }
        Message::Tick(instant) => {
            let effect = ctx.gallery.handle(masonry::Message::Tick(instant), now);
            run_effect(effect)
        }
    }
}

/// Turns a gallery effect into the tasks that carry it out.
pub fn run_effect(effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Preload(requests) => {
            tracing::debug!(count = requests.len(), "preloading gallery images");
            Task::batch(requests.into_iter().map(preload_task))
        }
    }
}

fn preload_task(request: PreloadRequest) -> Task<Message> {
    let PreloadRequest {
        generation,
        id,
        path,
    } = request;
    Task::perform(media::load_in_background(path), move |result| {
        Message::Gallery(masonry::Message::ImageSettled {
            generation,
            id: id.clone(),
            result,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gallery::{GalleryItem, ItemId, ResponsiveColumns};
    use crate::ui::masonry::{AnimationOptions, LightboxPhase};

    #[test]
    fn view_mode_selection_is_stored() {
        let mut gallery = masonry::State::new(
            ResponsiveColumns::default(),
            AnimationOptions::default(),
            0.0,
        );
        let mut view_mode = ViewMode::All;
        let mut ctx = UpdateContext {
            gallery: &mut gallery,
            view_mode: &mut view_mode,
        };

        let _ = update(
            &mut ctx,
            Message::ViewModeSelected(ViewMode::TextOnly),
            Instant::now(),
        );
        assert_eq!(view_mode, ViewMode::TextOnly);
    }

    #[test]
    fn escape_starts_closing_the_lightbox() {
        let mut gallery = masonry::State::new(
            ResponsiveColumns::default(),
            AnimationOptions::default(),
            0.0,
        );
        let mut view_mode = ViewMode::All;
        let start = Instant::now();

        let Effect::Preload(requests) =
            gallery.set_items(vec![GalleryItem::new("1", "missing.jpg", 300.0)])
        else {
            panic!("expected preload requests");
        };
        let _ = gallery.handle(
            masonry::Message::ViewportChanged(iced::Size::new(800.0, 600.0)),
            start,
        );
        let _ = gallery.handle(
            masonry::Message::ImageSettled {
                generation: requests[0].generation,
                id: requests[0].id.clone(),
                result: Err(Error::Io("missing".into())),
            },
            start,
        );
        let _ = gallery.handle(masonry::Message::Selected(ItemId::from("1")), start);
        assert_eq!(gallery.lightbox().phase(), LightboxPhase::Opening);

        let mut ctx = UpdateContext {
            gallery: &mut gallery,
            view_mode: &mut view_mode,
        };
        let _ = update(&mut ctx, Message::EscapePressed, start);
        assert_eq!(gallery.lightbox().phase(), LightboxPhase::Closing);
    }
}
