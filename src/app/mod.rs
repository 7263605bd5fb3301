// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the manifest, localization and the
//! masonry gallery, and translates gallery effects into background image
//! loading tasks.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::ViewMode;

use crate::config;
use crate::gallery::{Header, Manifest, ResponsiveColumns};
use crate::i18n::fluent::I18n;
use crate::ui::masonry;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    header: Header,
    gallery: masonry::State,
    view_mode: ViewMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("view_mode", &self.view_mode)
            .field("items", &self.gallery.grid().len())
            .field("ready", &self.gallery.is_ready())
            .finish()
    }
}

pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed on the
    // first call and defaults are used should it ever run again.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and the manifest, then starts preloading images.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "using default settings");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        let manifest = load_manifest(flags.manifest.as_deref());
        tracing::info!(
            items = manifest.items.len(),
            locale = %i18n.current_locale(),
            "starting gallery"
        );

        let mut gallery = masonry::State::new(
            ResponsiveColumns::new(config.column_resolver()),
            config.animation_options(),
            config::PAGE_PADDING * 2.0,
        );
        let effect = gallery.set_items(manifest.items);

        let app = App {
            i18n,
            header: manifest.header,
            gallery,
            view_mode: ViewMode::default(),
        };
        (app, update::run_effect(effect))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.header.title.is_empty() {
            app_name
        } else {
            format!("{} - {app_name}", self.header.title)
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            view_mode: &mut self.view_mode,
        };
        update::update(&mut ctx, message, Instant::now())
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            header: &self.header,
            gallery: &self.gallery,
            view_mode: self.view_mode,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_escape_subscription(self.gallery.lightbox().is_visible()),
            subscription::create_tick_subscription(self.gallery.is_animating()),
        ])
    }
}

/// Loads the manifest given on the command line, falling back to the
/// bundled one.
fn load_manifest(path: Option<&std::path::Path>) -> Manifest {
    if let Some(path) = path {
        match Manifest::load(path) {
            Ok(manifest) => return manifest,
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "failed to load manifest");
            }
        }
    }
    Manifest::builtin().unwrap_or_else(|err| {
        tracing::error!(%err, "bundled manifest is invalid");
        Manifest::default()
    })
}
