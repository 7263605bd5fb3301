// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::tempdir;
use tribute_gallery::config::{self, Config};
use tribute_gallery::gallery::{layout, ItemId, Manifest, ResponsiveColumns};
use tribute_gallery::i18n::fluent::I18n;
use tribute_gallery::media;
use tribute_gallery::ui::masonry::visual::ItemPhase;
use tribute_gallery::ui::masonry::{self, Effect, ImageSlot, Lifecycle, LightboxPhase};

fn write_png(path: &Path, width: u32, height: u32) {
    let image = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([200, 40, 90, 255]));
    image.save(path).expect("failed to write png");
}

fn write_manifest(dir: &Path) -> Manifest {
    write_png(&dir.join("one.png"), 4, 3);
    write_png(&dir.join("two.png"), 3, 4);
    let path = dir.join("gallery.toml");
    fs::write(
        &path,
        r#"
[header]
title = "Thanks!"
participants = ["Kelly", "Ceci"]

[[items]]
id = "1"
img = "one.png"
height = 400

[[items]]
id = "2"
img = "two.png"
height = 250
main = true

[[items]]
id = "3"
img = "missing.png"
height = 300
"#,
    )
    .expect("failed to write manifest");
    Manifest::load(&path).expect("manifest loads")
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("view-all"), "Show all");

    let mut updated = loaded;
    updated.general.language = Some("es".to_string());
    config::save_to_path(&updated, &config_path).expect("Failed to write updated config file");
    let reloaded = config::load_from_path(&config_path).expect("Failed to load updated config");
    let i18n = I18n::new(None, &reloaded);
    assert_eq!(i18n.current_locale().to_string(), "es");
    assert_ne!(i18n.tr("view-all"), "Show all");
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("es".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn manifest_feeds_the_layout_engine() {
    let dir = tempdir().expect("failed to create temp dir");
    let manifest = write_manifest(dir.path());

    let grid = layout(&manifest.items, 900.0, 3);
    let ids: Vec<&str> = grid.iter().map(|placed| placed.id().as_str()).collect();
    assert_eq!(ids, vec!["2", "1", "3"]);
    assert!(grid[0].is_featured);
    assert_eq!(grid[0].width, 900.0);
    // Every column carries the featured height, so the next item starts below it.
    assert_eq!(grid[1].y, grid[0].height);
}

#[test]
fn settings_file_shapes_gallery_behavior() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[animation]
ease = "sine.inOut"
animate_from = "left"

[hover]
color_shift_on_hover = true

[[layout.breakpoints]]
min_width = 800.0
columns = 2
"#,
    )
    .expect("failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let options = config.animation_options();
    assert_eq!(options.direction, masonry::EntranceDirection::Left);
    assert!(options.color_shift_on_hover);

    let mut columns = ResponsiveColumns::new(config.column_resolver());
    assert_eq!(columns.update(1920.0), Some(2));
    assert_eq!(columns.update(500.0), Some(1));
}

#[tokio::test]
async fn gallery_enters_after_every_image_settles() {
    let dir = tempdir().expect("failed to create temp dir");
    let manifest = write_manifest(dir.path());
    let start = Instant::now();

    let mut gallery = masonry::State::new(
        ResponsiveColumns::default(),
        Config::default().animation_options(),
        0.0,
    );
    let Effect::Preload(requests) = gallery.set_items(manifest.items) else {
        panic!("expected preload requests");
    };
    assert_eq!(requests.len(), 3);
    gallery.handle(
        masonry::Message::ViewportChanged(Size::new(1200.0, 800.0)),
        start,
    );

    for request in requests {
        assert!(!gallery.is_ready());
        let result = media::load_in_background(request.path.clone()).await;
        gallery.handle(
            masonry::Message::ImageSettled {
                generation: request.generation,
                id: request.id,
                result,
            },
            start,
        );
    }

    assert!(gallery.is_ready());
    assert_eq!(gallery.controller().lifecycle(), Lifecycle::Mounted);
    assert_eq!(gallery.failed_images(), 1);
    match gallery.image(&ItemId::from("1")) {
        Some(ImageSlot::Loaded(data)) => assert_eq!((data.width, data.height), (4, 3)),
        other => panic!("expected a decoded image, got {:?}", other),
    }
    assert!(gallery.is_animating());

    let later = start + Duration::from_secs(3);
    gallery.handle(masonry::Message::Tick(later), later);
    assert!(!gallery.is_animating());
    for placed in gallery.grid() {
        assert_eq!(
            gallery.controller().phase(placed.id()),
            Some(ItemPhase::Idle)
        );
    }
}

#[test]
fn lightbox_opens_and_closes_over_the_gallery() {
    let start = Instant::now();
    let mut gallery = masonry::State::new(
        ResponsiveColumns::default(),
        Config::default().animation_options(),
        0.0,
    );
    let items = Manifest::builtin().expect("builtin manifest").items;
    let Effect::Preload(requests) = gallery.set_items(items) else {
        panic!("expected preload requests");
    };
    gallery.handle(
        masonry::Message::ViewportChanged(Size::new(1000.0, 700.0)),
        start,
    );
    for request in requests {
        gallery.handle(
            masonry::Message::ImageSettled {
                generation: request.generation,
                id: request.id,
                result: Err(tribute_gallery::error::Error::Io("offline".into())),
            },
            start,
        );
    }
    assert_eq!(gallery.columns(), 4);

    let featured = gallery.grid()[0].id().clone();
    gallery.handle(masonry::Message::Selected(featured.clone()), start);
    let opened = start + Duration::from_secs(1);
    gallery.handle(masonry::Message::Tick(opened), opened);
    assert_eq!(gallery.lightbox().phase(), LightboxPhase::Open);
    assert_eq!(gallery.lightbox().selected(), Some(&featured));

    gallery.handle(masonry::Message::CloseRequested, opened);
    assert_eq!(gallery.lightbox().phase(), LightboxPhase::Closing);
    assert_eq!(gallery.lightbox().selected(), Some(&featured));

    let closed = opened + Duration::from_secs(1);
    gallery.handle(masonry::Message::Tick(closed), closed);
    assert_eq!(gallery.lightbox().phase(), LightboxPhase::Closed);
    assert!(gallery.lightbox().selected().is_none());
}
