// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::ViewMode;
use crate::ui::masonry;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(masonry::Message),
    ViewModeSelected(ViewMode),
    /// Escape pressed while the lightbox is on screen.
    EscapePressed,
    Tick(Instant), // Animation frame
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional manifest to show instead of the bundled one.
    pub manifest: Option<PathBuf>,
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TRIBUTE_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
