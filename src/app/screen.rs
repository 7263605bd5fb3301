// SPDX-License-Identifier: MPL-2.0
//! Which sections of the page are shown.

/// Page sections the user can toggle between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    All,
    TextOnly,
    ImagesOnly,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::All, ViewMode::TextOnly, ViewMode::ImagesOnly];

    /// Fluent key of the toggle label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ViewMode::All => "view-all",
            ViewMode::TextOnly => "view-text",
            ViewMode::ImagesOnly => "view-images",
        }
    }

    #[must_use]
    pub fn shows_text(self) -> bool {
        matches!(self, ViewMode::All | ViewMode::TextOnly)
    }

    #[must_use]
    pub fn shows_images(self) -> bool {
        matches!(self, ViewMode::All | ViewMode::ImagesOnly)
    }
}
