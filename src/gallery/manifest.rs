// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest: the greeting text and the static list of photos.
//!
//! A manifest is a TOML document with an optional `[header]` table and an
//! `[[items]]` array:
//!
//! ```toml
//! [header]
//! title = "Thank you!"
//! participants = ["Kelly", "Ceci"]
//!
//! [[items]]
//! id = "1"
//! img = "images/image-1.jpg"
//! height = 400
//!
//! [[items]]
//! id = "8"
//! img = "images/image-8.jpg"
//! height = 400
//! main = true
//! ```

use super::item::GalleryItem;
use crate::app::paths;
use crate::error::{Error, ManifestError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Manifest bundled with the application.
const BUILTIN_MANIFEST: &str = include_str!("../../assets/gallery.toml");

/// Greeting text rendered above the gallery.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Parsed and validated manifest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub header: Header,
    #[serde(default)]
    pub items: Vec<GalleryItem>,
}

impl Manifest {
    /// Parses a manifest and resolves relative image paths against `base_dir`.
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self> {
        let mut manifest: Manifest = toml::from_str(content)
            .map_err(|e| Error::Manifest(ManifestError::Parse(e.to_string())))?;
        manifest.validate()?;
        for item in &mut manifest.items {
            if item.image.is_relative() {
                item.image = base_dir.join(&item.image);
            }
        }
        Ok(manifest)
    }

    /// Loads a manifest file; relative image paths resolve against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::parse(&content, &base_dir)
    }

    /// The bundled tribute manifest.
    ///
    /// No photos ship with the binary: its `images/...` paths resolve under
    /// the config directory, and missing files render as placeholders.
    pub fn builtin() -> Result<Self> {
        let assets_dir = paths::get_app_config_dir().unwrap_or_default();
        tracing::debug!(dir = %assets_dir.display(), "resolving bundled photos");
        Self::builtin_in(&assets_dir)
    }

    /// The bundled manifest with its photos resolved against `assets_dir`.
    pub fn builtin_in(assets_dir: &Path) -> Result<Self> {
        Self::parse(BUILTIN_MANIFEST, assets_dir)
    }

    fn validate(&self) -> std::result::Result<(), ManifestError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if item.id.as_str().trim().is_empty() {
                return Err(ManifestError::EmptyId);
            }
            if item.image.as_os_str().is_empty() {
                return Err(ManifestError::MissingImage(item.id.to_string()));
            }
            if !seen.insert(item.id.clone()) {
                return Err(ManifestError::DuplicateId(item.id.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn parse_resolves_relative_paths() {
        let content = r#"
[[items]]
id = "1"
img = "images/a.jpg"
height = 300

[[items]]
id = "2"
img = "/abs/b.jpg"
"#;
        let manifest = Manifest::parse(content, Path::new("/gallery")).expect("valid manifest");
        assert_eq!(
            manifest.items[0].image,
            PathBuf::from("/gallery/images/a.jpg")
        );
        assert_eq!(manifest.items[1].image, PathBuf::from("/abs/b.jpg"));
        assert_eq!(manifest.items[1].height, 0.0);
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let content = r#"
[[items]]
id = "1"
img = "a.jpg"

[[items]]
id = "1"
img = "b.jpg"
"#;
        match Manifest::parse(content, Path::new(".")) {
            Err(Error::Manifest(ManifestError::DuplicateId(id))) => assert_eq!(id, "1"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_empty_id() {
        let content = "[[items]]\nid = \" \"\nimg = \"a.jpg\"\n";
        assert!(matches!(
            Manifest::parse(content, Path::new(".")),
            Err(Error::Manifest(ManifestError::EmptyId))
        ));
    }

    #[test]
    fn parse_accepts_featured_aliases() {
        let content = r#"
[[items]]
id = "1"
image = "a.jpg"
featured = true
link = "https://example.com"
"#;
        let manifest = Manifest::parse(content, Path::new(".")).expect("valid manifest");
        assert!(manifest.items[0].featured);
        assert_eq!(
            manifest.items[0].link.as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        assert!(matches!(
            Manifest::parse("items = = 3", Path::new(".")),
            Err(Error::Manifest(ManifestError::Parse(_)))
        ));
    }

    #[test]
    fn load_resolves_against_manifest_directory() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("gallery.toml");
        fs::write(
            &path,
            "[header]\ntitle = \"Hi\"\n\n[[items]]\nid = \"1\"\nimg = \"one.jpg\"\n",
        )
        .expect("write manifest");

        let manifest = Manifest::load(&path).expect("load manifest");
        assert_eq!(manifest.header.title, "Hi");
        assert_eq!(manifest.items[0].image, dir.path().join("one.jpg"));
    }

    #[test]
    fn builtin_manifest_has_one_featured_item() {
        let manifest = Manifest::builtin().expect("builtin manifest parses");
        assert_eq!(manifest.items.len(), 30);
        assert_eq!(
            manifest.items.iter().filter(|item| item.featured).count(),
            1
        );
        assert!(!manifest.header.participants.is_empty());
    }

    #[test]
    fn builtin_photos_resolve_under_the_assets_dir() {
        let dir = tempdir().expect("failed to create temp dir");
        let manifest = Manifest::builtin_in(dir.path()).expect("builtin manifest parses");

        let images = dir.path().join("images");
        for item in &manifest.items {
            assert!(item.image.starts_with(&images), "{}", item.image.display());
        }
    }
}
