// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from an
//! optional `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[animation]` - Relayout easing and duration, entrance stagger and origin
//! - `[hover]` - Hover scale and color shift
//! - `[layout]` - Column breakpoints and fallback
//!
//! Every key is optional; missing keys take the values in [`defaults`].
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `TRIBUTE_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use tribute_gallery::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.hover.color_shift_on_hover = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::gallery::{Breakpoint, ColumnResolver};
use crate::ui::animation::Easing;
use crate::ui::masonry::AnimationOptions;
use crate::ui::state::{HoverScale, Stagger, UpdateDuration};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Gallery animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Easing name of relayout tweens (e.g., "power3.out").
    #[serde(default = "default_ease", skip_serializing_if = "Option::is_none")]
    pub ease: Option<String>,

    /// Relayout tween duration in seconds.
    #[serde(default = "default_duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<f32>,

    /// Entrance delay per item in seconds.
    #[serde(default = "default_stagger", skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f32>,

    /// Entrance origin: top, bottom, left, right, center or random.
    #[serde(
        default = "default_animate_from",
        skip_serializing_if = "Option::is_none"
    )]
    pub animate_from: Option<String>,

    /// Whether items start blurred and come into focus.
    #[serde(
        default = "default_blur_to_focus",
        skip_serializing_if = "Option::is_none"
    )]
    pub blur_to_focus: Option<bool>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            ease: default_ease(),
            duration: default_duration(),
            stagger: default_stagger(),
            animate_from: default_animate_from(),
            blur_to_focus: default_blur_to_focus(),
        }
    }
}

/// Pointer hover settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoverConfig {
    #[serde(
        default = "default_scale_on_hover",
        skip_serializing_if = "Option::is_none"
    )]
    pub scale_on_hover: Option<bool>,

    #[serde(
        default = "default_hover_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_scale: Option<f32>,

    #[serde(
        default = "default_color_shift_on_hover",
        skip_serializing_if = "Option::is_none"
    )]
    pub color_shift_on_hover: Option<bool>,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            scale_on_hover: default_scale_on_hover(),
            hover_scale: default_hover_scale(),
            color_shift_on_hover: default_color_shift_on_hover(),
        }
    }
}

/// Responsive column settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Viewport breakpoints; order does not matter.
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<Breakpoint>,

    /// Column count below the narrowest breakpoint.
    #[serde(
        default = "default_fallback_columns",
        skip_serializing_if = "Option::is_none"
    )]
    pub fallback_columns: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoints: default_breakpoints(),
            fallback_columns: default_fallback_columns(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub hover: HoverConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Config {
    /// Choreography options with every value validated and clamped.
    #[must_use]
    pub fn animation_options(&self) -> AnimationOptions {
        let animation = &self.animation;
        let hover = &self.hover;
        AnimationOptions {
            easing: Easing::parse_or_default(animation.ease.as_deref().unwrap_or(DEFAULT_EASE)),
            duration: UpdateDuration::new(
                animation.duration.unwrap_or(DEFAULT_UPDATE_DURATION_SECS),
            )
            .as_duration(),
            stagger: Stagger::new(animation.stagger.unwrap_or(DEFAULT_STAGGER_SECS)).as_duration(),
            direction: animation
                .animate_from
                .as_deref()
                .unwrap_or(DEFAULT_ANIMATE_FROM)
                .parse()
                .unwrap_or_default(),
            blur_to_focus: animation.blur_to_focus.unwrap_or(DEFAULT_BLUR_TO_FOCUS),
            scale_on_hover: hover.scale_on_hover.unwrap_or(DEFAULT_SCALE_ON_HOVER),
            hover_scale: HoverScale::new(hover.hover_scale.unwrap_or(DEFAULT_HOVER_SCALE)).value(),
            color_shift_on_hover: hover
                .color_shift_on_hover
                .unwrap_or(DEFAULT_COLOR_SHIFT_ON_HOVER),
        }
    }

    /// Column resolver built from `[layout]`; column counts above
    /// [`MAX_COLUMNS`] are capped.
    #[must_use]
    pub fn column_resolver(&self) -> ColumnResolver {
        let breakpoints = self
            .layout
            .breakpoints
            .iter()
            .map(|bp| Breakpoint::new(bp.min_width, bp.columns.min(MAX_COLUMNS)))
            .collect();
        let fallback = self
            .layout
            .fallback_columns
            .unwrap_or(DEFAULT_FALLBACK_COLUMNS)
            .min(MAX_COLUMNS);
        ColumnResolver::new(breakpoints, fallback)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_ease() -> Option<String> {
    Some(DEFAULT_EASE.to_string())
}

fn default_duration() -> Option<f32> {
    Some(DEFAULT_UPDATE_DURATION_SECS)
}

fn default_stagger() -> Option<f32> {
    Some(DEFAULT_STAGGER_SECS)
}

fn default_animate_from() -> Option<String> {
    Some(DEFAULT_ANIMATE_FROM.to_string())
}

fn default_blur_to_focus() -> Option<bool> {
    Some(DEFAULT_BLUR_TO_FOCUS)
}

fn default_scale_on_hover() -> Option<bool> {
    Some(DEFAULT_SCALE_ON_HOVER)
}

fn default_hover_scale() -> Option<f32> {
    Some(DEFAULT_HOVER_SCALE)
}

fn default_color_shift_on_hover() -> Option<bool> {
    Some(DEFAULT_COLOR_SHIFT_ON_HOVER)
}

fn default_breakpoints() -> Vec<Breakpoint> {
    crate::gallery::columns::DEFAULT_BREAKPOINTS.to_vec()
}

fn default_fallback_columns() -> Option<usize> {
    Some(DEFAULT_FALLBACK_COLUMNS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::animation::Ramp;
    use crate::ui::masonry::EntranceDirection;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("es".to_string()),
            },
            animation: AnimationConfig {
                ease: Some("power2.inOut".to_string()),
                duration: Some(1.2),
                stagger: Some(0.1),
                animate_from: Some("random".to_string()),
                blur_to_focus: Some(false),
            },
            hover: HoverConfig {
                scale_on_hover: Some(false),
                hover_scale: Some(1.05),
                color_shift_on_hover: Some(true),
            },
            layout: LayoutConfig {
                breakpoints: vec![Breakpoint::new(900.0, 3)],
                fallback_columns: Some(2),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_keys_take_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[hover]\ncolor_shift_on_hover = true\n")
            .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.hover.color_shift_on_hover, Some(true));
        assert_eq!(config.hover.hover_scale, Some(DEFAULT_HOVER_SCALE));
        assert_eq!(config.animation, AnimationConfig::default());
        assert_eq!(config.layout.breakpoints.len(), 4);
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_invalid_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[animation\n").expect("write config");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save config");
        let (loaded, _) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
    }

    #[test]
    fn default_animation_options_match_documented_defaults() {
        let options = Config::default().animation_options();
        assert_eq!(options, AnimationOptions::default());
        assert_eq!(options.easing, Easing::POWER3_OUT);
        assert_eq!(options.direction, EntranceDirection::Bottom);
    }

    #[test]
    fn animation_options_clamp_and_parse() {
        let mut config = Config::default();
        config.animation.ease = Some("power1.in".to_string());
        config.animation.duration = Some(-3.0);
        config.animation.stagger = Some(10.0);
        config.animation.animate_from = Some("sideways".to_string());
        config.hover.hover_scale = Some(4.0);

        let options = config.animation_options();
        assert_eq!(options.easing, Easing::Power(1, Ramp::In));
        assert_eq!(options.duration, Duration::ZERO);
        assert_eq!(options.stagger, Duration::from_secs(1));
        assert_eq!(options.direction, EntranceDirection::Offset);
        assert_eq!(options.hover_scale, MAX_HOVER_SCALE);
    }

    #[test]
    fn unknown_ease_falls_back() {
        let mut config = Config::default();
        config.animation.ease = Some("wobble".to_string());
        assert_eq!(config.animation_options().easing, Easing::POWER3_OUT);
    }

    #[test]
    fn column_resolver_caps_and_sorts_breakpoints() {
        let mut config = Config::default();
        config.layout.breakpoints = vec![Breakpoint::new(300.0, 2), Breakpoint::new(2000.0, 40)];
        config.layout.fallback_columns = Some(0);

        let resolver = config.column_resolver();
        assert_eq!(resolver.resolve(2500.0), MAX_COLUMNS);
        assert_eq!(resolver.resolve(500.0), 2);
        assert_eq!(resolver.resolve(100.0), 1);
    }
}
