// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! UI chrome strings (view toggle, lightbox controls, loading text) come
//! from Fluent bundles embedded at build time. The greeting itself comes
//! from the gallery manifest and is not translated.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Language-only fallback (`es-AR` resolves to `es`)
//! - Fallback to `en-US` when nothing matches

pub mod fluent;
