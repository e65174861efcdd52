//! # storefront-core
//!
//! Shared library for the storefront viewer containing the theme schema,
//! the built-in themes, the session configuration model and the projection
//! of a theme onto style variables.
//!
//! It has zero dependencies on display surfaces, file systems, or timers.
//!
//! # Architecture overview (for beginners)
//!
//! The storefront renders a catalog of products in a themeable grid.  An
//! admin panel lets the shop owner switch between themes, create custom ones,
//! choose which product fields are shown, and export the result as a
//! `settings.json` file.
//!
//! This crate (`storefront-core`) is the shared foundation.  It defines:
//!
//! - **`domain`** – The rules: what a theme is, which themes are read-only,
//!   how custom theme ids are derived, how the field list grows, and how a
//!   settings document is parsed and repaired.
//!
//! - **`style`** – How a theme becomes the named style variables
//!   (`--page-bg`, `--gap`, ...) that the rendering surface reads.

pub mod domain;
pub mod style;

// Re-export the most-used types at the crate root so callers can write
// `storefront_core::Theme` instead of `storefront_core::domain::theme::Theme`.
pub use domain::builtin::{derive_custom_id, is_builtin, BUILTIN_THEME_IDS};
pub use domain::config::{Configuration, Contact, ContactKey, SettingsError, DESCRIPTION_FIELD};
pub use domain::theme::{AttrKind, ItemsPerPage, ModalStyle, Theme, ThemeAttr, ThemeError};
pub use style::{style_variables, StyleVar, STYLE_VAR_NAMES};
