//! Domain entities for the storefront viewer.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What lives here? (for beginners)
//!
//! The domain layer holds the rules that make the admin panel what it is,
//! independent of how it is displayed:
//!
//! - A theme has a fixed schema and every attribute has a default.
//! - Built-in themes can be copied but never edited or deleted.
//! - The active theme always exists.
//! - The list of product fields only ever grows.
//!
//! Nothing in here touches a display surface, a file, or a timer, so every
//! rule can be unit-tested on any platform without setup.  The admin crate
//! depends on this module; this module never depends on the admin crate.

/// Reserved themes and custom theme id derivation.
pub mod builtin;

/// The session configuration and its invariants.
///
/// See [`config::Configuration`] for the main type.
pub mod config;

/// The theme record and its attribute schema.
pub mod theme;
