//! Application layer use cases for the storefront admin panel.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules in `storefront-core`) and the infrastructure
//! (display surfaces, files, timers).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "switch to
//!   the Noir theme and refresh everything that shows the active theme").
//! - **Depend on abstractions** (traits) rather than concrete implementations,
//!   so a browser page, a native window or a test fake can be plugged in.
//! - **Contain no file system access and no rendering code**.
//!
//! # Sub-modules
//!
//! - **`admin`**        – The `AdminController`: every admin gesture, from
//!   typing into the theme editor to exporting `settings.json`.
//!
//! - **`theme_engine`** – Applies a theme to a style surface, builds the
//!   theme grid, and binds the theme editor controls.
//!
//! - **`controls`**     – Names for the panel's controls, labels and tabs.
//!
//! - **`folder`**       – Directory picker abstraction and drop handling.
//!
//! - **`toast`**        – Transient status messages with a hide timer.

pub mod admin;
pub mod controls;
pub mod folder;
pub mod theme_engine;
pub mod toast;
