//! Storage infrastructure: settings and host configuration persistence.
//!
//! Two files are involved:
//!
//! - **`settings`** – The storefront's `settings.json`: themes, fields,
//!   contact details.  This is the document the admin panel exports.
//! - **`host_config`** – The host's own `storefront.toml`: where the
//!   settings live, how long toasts stay up, what to log.
//!
//! Both loaders treat a missing file as "first run" and fall back to
//! defaults instead of failing.

pub mod host_config;
pub mod settings;
