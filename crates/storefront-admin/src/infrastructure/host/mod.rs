//! Host adapters implementing [`HostHooks`](crate::application::admin::HostHooks).
//!
//! - **`file`**      – Saves exports to disk and reloads them on discard; used
//!   by the headless CLI.
//! - **`recording`** – Remembers every notification; used by tests and by
//!   embedders that poll instead of reacting.

pub mod file;
pub mod recording;
