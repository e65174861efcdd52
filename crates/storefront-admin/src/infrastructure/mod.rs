//! Infrastructure layer for the storefront admin.
//!
//! Contains the adapters the application layer talks to through traits:
//! display surfaces, host hooks, the directory picker, and file-system
//! storage for settings and host configuration.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `storefront_core`, but MUST NOT be imported by the `application` or
//! domain layers.

pub mod host;
pub mod picker;
pub mod storage;
pub mod surface;
