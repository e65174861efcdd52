//! Display surfaces for the admin controller.
//!
//! A browser host implements [`AdminSurface`](crate::application::admin::AdminSurface)
//! on top of its page.  This crate ships the in-memory surface used by the
//! headless CLI and by the tests.

pub mod memory;
