//! Product folder selection.
//!
//! The admin panel can load a product folder in two ways: through an
//! asynchronous directory picker, or by dropping an item onto the drop zone.
//! Both paths end in the same place: a [`DirectoryHandle`] handed to the
//! host's `on_folder_load` hook.  Scanning the folder is the host's job.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// A directory the user granted access to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryHandle {
    /// Display name (the last path component).
    pub name: String,
    pub path: PathBuf,
}

impl DirectoryHandle {
    /// Builds a handle whose name is the last component of `path`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }
}

/// Something dropped onto the folder drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DroppedItem {
    Directory(DirectoryHandle),
    File { name: String },
    /// Text, links, or anything the surface could not classify.
    Other,
}

/// Why a directory pick produced no directory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
    #[error("directory selection cancelled")]
    Cancelled,

    #[error("access to {0} denied")]
    Denied(String),

    #[error("directory picking is not supported on this surface")]
    Unsupported,
}

/// An asynchronous directory chooser.
///
/// A browser host wraps its native picker; the CLI resolves a path given on
/// the command line; tests use the generated mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FolderPicker: Send + Sync {
    async fn pick_directory(&self) -> Result<DirectoryHandle, PickerError>;
}
