//! Directory pickers.
//!
//! [`PathFolderPicker`] answers a pick with a path decided up front, such as
//! one given on the command line.  It checks the path on a blocking thread,
//! since file-system metadata calls can stall on network mounts.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::application::folder::{DirectoryHandle, FolderPicker, PickerError};

/// Picks a fixed path, or reports cancellation when there is none.
#[derive(Debug, Clone, Default)]
pub struct PathFolderPicker {
    path: Option<PathBuf>,
}

impl PathFolderPicker {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl FolderPicker for PathFolderPicker {
    async fn pick_directory(&self) -> Result<DirectoryHandle, PickerError> {
        let Some(path) = self.path.clone() else {
            return Err(PickerError::Cancelled);
        };
        let candidate = path.clone();
        let is_dir = tokio::task::spawn_blocking(move || candidate.is_dir())
            .await
            .unwrap_or(false);
        if !is_dir {
            debug!(path = %path.display(), "not a readable directory");
            return Err(PickerError::Denied(path.display().to_string()));
        }
        Ok(DirectoryHandle::from_path(path))
    }
}
