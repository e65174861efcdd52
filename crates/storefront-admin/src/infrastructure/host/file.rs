//! A host backed by the settings file on disk.
//!
//! Saves overwrite the settings file in place (the headless equivalent of
//! "download and replace"), and discard re-reads it.  There is no product
//! display, so `rerender` only logs what would be shown.

use std::path::{Path, PathBuf};

use storefront_core::Configuration;
use tracing::{debug, info, warn};

use crate::application::admin::{HostHooks, SettingsExport};
use crate::application::folder::DirectoryHandle;
use crate::infrastructure::storage::settings::{load_settings, write_settings};

pub struct FileHost {
    settings_path: PathBuf,
    last_folder: Option<DirectoryHandle>,
}

impl FileHost {
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            last_folder: None,
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// The folder most recently handed over by the controller.
    pub fn last_folder(&self) -> Option<&DirectoryHandle> {
        self.last_folder.as_ref()
    }
}

impl HostHooks for FileHost {
    fn on_save(&mut self, export: &SettingsExport) -> Result<(), String> {
        write_settings(&self.settings_path, &export.json).map_err(|e| e.to_string())?;
        info!(path = %self.settings_path.display(), "settings written");
        Ok(())
    }

    fn on_preview(&mut self) {
        debug!("preview requested");
    }

    fn on_discard(&mut self, config: &mut Configuration) {
        match load_settings(&self.settings_path) {
            Ok(persisted) => *config = persisted,
            Err(e) => warn!(error = %e, "could not reload settings; keeping session values"),
        }
    }

    fn rerender(&mut self, config: &Configuration) {
        debug!(
            theme = config.current_theme_id(),
            fields = ?config.visible_fields(),
            "rerender"
        );
    }

    fn on_folder_load(&mut self, directory: DirectoryHandle) {
        info!(folder = %directory.name, "folder handed to host");
        self.last_folder = Some(directory);
    }
}
