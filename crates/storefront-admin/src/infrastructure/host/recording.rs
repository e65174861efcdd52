//! A host that records every notification it receives.

use storefront_core::Configuration;

use crate::application::admin::{HostHooks, SettingsExport};
use crate::application::folder::DirectoryHandle;

/// What the product display would have rendered on one `rerender` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub theme_id: String,
    pub visible_fields: Vec<String>,
}

/// Records notifications; `on_discard` restores a configured snapshot.
#[derive(Debug, Default)]
pub struct RecordingHost {
    persisted: Option<Configuration>,
    save_failure: Option<String>,
    saves: Vec<SettingsExport>,
    renders: Vec<RenderSnapshot>,
    previews: usize,
    discards: usize,
    folders: Vec<DirectoryHandle>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose discard restores `persisted`.  Without one, discard
    /// restores the default configuration.
    pub fn with_persisted(persisted: Configuration) -> Self {
        Self {
            persisted: Some(persisted),
            ..Self::default()
        }
    }

    /// Makes every subsequent save fail with `reason`.
    pub fn fail_saves(&mut self, reason: &str) {
        self.save_failure = Some(reason.to_string());
    }

    pub fn saves(&self) -> &[SettingsExport] {
        &self.saves
    }

    pub fn renders(&self) -> &[RenderSnapshot] {
        &self.renders
    }

    pub fn last_render(&self) -> Option<&RenderSnapshot> {
        self.renders.last()
    }

    pub fn previews(&self) -> usize {
        self.previews
    }

    pub fn discards(&self) -> usize {
        self.discards
    }

    pub fn folders(&self) -> &[DirectoryHandle] {
        &self.folders
    }
}

impl HostHooks for RecordingHost {
    fn on_save(&mut self, export: &SettingsExport) -> Result<(), String> {
        if let Some(reason) = &self.save_failure {
            return Err(reason.clone());
        }
        self.saves.push(export.clone());
        Ok(())
    }

    fn on_preview(&mut self) {
        self.previews += 1;
    }

    fn on_discard(&mut self, config: &mut Configuration) {
        self.discards += 1;
        *config = self.persisted.clone().unwrap_or_default();
    }

    fn rerender(&mut self, config: &Configuration) {
        self.renders.push(RenderSnapshot {
            theme_id: config.current_theme_id().to_string(),
            visible_fields: config.visible_fields().into_iter().map(str::to_string).collect(),
        });
    }

    fn on_folder_load(&mut self, directory: DirectoryHandle) {
        self.folders.push(directory);
    }
}
