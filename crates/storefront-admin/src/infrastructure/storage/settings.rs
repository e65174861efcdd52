//! `settings.json` persistence.
//!
//! Loading goes through [`Configuration::from_settings_json`], which repairs
//! whatever it finds (string numbers, missing built-ins, a dangling current
//! theme) and marks the result as loaded.  A missing file yields the default
//! configuration with `loaded == false`, which the admin panel shows as the
//! amber "using defaults" indicator.

use std::path::{Path, PathBuf};

use storefront_core::{Configuration, SettingsError};
use thiserror::Error;
use tracing::info;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a settings document.
    #[error("invalid settings in {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: SettingsError,
    },
}

/// Loads the configuration stored at `path`.
///
/// # Errors
///
/// Returns [`StorageError::Io`] for file-system errors other than "not
/// found", and [`StorageError::Settings`] if the JSON is malformed.
pub fn load_settings(path: &Path) -> Result<Configuration, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            Configuration::from_settings_json(&content).map_err(|source| StorageError::Settings {
                path: path.to_path_buf(),
                source,
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no settings file; using defaults");
            Ok(Configuration::default())
        }
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes an exported settings document to `path`, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns [`StorageError::Io`] for file-system failures.
pub fn write_settings(path: &Path, json: &str) -> Result<(), StorageError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| StorageError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, json).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}
