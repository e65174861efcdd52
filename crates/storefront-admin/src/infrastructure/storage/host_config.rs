//! TOML-based host configuration (`storefront.toml`).
//!
//! The host configuration says where the storefront settings live and tunes
//! the admin panel's behaviour.  It is separate from `settings.json`, which
//! belongs to the shop owner and is rewritten by every save.
//!
//! ```toml
//! log_level = "debug"
//! settings_path = "catalog/settings.json"
//! export_file_name = "settings.json"
//! toast_duration_ms = 5000
//! ```
//!
//! # Serde default values
//!
//! Every field carries `#[serde(default = "some_fn")]`, so an empty file, a
//! partial file and no file at all all produce a usable configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::admin::AdminOptions;

/// Error type for host configuration operations.
#[derive(Debug, Error)]
pub enum HostConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing host config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse host config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize host config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Host configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Where `settings.json` is read from and saved to.
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
    /// File name offered for exported settings.
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    /// How long a toast stays visible.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_settings_path() -> PathBuf {
    PathBuf::from("settings.json")
}
fn default_export_file_name() -> String {
    "settings.json".to_string()
}
fn default_toast_duration_ms() -> u64 {
    3000
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            settings_path: default_settings_path(),
            export_file_name: default_export_file_name(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl HostConfig {
    /// Controller options derived from this configuration.
    pub fn admin_options(&self) -> AdminOptions {
        AdminOptions {
            export_file_name: self.export_file_name.clone(),
            toast_duration: Duration::from_millis(self.toast_duration_ms),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Loads the host configuration, returning defaults if the file does not
/// exist yet.
///
/// # Errors
///
/// Returns [`HostConfigError::Io`] for file-system errors other than "not
/// found", and [`HostConfigError::Parse`] if the TOML is malformed.
pub fn load_host_config(path: &Path) -> Result<HostConfig, HostConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HostConfig::default()),
        Err(source) => Err(HostConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Persists `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`HostConfigError::Io`] for file-system failures or
/// [`HostConfigError::Serialize`] if serialization fails.
pub fn save_host_config(path: &Path, config: &HostConfig) -> Result<(), HostConfigError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| HostConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| HostConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_host_config_default_values() {
        // Arrange / Act
        let cfg = HostConfig::default();

        // Assert
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.settings_path, PathBuf::from("settings.json"));
        assert_eq!(cfg.export_file_name, "settings.json");
        assert_eq!(cfg.toast_duration_ms, 3000);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let cfg: HostConfig = toml::from_str("toast_duration_ms = 5000\n").unwrap();

        assert_eq!(cfg.toast_duration_ms, 5000);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn test_admin_options_carry_toast_duration() {
        let cfg = HostConfig {
            toast_duration_ms: 1200,
            ..HostConfig::default()
        };

        let options = cfg.admin_options();

        assert_eq!(options.toast_duration, Duration::from_millis(1200));
        assert_eq!(options.export_file_name, "settings.json");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join(format!("storefront-{}.toml", Uuid::new_v4()));

        assert_eq!(load_host_config(&path).unwrap(), HostConfig::default());
    }

    #[test]
    fn test_saved_config_loads_back() {
        // Arrange
        let path = std::env::temp_dir()
            .join(format!("storefront-{}", Uuid::new_v4()))
            .join("storefront.toml");
        let cfg = HostConfig {
            log_level: "debug".to_string(),
            settings_path: PathBuf::from("catalog/settings.json"),
            ..HostConfig::default()
        };

        // Act
        save_host_config(&path, &cfg).unwrap();
        let restored = load_host_config(&path).unwrap();

        // Assert
        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result: Result<HostConfig, _> = toml::from_str("toast_duration_ms = \"soon\"");

        assert!(result.is_err());
    }
}
