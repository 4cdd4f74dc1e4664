//! JSON configuration file.
//!
//! Reads settings from `<config dir>/regionview/config.json`
//! (`~/.config` on Linux, `~/Library/Application Support` on macOS,
//! `%APPDATA%` on Windows). The file is optional and never written: the
//! app keeps no state between runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::model::Settings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Default config file path, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load settings from `path`.
///
/// Returns `Ok(None)` if the file does not exist. Values are validated
/// (clamped) before being returned.
pub fn load_from_path(path: &Path) -> Result<Option<Settings>, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut settings: Settings =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    settings.validate();
    Ok(Some(settings))
}

/// Load settings from the default location, falling back to defaults on
/// any problem.
pub fn load_settings() -> Settings {
    let Some(path) = config_path() else {
        log::debug!("No config directory on this platform, using defaults");
        return Settings::default();
    };

    match load_from_path(&path) {
        Ok(Some(settings)) => {
            log::info!("Loaded settings from {}", path.display());
            settings
        }
        Ok(None) => {
            log::debug!("No config at {}, using defaults", path.display());
            Settings::default()
        }
        Err(e) => {
            log::warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}
