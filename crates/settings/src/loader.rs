use crate::model::Settings;
use dirs::config_dir;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SETTINGS_FILE: &str = "strummer.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub fn settings_path() -> PathBuf {
    // A file in the working directory wins (handy during development)
    let dev_path = PathBuf::from(SETTINGS_FILE);
    if dev_path.exists() {
        return dev_path;
    }

    let base = config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("strummer").join(SETTINGS_FILE)
}

pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, SettingsError> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Like [`load_settings`], but a missing file yields the defaults
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Settings, SettingsError> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    load_settings(path)
}
