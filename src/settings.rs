//! User settings for the command line tool.
//!
//! Stored in `~/.synhide/config.toml`:
//!
//! ```toml
//! synonyms = "/home/me/synonyms.json"
//! sentinel = 255
//! ```
//!
//! Every field is optional and a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::SENTINEL;

/// Errors that can occur when loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

/// Settings read from the config file.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Default synonym file used when `--synonyms` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<PathBuf>,

    /// Sentinel byte override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentinel: Option<u8>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads settings from `path`, returning defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    /// Path to the settings file.
    pub fn config_path() -> Result<PathBuf, SettingsError> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Sentinel to use, falling back to the built-in one.
    pub fn sentinel_or_default(&self) -> u8 {
        self.sentinel.unwrap_or(SENTINEL)
    }
}

/// Returns `~/.synhide`.
pub fn get_config_dir() -> Result<PathBuf, SettingsError> {
    dirs::home_dir()
        .map(|home| home.join(".synhide"))
        .ok_or(SettingsError::NoConfigDir)
}
