use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::reminder::Store;
use crate::theme::ThemeConfig;

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub data_file: Option<PathBuf>,
    pub theme: ThemeConfig,
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("reminder-tui").join("config.toml"))
    }

    /// Load settings, falling back to defaults when the file is absent or broken.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        let parsed = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))
            .and_then(|content| Self::from_toml(&content));

        match parsed {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{:#}, using default settings", err);
                Self::default()
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).wrap_err("Invalid settings")
    }

    /// Where reminders are stored: the configured file, else the platform data dir.
    pub fn data_file(&self) -> Option<PathBuf> {
        self.data_file.clone().or_else(Store::default_path)
    }
}
