// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use image_genie::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.image_model = Some("gemini-2.5-flash-image".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the environment variable that holds the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub image_model: Option<String>,
    #[serde(default)]
    pub text_model: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub zoom_step: Option<f32>,
    /// Where downloads are written. Defaults to the platform download directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key_env: Some(DEFAULT_API_KEY_ENV.to_string()),
            image_model: Some(DEFAULT_IMAGE_MODEL.to_string()),
            text_model: Some(DEFAULT_TEXT_MODEL.to_string()),
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            zoom_step: Some(DEFAULT_ZOOM_STEP),
            download_dir: None,
        }
    }
}

impl Config {
    #[must_use]
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    #[must_use]
    pub fn image_model(&self) -> &str {
        self.image_model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)
    }

    #[must_use]
    pub fn text_model(&self) -> &str {
        self.text_model.as_deref().unwrap_or(DEFAULT_TEXT_MODEL)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    #[must_use]
    pub fn zoom_step(&self) -> f32 {
        self.zoom_step.unwrap_or(DEFAULT_ZOOM_STEP)
    }

    /// Reads the API key from the configured environment variable.
    /// Empty values count as missing.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(self.api_key_env())
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Resolves the download directory: configured value, then the platform
    /// download directory, then the working directory.
    #[must_use]
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a config file. Unparseable content falls back to defaults with a
/// warning rather than an error.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_models() {
        let config = Config {
            image_model: Some("custom-image".to_string()),
            zoom_step: Some(1.0),
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
        assert_eq!(loaded.image_model(), "custom-image");
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "text_model = \"other\"\n").expect("write partial toml");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.text_model(), "other");
        assert_eq!(loaded.image_model(), DEFAULT_IMAGE_MODEL);
        assert_eq!(loaded.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn default_config_uses_centralized_defaults() {
        let config = Config::default();
        assert_eq!(config.api_key_env(), DEFAULT_API_KEY_ENV);
        assert_eq!(config.zoom_step(), DEFAULT_ZOOM_STEP);
    }

    #[test]
    fn configured_download_dir_wins() {
        let config = Config {
            download_dir: Some(PathBuf::from("/tmp/exports")),
            ..Config::default()
        };
        assert_eq!(config.download_dir(), PathBuf::from("/tmp/exports"));
    }
}
