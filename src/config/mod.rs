//! Configuration management

use crate::theme::ThemeSettings;
use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub theme: ThemeSettings,
}

fn default_port() -> u16 {
    3000
}

/// Default config file location (without extension; any format the
/// `config` crate understands is picked up).
pub fn default_config_file() -> PathBuf {
    directories::ProjectDirs::from("dev", "theme-toggle", "theme-toggle")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config")
}

pub fn load_config() -> Result<Config> {
    load_config_from(Some(&default_config_file()))
}

/// Load configuration from an optional file, overridden by environment
/// variables (THEME_TOGGLE_PORT, THEME_TOGGLE_THEME__STORAGE_KEY, etc.).
pub fn load_config_from(file: Option<&Path>) -> Result<Config> {
    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", i64::from(default_port()))?;

    // Load from config file if it exists
    if let Some(file) = file {
        builder = builder.add_source(
            ::config::File::with_name(&file.to_string_lossy()).required(false),
        );
    }

    let config = builder
        .add_source(
            ::config::Environment::with_prefix("THEME_TOGGLE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
