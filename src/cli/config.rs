//! Config command implementation

use crate::settings::{Settings, SettingsError, config_path, save_settings};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings error: {0}")]
    SettingsError(#[from] SettingsError),

    #[error("Failed to encode settings: {0}")]
    EncodeError(#[from] toml::ser::Error),

    #[error("Settings file already exists: {0} (use --force to overwrite)")]
    AlreadyExists(String),
}

/// Print the effective settings as TOML
pub fn show_config(path: Option<&Path>, settings: &Settings) -> Result<(), ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
    let state = if path.exists() { "" } else { " (not found, using defaults)" };

    println!("# {}{}", path.display(), state);
    print!("{}", toml::to_string_pretty(settings)?);

    Ok(())
}

/// Write default settings
pub fn init_config(path: Option<&Path>, force: bool) -> Result<(), ConfigError> {
    let target = path.map(Path::to_path_buf).unwrap_or_else(config_path);
    if target.exists() && !force {
        return Err(ConfigError::AlreadyExists(target.display().to_string()));
    }

    let written = save_settings(Some(&target), &Settings::default())?;
    println!("[{}] Wrote default settings to {}", crate::APP_NAME, written.display());

    Ok(())
}
