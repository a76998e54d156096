//! Loading and saving the settings file

use super::config::Settings;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to save settings: {0}")]
    SaveError(String),
}

/// Get the config directory (~/.config/manifest-validation)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(crate::APP_NAME)
}

/// Get the default settings file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load settings from `path`, or the default location. A missing file means defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let settings_path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

    if !settings_path.exists() {
        tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&settings_path)?;
    let settings: Settings = toml::from_str(&content)?;

    Ok(settings)
}

/// Save settings to `path`, or the default location. Returns the path written.
pub fn save_settings(path: Option<&Path>, settings: &Settings) -> Result<PathBuf, SettingsError> {
    let settings_path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

    if let Some(parent) = settings_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content =
        toml::to_string_pretty(settings).map_err(|e| SettingsError::SaveError(e.to_string()))?;

    fs::write(&settings_path, content)?;

    Ok(settings_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_under_the_app_dir() {
        let path = config_path();
        assert!(path.ends_with("manifest-validation/config.toml"));
    }
}
