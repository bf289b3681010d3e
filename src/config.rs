/// User settings
///
/// Settings are read from `settings.json` in the user's config directory:
/// - Linux: ~/.config/vet-clinic/settings.json
/// - macOS: ~/Library/Application Support/vet-clinic/settings.json
/// - Windows: %APPDATA%\vet-clinic\settings.json
///
/// The file is optional and every key in it is optional. It is never
/// written by the app.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Colour scheme of the window
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Dark,
    #[default]
    Light,
}

impl From<ThemeChoice> for iced::Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => iced::Theme::Dark,
            ThemeChoice::Light => iced::Theme::Light,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeChoice,
    pub window_width: f32,
    pub window_height: f32,
    /// `tracing` filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            window_width: 420.0,
            window_height: 780.0,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default location.
    /// A missing file (or no config directory at all) gives the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the path where the settings file is expected
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("vet-clinic");
        path.push("settings.json");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings = Settings::from_json(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert_eq!(settings.window_width, Settings::default().window_width);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let result = Settings::from_json(r#"{ "theme": "sepia" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "window_width": 500.0, "log_filter": "debug" }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.window_width, 500.0);
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.theme, ThemeChoice::Light);
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
