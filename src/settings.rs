//! Persisted generator settings (`.droidgen.toml` at the project root).
//!
//! Written by `droidgen app` and read back by `droidgen activity` to seed
//! prompt defaults, so the app package only has to be typed once.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: AppSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_sdk: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sdk: Option<u32>,
}

impl Settings {
    /// Load settings, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(&dir.path().join(".droidgen.toml")).unwrap();
        assert!(settings.app.package.is_none());
    }

    #[test]
    fn settings_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".droidgen.toml");

        let settings = Settings {
            app: AppSettings {
                name: Some("Demo".to_string()),
                package: Some("com.example.demo".to_string()),
                target_sdk: Some(23),
                min_sdk: Some(17),
            },
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.app.package.as_deref(), Some("com.example.demo"));
        assert_eq!(loaded.app.target_sdk, Some(23));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".droidgen.toml");
        fs::write(&path, "not = [valid").unwrap();

        assert!(matches!(Settings::load(&path), Err(AppError::SettingsParse(_))));
    }
}
