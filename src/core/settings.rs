//! Application settings management

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    System,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::System => "System",
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light, Theme::System]
    }
}

/// Application settings, persisted as JSON in the platform config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Application theme
    pub theme: Theme,
    /// Custom profiles directory
    pub profiles_directory: Option<PathBuf>,
    /// Search debounce window in ms
    pub debounce_ms: u64,
    /// Window size
    pub window_size: Option<(u32, u32)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            profiles_directory: None,
            debounce_ms: 500,
            window_size: None,
        }
    }
}

impl Settings {
    /// Get the config directory, creating nothing.
    pub fn config_directory() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ProfileDeck")
    }

    /// Default location of the settings file.
    pub fn default_path() -> PathBuf {
        Self::config_directory().join("settings.json")
    }

    /// Get the profiles directory, using the default if not set.
    pub fn get_profiles_directory(&self) -> PathBuf {
        self.profiles_directory
            .clone()
            .unwrap_or_else(|| Self::config_directory().join("profiles"))
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Load settings from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let mut settings: Settings =
            serde_json::from_str(&raw).context("Failed to parse settings")?;
        settings.validate();
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }

    /// Validate settings and fix any invalid values
    pub fn validate(&mut self) {
        self.debounce_ms = self.debounce_ms.clamp(100, 5000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_json_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.theme = Theme::Light;
        settings.debounce_ms = 250;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.theme, Theme::Light);
        assert_eq!(loaded.debounce_ms, 250);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let loaded = Settings::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded.debounce_ms, 500);
    }

    #[test]
    fn validate_clamps_debounce() {
        let mut settings = Settings {
            debounce_ms: 10,
            ..Default::default()
        };
        settings.validate();
        assert_eq!(settings.debounce_ms, 100);
    }
}
