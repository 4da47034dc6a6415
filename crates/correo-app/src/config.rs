//! Accessibility preference management
//!
//! Preferences stored at: ~/.config/correo/config.json

use correo_types::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User accessibility preferences, the only durable state of the demo.
///
/// JSON keys match the site's client-side storage entries, so exported
/// preferences stay recognizable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// High contrast color scheme
    #[serde(rename = "correo-highContrast", default)]
    pub high_contrast: bool,

    /// Enlarged base text size
    #[serde(rename = "correo-largeText", default)]
    pub large_text: bool,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::NotFound)?
            .join("correo");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load preferences from file, or start with defaults
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load preferences from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// Save preferences to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save preferences to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Announcement for a high-contrast state change
    pub fn high_contrast_announcement(enabled: bool) -> &'static str {
        if enabled {
            "Modo alto contraste activado"
        } else {
            "Modo alto contraste desactivado"
        }
    }

    /// Announcement for a text-size state change
    pub fn large_text_announcement(enabled: bool) -> &'static str {
        if enabled {
            "Tamaño de texto grande activado"
        } else {
            "Tamaño de texto normal activado"
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn estado(enabled: bool) -> &'static str {
            if enabled {
                "activado"
            } else {
                "desactivado"
            }
        }

        writeln!(f, "Preferencias de accesibilidad")?;
        writeln!(f, "=============================")?;
        writeln!(f)?;
        writeln!(f, "Alto contraste: {}", estado(self.high_contrast))?;
        writeln!(f, "Texto grande:   {}", estado(self.large_text))?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use correo_types::Error;

    #[test]
    fn test_defaults_are_off() {
        let config = Config::default();
        assert!(!config.high_contrast);
        assert!(!config.large_text);
    }

    #[test]
    fn test_storage_keys_are_preserved() {
        let config = Config {
            high_contrast: true,
            large_text: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"correo-highContrast\":true"));
        assert!(json.contains("\"correo-largeText\":false"));
    }

    #[test]
    fn test_missing_keys_default_to_off() {
        let config: Config = serde_json::from_str("{\"correo-highContrast\":true}").unwrap();
        assert!(config.high_contrast);
        assert!(!config.large_text);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("config.json");

        let config = Config {
            high_contrast: true,
            large_text: true,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_save_reports_unwritable_path() {
        // A plain file sits where the config directory should go
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let err = Config::default()
            .save_to(&blocker.join("config.json"))
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::SaveError(_))));
    }

    #[test]
    fn test_state_announcements() {
        assert_eq!(
            Config::high_contrast_announcement(true),
            "Modo alto contraste activado"
        );
        assert_eq!(
            Config::high_contrast_announcement(false),
            "Modo alto contraste desactivado"
        );
        assert_eq!(
            Config::large_text_announcement(true),
            "Tamaño de texto grande activado"
        );
        assert_eq!(
            Config::large_text_announcement(false),
            "Tamaño de texto normal activado"
        );
    }
}
