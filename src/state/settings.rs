/// Persistent client settings
///
/// The backend base URL is stored as JSON in the platform config directory,
/// so the client can point at a non-local backend without a rebuild.
/// `MEDSCAN_API_URL` overrides the stored value without touching the file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Environment variable that overrides the configured endpoint
pub const API_URL_ENV: &str = "MEDSCAN_API_URL";

/// Backend used when nothing is configured
const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Base URL of the scan backend; `/api/scan` is appended per request
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Settings {
    /// Resolve settings: environment variable first, then the settings file,
    /// then built-in defaults.
    ///
    /// On first run the defaults are written out so the user has a file
    /// to edit.
    pub fn load() -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                return Settings { api_base_url: url };
            }
        }

        match Self::load_from_file() {
            Some(settings) => settings,
            None => {
                let defaults = Settings::default();
                if let Err(e) = defaults.save() {
                    warn!("could not write default settings: {}", e);
                }
                defaults
            }
        }
    }

    fn load_from_file() -> Option<Self> {
        let path = Self::settings_path();
        let json = std::fs::read_to_string(&path).ok()?;

        match Self::from_json(&json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!("ignoring malformed settings file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Write the settings file, creating the config directory if needed
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::settings_path();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Get the path where the settings file is stored
    ///
    /// - Linux: ~/.config/med-scanner/settings.json
    /// - macOS: ~/Library/Application Support/med-scanner/settings.json
    /// - Windows: %APPDATA%\med-scanner\settings.json
    fn settings_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user config directory");

        path.push("med-scanner");
        path.push("settings.json");
        path
    }

    /// Convert to JSON string for the settings file
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string (from the settings file)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://127.0.0.1:3000");
    }

    #[test]
    fn test_serialization() {
        let settings = Settings {
            api_base_url: "https://scanner.example.com".to_string(),
        };

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();

        assert_eq!(settings, restored);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(Settings::from_json("not json").is_err());
    }
}
