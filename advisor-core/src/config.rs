use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::Coordinates;

/// Credentials and endpoint for the OpenWeather API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    pub api_key: Option<String>,

    /// Overrides the public current-weather endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// [openweather]
/// api_key = "..."
///
/// [home]
/// latitude = 51.5085
/// longitude = -0.1257
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub openweather: OpenWeatherConfig,

    /// Used as the geolocation fix when no coordinates are given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<Coordinates>,
}

impl Config {
    /// Load config from the platform config dir, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform config dir, returning the path written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-advisor", "advisor")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the configured API key, or an error with a hint on how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.openweather
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeather API key configured.\n\
                     Hint: run `advisor configure`, pass --api-key or set OPENWEATHER_API_KEY."
                )
            })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.openweather.api_key = Some(api_key);
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.openweather.endpoint.as_deref()
    }

    pub fn set_endpoint(&mut self, endpoint: String) {
        self.openweather.endpoint = Some(endpoint);
    }

    pub fn set_home(&mut self, home: Option<Coordinates>) {
        self.home = home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No OpenWeather API key configured"));
        assert!(err.to_string().contains("advisor configure"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let mut cfg = Config::default();
        cfg.set_api_key("  ".into());
        assert!(cfg.api_key().is_err());
    }

    #[test]
    fn set_api_key_is_returned() {
        let mut cfg = Config::default();
        cfg.set_api_key("OPEN_KEY".into());
        assert_eq!(cfg.api_key().expect("key must exist"), "OPEN_KEY");
    }

    #[test]
    fn parses_full_file() {
        let cfg: Config = toml::from_str(
            r#"
            [openweather]
            api_key = "abc"
            endpoint = "http://localhost:8080/weather"

            [home]
            latitude = 51.5085
            longitude = -0.1257
            "#,
        )
        .expect("valid toml");

        assert_eq!(cfg.api_key().expect("key"), "abc");
        assert_eq!(cfg.endpoint(), Some("http://localhost:8080/weather"));
        assert_eq!(cfg.home, Some(Coordinates::new(51.5085, -0.1257)));
    }

    #[test]
    fn parses_empty_file() {
        let cfg: Config = toml::from_str("").expect("valid toml");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_missing_file_returns_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("nope.toml")).expect("load");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());
        cfg.set_home(Some(Coordinates::new(-33.87, 151.21)));
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "openweather = 5").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
