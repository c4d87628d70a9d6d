//! `AppConfig` struct and TOML loading.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;
use wmata_api::ResponseFormat;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// WMATA client settings.
    #[serde(default)]
    pub client: ClientConfig,
}

/// `[client]` section.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Body format requested from the API.
    pub format: ResponseFormat,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// API base URL override.
    pub base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            format: ResponseFormat::Json,
            timeout_secs: 30,
            base_url: None,
        }
    }
}

impl ClientConfig {
    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parsed `base_url`, if set.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn parsed_base_url(&self) -> Result<Option<Url>> {
        self.base_url
            .as_deref()
            .map(|raw| Url::parse(raw).with_context(|| format!("invalid base_url: {raw}")))
            .transpose()
    }
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = AppConfig::default();

        // Assert
        assert_eq!(config.client.format, ResponseFormat::Json);
        assert_eq!(config.client.timeout(), Duration::from_secs(30));
        assert_eq!(config.client.base_url, None);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[client]\nformat = \"xml\"\ntimeout_secs = 5\nbase_url = \"http://127.0.0.1:8080/\"\n",
        )
        .unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(
            config.client,
            ClientConfig {
                format: ResponseFormat::Xml,
                timeout_secs: 5,
                base_url: Some(String::from("http://127.0.0.1:8080/")),
            }
        );
        assert_eq!(
            config.client.parsed_base_url().unwrap().unwrap().as_str(),
            "http://127.0.0.1:8080/"
        );
    }

    #[test]
    fn test_load_partial_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[client]\ntimeout_secs = 10\n").unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config.client.format, ResponseFormat::Json);
        assert_eq!(config.client.timeout_secs, 10);
    }

    #[test]
    fn test_load_empty_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_malformed_config_fails() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[client]\nformat = \"yaml\"\n").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_base_url_fails() {
        // Arrange
        let config = ClientConfig {
            base_url: Some(String::from("not a url")),
            ..ClientConfig::default()
        };

        // Act
        let result = config.parsed_base_url();

        // Assert
        assert!(result.is_err());
    }
}
