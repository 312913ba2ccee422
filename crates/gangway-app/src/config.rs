//! Application configuration loaded from `gangway.toml`.
//!
//! A missing file is not an error; every field has a default matching the
//! demo portal, so the binary runs out of the box.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level configuration file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub auth: AuthSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSection {
    #[serde(default = "default_title")]
    pub title: String,
    /// Id of the theme to select at startup.
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            theme: default_theme(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSection {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_provider_title")]
    pub title: String,
    #[serde(default = "default_provider_message")]
    pub message: String,
    /// Attempt automatic sign-in on load.
    #[serde(default = "default_auto")]
    pub auto: bool,
}

impl Default for AuthSection {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            title: default_provider_title(),
            message: default_provider_message(),
            auto: default_auto(),
        }
    }
}

fn default_title() -> String {
    "Gangway".to_string()
}

fn default_theme() -> String {
    "gangway-light".to_string()
}

fn default_provider() -> String {
    "github-auth-provider".to_string()
}

fn default_provider_title() -> String {
    "GitHub".to_string()
}

fn default_provider_message() -> String {
    "Sign in using GitHub".to_string()
}

fn default_auto() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from the given path, falling back to defaults if
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("gangway.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.auth.auto);
        assert_eq!(config.auth.provider, "github-auth-provider");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gangway.toml");
        std::fs::write(&path, "[app]\ntitle = \"My Portal\"\n").unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.app.title, "My Portal");
        assert_eq!(config.app.theme, "gangway-light");
        assert_eq!(config.auth, AuthSection::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gangway.toml");
        std::fs::write(&path, "[app\ntitle=").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }
}
