//! Configuration loading
//!
//! This module provides:
//! - `Settings` - host settings loaded from config.toml
//! - `RuntimeEnv` - runtime wiring selected by environment variables

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::prompts::DEFAULT_MODEL;

/// Default registry location, relative to the working directory
pub const DEFAULT_REGISTRY_PATH: &str = "agent_registry.csv";

/// Environment variable naming the agent engine app; enables the session runner
pub const AGENT_ENGINE_ENV: &str = "GOOGLE_AGENT_ENGINE";
pub const CLOUD_PROJECT_ENV: &str = "GOOGLE_CLOUD_PROJECT";
pub const CLOUD_LOCATION_ENV: &str = "GOOGLE_CLOUD_LOCATION";

/// Host settings loaded from config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub root: RootConfig,
    pub registry: RegistryConfig,
}

impl Settings {
    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Settings::default())
    }

    /// Load settings from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Get the config directory path (~/.config/agent-host)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("agent-host"))
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }
}

/// Root agent settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    /// Model driving the root agent
    pub model: String,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Remote agent registry settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub path: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_REGISTRY_PATH),
        }
    }
}

/// Environment consumed by the runner wiring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeEnv {
    pub agent_engine: Option<String>,
    pub cloud_project: Option<String>,
    pub cloud_location: Option<String>,
}

impl RuntimeEnv {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            agent_engine: lookup(AGENT_ENGINE_ENV),
            cloud_project: lookup(CLOUD_PROJECT_ENV),
            cloud_location: lookup(CLOUD_LOCATION_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.root.model, "gemini-2.5-flash");
        assert_eq!(settings.registry.path, PathBuf::from("agent_registry.csv"));
    }

    #[test]
    fn test_parse_settings() {
        let toml = r#"
[root]
model = "gemini-2.5-pro"

[registry]
path = "/etc/agent-host/registry.csv"
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.root.model, "gemini-2.5-pro");
        assert_eq!(settings.registry.path, PathBuf::from("/etc/agent-host/registry.csv"));
    }

    #[test]
    fn test_parse_partial_settings() {
        let toml = r#"
[registry]
path = "remote.csv"
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.root, RootConfig::default());
        assert_eq!(settings.registry.path, PathBuf::from("remote.csv"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[root]\nmodel = \"gemini-2.0-flash\"\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.root.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[root\nmodel = ").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_runtime_env_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (AGENT_ENGINE_ENV, "dice-prime"),
            (CLOUD_PROJECT_ENV, "demo-project"),
        ]
        .into_iter()
        .collect();

        let env = RuntimeEnv::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(env.agent_engine.as_deref(), Some("dice-prime"));
        assert_eq!(env.cloud_project.as_deref(), Some("demo-project"));
        assert_eq!(env.cloud_location, None);
    }
}
