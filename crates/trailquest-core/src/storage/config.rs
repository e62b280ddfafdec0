//! TOML-based application configuration.
//!
//! Holds presentation-side knobs only -- the engines never read it:
//! - Simulated scan delay applied by the CLI before `mark_found`
//! - Default demo profile used by `account login` shortcuts
//!
//! Configuration is stored at `~/.config/trailquest/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;

/// Scan presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Seconds the CLI waits between `start_scan` and the find, to mimic
    /// the product's QR-scanning animation.
    #[serde(default = "default_scan_delay")]
    pub simulate_delay_secs: u64,
}

/// Default demo sign-in identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_name")]
    pub name: String,
    #[serde(default = "default_profile_email")]
    pub email: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/trailquest/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

fn default_scan_delay() -> u64 {
    3
}
fn default_profile_name() -> String {
    "John Doe".into()
}
fn default_profile_email() -> String {
    "john@example.com".into()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            simulate_delay_secs: default_scan_delay(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            email: default_profile_email(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            profile: ProfileConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match Self::load_from(&path) {
            Ok(Some(cfg)) => Ok(cfg),
            Ok(None) => {
                let cfg = Self::default();
                cfg.save_to(&path)?;
                Ok(cfg)
            }
            Err(e) => Err(e),
        }
    }

    /// Load from the default location, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Load from an explicit path. `Ok(None)` means the file is absent.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                Ok(Some(cfg))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get a config value as a string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "scan.simulate_delay_secs" => {
                self.scan.simulate_delay_secs =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as seconds"),
                    })?;
            }
            "profile.name" => self.profile.name = value.to_string(),
            "profile.email" => self.profile.email = value.to_string(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        self.save()
    }
}
