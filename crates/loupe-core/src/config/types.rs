//! Configuration type definitions for loupe.
//!
//! # Example Configuration
//!
//! ```toml
//! [helper]
//! program = "mouseloupe"
//!
//! [settings]
//! path = "/tmp/loupe-settings.toml"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for loupe.
///
/// Derived from environment variables and system defaults, not from config
/// files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for all loupe data (default: ~/.loupe)
    pub loupe_dir: PathBuf,
    /// Level for loupe's own log targets under `-v` (`LOUPE_LOG_LEVEL`)
    pub log_level: String,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_settings_path(&self) -> PathBuf {
        self.loupe_dir.join("settings.toml")
    }
}

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LoupeConfig {
    /// Magnifier helper executable
    #[serde(default)]
    pub helper: HelperConfig,

    /// Where the magnifier settings are persisted
    #[serde(default)]
    pub settings: SettingsFileConfig,
}

/// Helper executable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HelperConfig {
    /// Program path or bare name resolved on PATH.
    /// Default: /usr/bin/mage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}

/// Settings file location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SettingsFileConfig {
    /// Default: ~/.loupe/settings.toml.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}
