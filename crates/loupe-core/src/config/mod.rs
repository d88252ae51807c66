//! # Configuration System
//!
//! Hierarchical TOML configuration for loupe.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.loupe/config.toml` (global user preferences)
//! 3. **Project config** - `./.loupe/config.toml` (directory-local overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.loupe/config.toml
//! [helper]
//! program = "/usr/bin/mage"
//!
//! [settings]
//! path = "/home/me/.config/loupe/settings.toml"
//! ```
//!
//! The magnifier display settings themselves live in a separate file owned
//! by [`crate::host::SettingsStore`], because they are rewritten every time
//! the user changes them.

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{Config, HelperConfig, LoupeConfig, SettingsFileConfig};
pub use validation::validate_config;

impl LoupeConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }

    /// The helper program to launch, falling back to the built-in default.
    pub fn helper_program(&self) -> &str {
        self.helper
            .program
            .as_deref()
            .unwrap_or(defaults::DEFAULT_HELPER_PROGRAM)
    }

    /// Path of the settings file, falling back to `<loupe_dir>/settings.toml`.
    pub fn settings_path(&self, runtime: &Config) -> std::path::PathBuf {
        self.settings
            .path
            .clone()
            .unwrap_or_else(|| runtime.default_settings_path())
    }
}
