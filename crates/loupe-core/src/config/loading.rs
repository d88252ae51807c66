//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.loupe/config.toml`
//! 3. **Project config** - `./.loupe/config.toml`

use crate::config::types::{HelperConfig, LoupeConfig, SettingsFileConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read or parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<LoupeConfig, ConfigError> {
    let mut config = LoupeConfig::default();

    if let Some(home_dir) = dirs::home_dir() {
        let user_path = home_dir.join(".loupe").join("config.toml");
        if let Some(user_config) = load_optional_config_file(&user_path)? {
            config = merge_configs(config, user_config);
        }
    }

    let project_path = std::env::current_dir()?.join(".loupe").join("config.toml");
    if let Some(project_config) = load_optional_config_file(&project_path)? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a config file, treating a missing file as `None`.
fn load_optional_config_file(path: &Path) -> Result<Option<LoupeConfig>, ConfigError> {
    match load_config_file(path) {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::ConfigNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<LoupeConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::ConfigNotFound {
            path: path.display().to_string(),
        },
        _ => ConfigError::IoError { source: e },
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields in the override replace base values only if present.
pub fn merge_configs(base: LoupeConfig, override_config: LoupeConfig) -> LoupeConfig {
    LoupeConfig {
        helper: HelperConfig {
            program: override_config.helper.program.or(base.helper.program),
        },
        settings: SettingsFileConfig {
            path: override_config.settings.path.or(base.settings.path),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_merge_prefers_override() {
        let base = LoupeConfig {
            helper: HelperConfig {
                program: Some("magnifier".to_string()),
            },
            settings: SettingsFileConfig {
                path: Some(PathBuf::from("/base/settings.toml")),
            },
        };
        let override_config = LoupeConfig {
            helper: HelperConfig {
                program: Some("mouseloupe".to_string()),
            },
            settings: SettingsFileConfig::default(),
        };

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.helper_program(), "mouseloupe");
        assert_eq!(
            merged.settings.path,
            Some(PathBuf::from("/base/settings.toml"))
        );
    }

    #[test]
    fn test_merge_keeps_base_when_override_empty() {
        let base = LoupeConfig {
            helper: HelperConfig {
                program: Some("magnifier".to_string()),
            },
            ..LoupeConfig::default()
        };
        let merged = merge_configs(base, LoupeConfig::default());
        assert_eq!(merged.helper_program(), "magnifier");
    }

    #[test]
    fn test_load_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_file(&dir.path().join("config.toml"));
        assert!(matches!(result, Err(ConfigError::ConfigNotFound { .. })));
        assert!(matches!(
            load_optional_config_file(&dir.path().join("config.toml")),
            Ok(None)
        ));
    }

    #[test]
    fn test_load_config_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "invalid toml [[[").unwrap();

        let result = load_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_config_file_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[helper]
program = "magnifier"
"#,
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.helper_program(), "magnifier");
        assert_eq!(config.settings.path, None);
    }
}
