//! Configuration validation logic.

use crate::config::types::LoupeConfig;
use crate::errors::ConfigError;

/// Validate a LoupeConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Helper program, if set, must not be blank
/// - Settings path, if set, must not be empty
///
/// A helper that does not exist on disk is not a config error; the
/// controller reports it as unavailable instead.
pub fn validate_config(config: &LoupeConfig) -> Result<(), ConfigError> {
    if let Some(program) = &config.helper.program
        && program.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "helper.program must not be empty".to_string(),
        });
    }

    if let Some(path) = &config.settings.path
        && path.as_os_str().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "settings.path must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{HelperConfig, SettingsFileConfig};
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&LoupeConfig::default()).is_ok());
    }

    #[test]
    fn test_blank_program_rejected() {
        let config = LoupeConfig {
            helper: HelperConfig {
                program: Some("   ".to_string()),
            },
            ..LoupeConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("helper.program"));
    }

    #[test]
    fn test_empty_settings_path_rejected() {
        let config = LoupeConfig {
            settings: SettingsFileConfig {
                path: Some(PathBuf::new()),
            },
            ..LoupeConfig::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }
}
