use std::error::Error;

/// Shared by the config, controller, dispatch, process and window errors.
///
/// `events::log_app_error` reports the code of any of these and logs user
/// errors (a missing helper, an unknown control message, a bad config file)
/// at warn level instead of error.
pub trait LoupeError: Error + Send + Sync + 'static {
    /// Stable upper-case code, also printed in `core.app.error_occurred`
    fn error_code(&self) -> &'static str;

    /// True when the user can fix the cause without a code change
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found at '{path}'")]
    ConfigNotFound { path: String },

    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Failed to write settings file '{path}': {message}")]
    SettingsWriteError { path: String, message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl LoupeError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::SettingsWriteError { .. } => "SETTINGS_WRITE_ERROR",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. } | ConfigError::InvalidConfiguration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_error() {
        let error = ConfigError::ConfigParseError {
            message: "invalid TOML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse config file: invalid TOML syntax"
        );
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_settings_write_error_is_system_error() {
        let error = ConfigError::SettingsWriteError {
            path: "/readonly/settings.toml".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(error.error_code(), "SETTINGS_WRITE_ERROR");
        assert!(!error.is_user_error());
    }
}
