//! Default implementations for configuration types.

use crate::config::types::Config;

/// Helper executable used when no config file names one.
pub const DEFAULT_HELPER_PROGRAM: &str = "/usr/bin/mage";

impl Default for Config {
    fn default() -> Self {
        let loupe_dir = match dirs::home_dir() {
            Some(home) => home.join(".loupe"),
            None => {
                eprintln!(
                    "Warning: Could not find home directory. Set HOME environment variable. \
                    Using fallback directory."
                );
                std::env::temp_dir().join(".loupe")
            }
        };

        Self {
            loupe_dir,
            log_level: std::env::var("LOUPE_LOG_LEVEL").unwrap_or("info".to_string()),
        }
    }
}
