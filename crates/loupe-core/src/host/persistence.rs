use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::errors::ConfigError;
use crate::settings::MagnifierSettings;

/// TOML-file persistence for [`MagnifierSettings`].
///
/// Keeps the last loaded or saved value in memory so reads never touch the
/// disk. Values read from disk are normalized before they are exposed.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    current: MagnifierSettings,
}

impl SettingsStore {
    /// Open the store at `path`. A missing file yields default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let current = load_settings(&path)?;
        Ok(Self { path, current })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current(&self) -> &MagnifierSettings {
        &self.current
    }

    /// Re-read the file, replacing the in-memory value on success.
    pub fn reload(&mut self) -> Result<&MagnifierSettings, ConfigError> {
        self.current = load_settings(&self.path)?;
        Ok(&self.current)
    }

    /// Write settings to disk, creating the parent directory if needed.
    pub fn save(&mut self, settings: &MagnifierSettings) -> Result<(), ConfigError> {
        let write_error = |message: String| ConfigError::SettingsWriteError {
            path: self.path.display().to_string(),
            message,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                write_error(format!(
                    "Failed to create directory ({}): {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(settings)
            .map_err(|e| write_error(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&self.path, content).map_err(|e| write_error(e.to_string()))?;

        self.current = settings.clone();

        info!(
            event = "core.settings.saved",
            path = %self.path.display(),
        );

        Ok(())
    }
}

fn load_settings(path: &Path) -> Result<MagnifierSettings, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(MagnifierSettings::default());
        }
        Err(e) => {
            error!(
                event = "core.settings.load_failed",
                path = %path.display(),
                error = %e
            );
            return Err(ConfigError::IoError { source: e });
        }
    };

    let settings: MagnifierSettings =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;

    Ok(settings.normalized())
}
