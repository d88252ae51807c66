use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::process::HelperExit;
use crate::settings::MagnifierSettings;
use crate::state::errors::ParseCommandError;

/// Everything the controller can be asked to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Start the helper if stopped, stop it if running.
    Toggle,
    /// Persist new settings, restarting a running helper with them.
    ApplySettings { settings: MagnifierSettings },
    /// Raise zoom by one step while the helper is running.
    ZoomIn,
    /// Lower zoom by one step while the helper is running.
    ZoomOut,
    /// Store the top-most window's position as the static lens position.
    RecordPosition,
    /// A supervised helper exited.
    HelperExited { exit: HelperExit },
}

/// Parses the one-word control messages accepted on the `run` command's stdin.
impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "toggle" => Ok(Command::Toggle),
            "pos" => Ok(Command::RecordPosition),
            "zoom-in" => Ok(Command::ZoomIn),
            "zoom-out" => Ok(Command::ZoomOut),
            other => Err(ParseCommandError::Unknown {
                input: other.to_string(),
            }),
        }
    }
}
