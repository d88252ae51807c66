//! The collaborator the controller reports to.
//!
//! In a panel this is the applet widget: it owns the settings, persists
//! them, and mirrors the running state on its toggle button.

pub mod persistence;

pub use persistence::SettingsStore;

use crate::errors::ConfigError;
use crate::settings::MagnifierSettings;

/// Trait implemented by the UI layer that owns a [`ProcessController`].
///
/// [`ProcessController`]: crate::controller::ProcessController
pub trait AppletHost {
    /// Current persisted settings.
    fn settings(&self) -> MagnifierSettings;

    /// Persist settings. Called after every settings change the controller applies.
    fn save_settings(&mut self, settings: &MagnifierSettings) -> Result<(), ConfigError>;

    /// Toggle-visual-state changed.
    fn running_state_changed(&mut self, running: bool);
}
