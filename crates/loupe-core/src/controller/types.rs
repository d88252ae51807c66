use serde::{Deserialize, Serialize};

use crate::process::SpawnId;

/// Why the controller asked the helper to terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The user toggled the magnifier off (or the controller is shutting down).
    UserStop,
    /// Settings changed; a fresh helper starts once this one has exited.
    Restart,
}

/// Snapshot of the controller state for display and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ControllerState {
    /// The helper executable is missing; toggling is not possible.
    Unavailable,
    Stopped,
    Running {
        spawn_id: SpawnId,
        pid: Option<u32>,
        /// Set once a termination request has been sent.
        terminating: Option<TerminationReason>,
    },
}

impl ControllerState {
    pub fn is_running(&self) -> bool {
        matches!(self, ControllerState::Running { .. })
    }
}
