use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::controller::TerminationReason;
use crate::process::{ExitOutcome, SpawnId};
use crate::settings::MagnifierSettings;

/// State changes caused by a dispatched command.
///
/// Each variant describes what happened, not what should happen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A helper process was started.
    HelperStarted {
        spawn_id: SpawnId,
        pid: Option<u32>,
        argv: Vec<String>,
        started_at: DateTime<Utc>,
    },
    /// The helper executable could not be started.
    HelperSpawnFailed { spawn_id: SpawnId, message: String },
    /// A termination request was sent to the running helper.
    StopRequested {
        spawn_id: SpawnId,
        reason: TerminationReason,
    },
    /// The running helper will be replaced once it has exited.
    RestartScheduled { spawn_id: SpawnId },
    /// The current helper's exit was observed.
    HelperExited {
        spawn_id: SpawnId,
        pid: Option<u32>,
        outcome: ExitOutcome,
    },
    /// The host was told about a new toggle state.
    RunningStateChanged { running: bool },
    /// Settings were normalized and persisted.
    SettingsApplied { settings: MagnifierSettings },
    /// The static lens position was recorded.
    PositionRecorded { x: i32, y: i32 },
}
