use crate::errors::LoupeError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Helper command is empty")]
    EmptyCommand,

    #[error("Failed to spawn '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    #[error("Helper process has no PID (already reaped)")]
    MissingPid,

    #[error("Failed to signal process '{pid}': {message}")]
    SignalFailed { pid: u32, message: String },

    #[error("Helper for spawn {spawn_id} is no longer supervised")]
    NotSupervised { spawn_id: u64 },

    #[error("Invalid PID: {pid}")]
    InvalidPid { pid: u32 },
}

impl LoupeError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::EmptyCommand => "PROCESS_EMPTY_COMMAND",
            ProcessError::SpawnFailed { .. } => "PROCESS_SPAWN_FAILED",
            ProcessError::MissingPid => "PROCESS_MISSING_PID",
            ProcessError::SignalFailed { .. } => "PROCESS_SIGNAL_FAILED",
            ProcessError::NotSupervised { .. } => "PROCESS_NOT_SUPERVISED",
            ProcessError::InvalidPid { .. } => "PROCESS_INVALID_PID",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ProcessError::SpawnFailed { .. })
    }
}
