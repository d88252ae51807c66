use serde::{Deserialize, Serialize};

/// Identifier of one spawn attempt.
///
/// Exit notifications carry the id of the spawn they belong to, so a late
/// notification can never be mistaken for the current helper's exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpawnId(u64);

impl SpawnId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for SpawnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a helper process ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ExitOutcome {
    /// Exited with a status code.
    Code(i32),
    /// Terminated by a signal.
    Signal(i32),
    /// The executable could not be started at all.
    SpawnFailed(String),
    /// Waiting on the child failed; the process is treated as gone.
    WaitFailed(String),
}

impl ExitOutcome {
    pub fn success(&self) -> bool {
        matches!(self, ExitOutcome::Code(0))
    }
}

impl From<std::process::ExitStatus> for ExitOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;

        match (status.code(), status.signal()) {
            (Some(code), _) => ExitOutcome::Code(code),
            (None, Some(signal)) => ExitOutcome::Signal(signal),
            (None, None) => ExitOutcome::WaitFailed(format!("unrecognized status {status}")),
        }
    }
}

impl std::fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitOutcome::Code(code) => write!(f, "exit code {code}"),
            ExitOutcome::Signal(signal) => write!(f, "signal {signal}"),
            ExitOutcome::SpawnFailed(message) => write!(f, "spawn failed: {message}"),
            ExitOutcome::WaitFailed(message) => write!(f, "wait failed: {message}"),
        }
    }
}

/// Exit notification for one spawned helper. Delivered exactly once per spawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperExit {
    pub spawn_id: SpawnId,
    /// `None` when the process never started.
    pub pid: Option<u32>,
    pub outcome: ExitOutcome,
}

impl HelperExit {
    pub fn spawn_failed(spawn_id: SpawnId, message: impl Into<String>) -> Self {
        Self {
            spawn_id,
            pid: None,
            outcome: ExitOutcome::SpawnFailed(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn test_spawn_id_next() {
        let id = SpawnId::new(1);
        assert_eq!(id.next().as_u64(), 2);
        assert!(id < id.next());
    }

    #[test]
    fn test_exit_outcome_from_status() {
        // Raw wait status: exit code lives in the high byte
        let exited = std::process::ExitStatus::from_raw(3 << 8);
        assert_eq!(ExitOutcome::from(exited), ExitOutcome::Code(3));

        let signaled = std::process::ExitStatus::from_raw(15);
        assert_eq!(ExitOutcome::from(signaled), ExitOutcome::Signal(15));
    }

    #[test]
    fn test_exit_outcome_success() {
        assert!(ExitOutcome::Code(0).success());
        assert!(!ExitOutcome::Code(1).success());
        assert!(!ExitOutcome::Signal(15).success());
        assert!(!ExitOutcome::SpawnFailed("missing".to_string()).success());
    }

    #[test]
    fn test_helper_exit_json() {
        let exit = HelperExit::spawn_failed(SpawnId::new(7), "No such file");
        let json = serde_json::to_string(&exit).unwrap();
        assert!(json.contains(r#""spawn_id":7"#));
        assert!(json.contains(r#""kind":"spawn_failed""#));
        let parsed: HelperExit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, exit);
    }
}
