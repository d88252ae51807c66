//! Launcher trait definition.

use tokio::sync::oneshot;

use crate::process::errors::ProcessError;
use crate::process::operations::helper_available;
use crate::process::types::SpawnId;

/// Handle to a helper process started by a [`Launcher`].
///
/// Owned exclusively by the controller for as long as the helper is
/// believed to be running.
#[derive(Debug)]
pub struct SpawnedHelper {
    spawn_id: SpawnId,
    pid: Option<u32>,
    terminator: Option<oneshot::Sender<()>>,
}

impl SpawnedHelper {
    /// A handle without a supervision channel, for launchers that deliver
    /// termination some other way.
    pub fn new(spawn_id: SpawnId, pid: Option<u32>) -> Self {
        Self {
            spawn_id,
            pid,
            terminator: None,
        }
    }

    pub(crate) fn supervised(
        spawn_id: SpawnId,
        pid: Option<u32>,
        terminator: oneshot::Sender<()>,
    ) -> Self {
        Self {
            spawn_id,
            pid,
            terminator: Some(terminator),
        }
    }

    pub fn spawn_id(&self) -> SpawnId {
        self.spawn_id
    }

    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    pub(crate) fn take_terminator(&mut self) -> Option<oneshot::Sender<()>> {
        self.terminator.take()
    }
}

/// Trait defining how helper processes are started and stopped.
///
/// Implementations must be non-blocking: `spawn` returns as soon as the
/// process exists, `terminate` returns as soon as the request is sent. The
/// exit itself is reported later, exactly once per successful spawn, as a
/// [`HelperExit`](crate::process::HelperExit) delivered to the controller's
/// owning task.
pub trait Launcher {
    /// Check if the helper program can be launched.
    fn is_available(&self, program: &str) -> bool {
        helper_available(program)
    }

    /// Start the helper. `argv[0]` is the program.
    fn spawn(&mut self, spawn_id: SpawnId, argv: &[String]) -> Result<SpawnedHelper, ProcessError>;

    /// Ask the helper to terminate.
    fn terminate(&mut self, helper: &mut SpawnedHelper) -> Result<(), ProcessError>;
}
