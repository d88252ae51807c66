//! Production launcher backed by tokio child processes.
//!
//! Each spawned helper gets a supervision task that owns the `Child`. The
//! task waits for the process, delivers SIGTERM when asked to, and sends a
//! single [`HelperExit`] once the child has been reaped. Because the signal
//! is only sent while the task still holds an unreaped child, it can never
//! hit a recycled PID.
//!
//! A helper that is still alive one kill grace period after SIGTERM is sent
//! SIGKILL and reaped by the same task.

use std::time::Duration;

use nix::sys::signal::{self, Signal};
use nix::unistd::Pid as NixPid;
use tokio::process::{Child, Command};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::process::errors::ProcessError;
use crate::process::launcher::{Launcher, SpawnedHelper};
use crate::process::types::{ExitOutcome, HelperExit, SpawnId};

/// Time a helper gets to exit after SIGTERM before it is killed.
pub const DEFAULT_KILL_GRACE: Duration = Duration::from_secs(3);

pub struct SystemLauncher {
    exit_tx: mpsc::UnboundedSender<HelperExit>,
    kill_grace: Duration,
}

impl SystemLauncher {
    pub fn new(exit_tx: mpsc::UnboundedSender<HelperExit>) -> Self {
        Self {
            exit_tx,
            kill_grace: DEFAULT_KILL_GRACE,
        }
    }

    pub fn with_kill_grace(mut self, kill_grace: Duration) -> Self {
        self.kill_grace = kill_grace;
        self
    }

    pub fn kill_grace(&self) -> Duration {
        self.kill_grace
    }

    /// Create a launcher together with the receiver its exit notifications
    /// arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<HelperExit>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl Launcher for SystemLauncher {
    /// Must be called from within a tokio runtime.
    fn spawn(&mut self, spawn_id: SpawnId, argv: &[String]) -> Result<SpawnedHelper, ProcessError> {
        let (program, args) = argv.split_first().ok_or(ProcessError::EmptyCommand)?;

        let child = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ProcessError::SpawnFailed {
                program: program.clone(),
                message: e.to_string(),
            })?;

        let pid = child.id();
        let (terminate_tx, terminate_rx) = oneshot::channel();

        info!(
            event = "core.process.spawn_completed",
            spawn_id = spawn_id.as_u64(),
            pid = ?pid,
            program = program.as_str(),
        );

        tokio::spawn(supervise(
            spawn_id,
            child,
            terminate_rx,
            self.exit_tx.clone(),
            self.kill_grace,
        ));

        Ok(SpawnedHelper::supervised(spawn_id, pid, terminate_tx))
    }

    fn terminate(&mut self, helper: &mut SpawnedHelper) -> Result<(), ProcessError> {
        let spawn_id = helper.spawn_id().as_u64();
        let terminator = helper
            .take_terminator()
            .ok_or(ProcessError::NotSupervised { spawn_id })?;

        // The receiver is gone once the supervision task has finished, which
        // means the exit notification is already on its way.
        terminator
            .send(())
            .map_err(|_| ProcessError::NotSupervised { spawn_id })
    }
}

async fn supervise(
    spawn_id: SpawnId,
    mut child: Child,
    mut terminate_rx: oneshot::Receiver<()>,
    exit_tx: mpsc::UnboundedSender<HelperExit>,
    kill_grace: Duration,
) {
    let pid = child.id();

    let status = tokio::select! {
        status = child.wait() => status,
        request = &mut terminate_rx => {
            // A dropped handle is not a termination request
            if request.is_ok() {
                match send_sigterm(&child) {
                    Ok(()) => debug!(
                        event = "core.process.sigterm_sent",
                        spawn_id = spawn_id.as_u64(),
                        pid = ?pid,
                    ),
                    Err(e) => warn!(
                        event = "core.process.sigterm_failed",
                        spawn_id = spawn_id.as_u64(),
                        error = %e,
                    ),
                }
                wait_or_kill(spawn_id, &mut child, kill_grace).await
            } else {
                child.wait().await
            }
        }
    };

    let outcome = match status {
        Ok(status) => ExitOutcome::from(status),
        Err(e) => ExitOutcome::WaitFailed(e.to_string()),
    };

    info!(
        event = "core.process.exit_observed",
        spawn_id = spawn_id.as_u64(),
        pid = ?pid,
        outcome = %outcome,
    );

    if exit_tx
        .send(HelperExit {
            spawn_id,
            pid,
            outcome,
        })
        .is_err()
    {
        debug!(
            event = "core.process.exit_undelivered",
            spawn_id = spawn_id.as_u64(),
            "Exit receiver dropped before helper exited"
        );
    }
}

/// Wait up to `kill_grace` for a signalled child, then SIGKILL and reap it.
async fn wait_or_kill(
    spawn_id: SpawnId,
    child: &mut Child,
    kill_grace: Duration,
) -> std::io::Result<std::process::ExitStatus> {
    match tokio::time::timeout(kill_grace, child.wait()).await {
        Ok(status) => status,
        Err(_) => {
            warn!(
                event = "core.process.kill_started",
                spawn_id = spawn_id.as_u64(),
                pid = ?child.id(),
                grace_ms = kill_grace.as_millis() as u64,
                "Helper ignored SIGTERM"
            );
            child.kill().await?;
            child.wait().await
        }
    }
}

fn send_sigterm(child: &Child) -> Result<(), ProcessError> {
    let pid = child.id().ok_or(ProcessError::MissingPid)?;
    let raw = i32::try_from(pid).map_err(|_| ProcessError::InvalidPid { pid })?;

    signal::kill(NixPid::from_raw(raw), Signal::SIGTERM).map_err(|e| {
        ProcessError::SignalFailed {
            pid,
            message: e.to_string(),
        }
    })
}
