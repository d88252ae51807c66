use tracing::{debug, error, info, warn};

use crate::controller::errors::ControllerError;
use crate::controller::types::{ControllerState, TerminationReason};
use crate::host::AppletHost;
use crate::process::{HelperExit, Launcher, SpawnId, SpawnedHelper, build_helper_argv};
use crate::settings::MagnifierSettings;
use crate::state::Event;
use crate::window::{NullWindowQuery, WindowQuery};

enum Phase {
    Unavailable,
    Stopped,
    Running {
        helper: SpawnedHelper,
        terminating: Option<TerminationReason>,
    },
}

/// Owns the magnifier helper process and its toggle state.
///
/// All methods are meant to be called from one owning task. Exit
/// notifications produced elsewhere (see [`crate::process::SystemLauncher`])
/// must be marshaled onto that task and fed to
/// [`ProcessController::on_process_exited`].
///
/// Invariants:
/// - a helper handle exists if and only if the state is running
/// - `pending_restart` is only ever set while running
/// - at most one termination request is sent per helper
pub struct ProcessController<L: Launcher, H: AppletHost> {
    program: String,
    launcher: L,
    host: H,
    window_query: Box<dyn WindowQuery>,
    phase: Phase,
    pending_restart: bool,
    next_spawn_id: SpawnId,
    events: Vec<Event>,
}

impl<L: Launcher, H: AppletHost> ProcessController<L, H> {
    /// Create a controller for `program`.
    ///
    /// Never fails: a helper that cannot be found leaves the controller in
    /// [`ControllerState::Unavailable`].
    pub fn new(program: impl Into<String>, launcher: L, host: H) -> Self {
        let program = program.into();

        let phase = if launcher.is_available(&program) {
            Phase::Stopped
        } else {
            warn!(
                event = "core.controller.helper_unavailable",
                program = program.as_str(),
                "Magnifier helper not found, toggling disabled"
            );
            Phase::Unavailable
        };

        info!(
            event = "core.controller.created",
            program = program.as_str(),
            available = matches!(phase, Phase::Stopped),
        );

        Self {
            program,
            launcher,
            host,
            window_query: Box::new(NullWindowQuery),
            phase,
            pending_restart: false,
            next_spawn_id: SpawnId::new(1),
            events: Vec::new(),
        }
    }

    /// Use `query` for [`ProcessController::record_position`].
    pub fn with_window_query(mut self, query: impl WindowQuery + 'static) -> Self {
        self.window_query = Box::new(query);
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn state(&self) -> ControllerState {
        match &self.phase {
            Phase::Unavailable => ControllerState::Unavailable,
            Phase::Stopped => ControllerState::Stopped,
            Phase::Running {
                helper,
                terminating,
            } => ControllerState::Running {
                spawn_id: helper.spawn_id(),
                pid: helper.pid(),
                terminating: *terminating,
            },
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.phase, Phase::Unavailable)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn pending_restart(&self) -> bool {
        self.pending_restart
    }

    /// Drain the events recorded since the last drain.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Start the helper if stopped, ask it to terminate if running.
    ///
    /// Ignored while a termination request is already in flight.
    pub fn toggle(&mut self) -> Result<(), ControllerError> {
        match &self.phase {
            Phase::Unavailable => Err(ControllerError::HelperUnavailable {
                program: self.program.clone(),
            }),
            Phase::Stopped => {
                self.start_helper();
                Ok(())
            }
            Phase::Running {
                helper,
                terminating: Some(reason),
            } => {
                debug!(
                    event = "core.controller.toggle_ignored",
                    spawn_id = helper.spawn_id().as_u64(),
                    awaiting = ?reason,
                    "Termination already requested, waiting for exit"
                );
                Ok(())
            }
            Phase::Running {
                terminating: None, ..
            } => {
                self.request_termination(TerminationReason::UserStop);
                // Optimistic: the exit handler reconciles the final state
                self.notify_running(false);
                Ok(())
            }
        }
    }

    /// Apply new settings: normalize, persist, and restart a running helper.
    pub fn apply_settings(&mut self, settings: MagnifierSettings) {
        let settings = settings.normalized();

        if let Err(e) = self.host.save_settings(&settings) {
            error!(
                event = "core.controller.settings_save_failed",
                error = %e
            );
        }
        self.events.push(Event::SettingsApplied {
            settings: settings.clone(),
        });

        info!(
            event = "core.controller.settings_applied",
            shape = %settings.shape,
            width = settings.width,
            height = settings.height,
            zoom = settings.zoom,
        );

        match &self.phase {
            Phase::Running {
                helper,
                terminating: None,
            } => {
                let spawn_id = helper.spawn_id();
                self.pending_restart = true;
                self.events.push(Event::RestartScheduled { spawn_id });
                self.request_termination(TerminationReason::Restart);
            }
            Phase::Running {
                terminating: Some(TerminationReason::Restart),
                ..
            } => {
                debug!(event = "core.controller.restart_already_pending");
            }
            Phase::Running {
                terminating: Some(TerminationReason::UserStop),
                ..
            } => {
                debug!(
                    event = "core.controller.restart_suppressed",
                    "Helper is stopping at the user's request, not restarting"
                );
            }
            Phase::Stopped | Phase::Unavailable => {}
        }
    }

    /// Handle the exit of a spawned helper.
    ///
    /// Notifications for any spawn other than the current one are ignored.
    pub fn on_process_exited(&mut self, exit: HelperExit) {
        let current = match &self.phase {
            Phase::Running { helper, .. } => Some(helper.spawn_id()),
            Phase::Stopped | Phase::Unavailable => None,
        };

        if current != Some(exit.spawn_id) {
            warn!(
                event = "core.controller.stale_exit_ignored",
                spawn_id = exit.spawn_id.as_u64(),
                current = ?current.map(|id| id.as_u64()),
            );
            return;
        }

        self.finish_helper(exit);
    }

    /// Raise zoom by one step and restart the helper with it.
    ///
    /// Only acts while the helper is running. Returns whether zoom changed.
    pub fn zoom_in(&mut self) -> Result<bool, ControllerError> {
        self.step_zoom(MagnifierSettings::zoom_in)
    }

    /// Lower zoom by one step and restart the helper with it.
    pub fn zoom_out(&mut self) -> Result<bool, ControllerError> {
        self.step_zoom(MagnifierSettings::zoom_out)
    }

    fn step_zoom(
        &mut self,
        step: fn(&mut MagnifierSettings) -> bool,
    ) -> Result<bool, ControllerError> {
        match self.phase {
            Phase::Unavailable => {
                return Err(ControllerError::HelperUnavailable {
                    program: self.program.clone(),
                });
            }
            Phase::Stopped => return Ok(false),
            Phase::Running { .. } => {}
        }

        let mut settings = self.host.settings().normalized();
        if !step(&mut settings) {
            return Ok(false);
        }

        self.apply_settings(settings);
        Ok(true)
    }

    /// Store the top-most window's position as the static window position.
    ///
    /// Does not restart the helper. A failed query leaves settings unchanged.
    pub fn record_position(&mut self) -> bool {
        let (x, y) = match self.window_query.topmost_window_position() {
            Ok(position) => position,
            Err(e) => {
                warn!(
                    event = "core.controller.position_query_failed",
                    error = %e
                );
                return false;
            }
        };

        let mut settings = self.host.settings();
        settings.x = x;
        settings.y = y;
        let settings = settings.normalized();

        if let Err(e) = self.host.save_settings(&settings) {
            error!(
                event = "core.controller.settings_save_failed",
                error = %e
            );
        }

        info!(
            event = "core.controller.position_recorded",
            x = settings.x,
            y = settings.y
        );
        self.events.push(Event::PositionRecorded {
            x: settings.x,
            y: settings.y,
        });
        true
    }

    /// Cancel any pending restart and ask a running helper to terminate.
    pub fn shutdown(&mut self) {
        self.pending_restart = false;
        if self.is_running() {
            info!(event = "core.controller.shutdown_terminating");
            self.request_termination(TerminationReason::UserStop);
        }
    }

    fn start_helper(&mut self) {
        let settings = self.host.settings().normalized();
        let argv = build_helper_argv(&self.program, &settings);

        let spawn_id = self.next_spawn_id;
        self.next_spawn_id = spawn_id.next();

        info!(
            event = "core.controller.start_started",
            spawn_id = spawn_id.as_u64(),
            argv = ?argv,
        );

        match self.launcher.spawn(spawn_id, &argv) {
            Ok(helper) => {
                let pid = helper.pid();
                self.phase = Phase::Running {
                    helper,
                    terminating: None,
                };
                self.events.push(Event::HelperStarted {
                    spawn_id,
                    pid,
                    argv,
                    started_at: chrono::Utc::now(),
                });
                info!(
                    event = "core.controller.start_completed",
                    spawn_id = spawn_id.as_u64(),
                    pid = ?pid,
                );
                self.notify_running(true);
            }
            Err(e) => {
                error!(
                    event = "core.controller.start_failed",
                    spawn_id = spawn_id.as_u64(),
                    error = %e
                );
                self.events.push(Event::HelperSpawnFailed {
                    spawn_id,
                    message: e.to_string(),
                });
                // Reported through the same path as a real exit
                self.finish_helper(HelperExit::spawn_failed(spawn_id, e.to_string()));
            }
        }
    }

    fn finish_helper(&mut self, exit: HelperExit) {
        let requested = match std::mem::replace(&mut self.phase, Phase::Stopped) {
            Phase::Running { terminating, .. } => terminating,
            Phase::Stopped | Phase::Unavailable => None,
        };

        info!(
            event = "core.controller.helper_exited",
            spawn_id = exit.spawn_id.as_u64(),
            pid = ?exit.pid,
            outcome = %exit.outcome,
            requested_by = ?requested,
        );

        self.events.push(Event::HelperExited {
            spawn_id: exit.spawn_id,
            pid: exit.pid,
            outcome: exit.outcome,
        });
        self.notify_running(false);

        if std::mem::take(&mut self.pending_restart) {
            info!(
                event = "core.controller.restart_started",
                previous_spawn_id = exit.spawn_id.as_u64(),
            );
            self.start_helper();
        }
    }

    fn request_termination(&mut self, reason: TerminationReason) {
        let Phase::Running {
            helper,
            terminating,
        } = &mut self.phase
        else {
            return;
        };

        if terminating.is_some() {
            return;
        }
        *terminating = Some(reason);

        let spawn_id = helper.spawn_id();
        match self.launcher.terminate(helper) {
            Ok(()) => info!(
                event = "core.controller.stop_requested",
                spawn_id = spawn_id.as_u64(),
                reason = ?reason,
            ),
            // The exit notification still arrives; nothing else to do
            Err(e) => warn!(
                event = "core.controller.stop_request_failed",
                spawn_id = spawn_id.as_u64(),
                error = %e,
            ),
        }

        self.events.push(Event::StopRequested { spawn_id, reason });
    }

    fn notify_running(&mut self, running: bool) {
        self.host.running_state_changed(running);
        self.events.push(Event::RunningStateChanged { running });
    }
}

impl<L: Launcher, H: AppletHost> Drop for ProcessController<L, H> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
