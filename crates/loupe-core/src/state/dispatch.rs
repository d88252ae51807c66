use tracing::{debug, error, info};

use crate::controller::ProcessController;
use crate::host::AppletHost;
use crate::process::Launcher;
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;

impl<L: Launcher, H: AppletHost> Store for ProcessController<L, H> {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        // Events left over from direct method calls belong to nobody
        self.clear_events();

        let result = match cmd {
            Command::Toggle => self.toggle().map_err(DispatchError::from),
            Command::ApplySettings { settings } => {
                self.apply_settings(settings);
                Ok(())
            }
            Command::ZoomIn => self.zoom_in().map(|_| ()).map_err(DispatchError::from),
            Command::ZoomOut => self.zoom_out().map(|_| ()).map_err(DispatchError::from),
            Command::RecordPosition => {
                self.record_position();
                Ok(())
            }
            Command::HelperExited { exit } => {
                self.on_process_exited(exit);
                Ok(())
            }
        };

        let events = self.take_events();

        match &result {
            Ok(()) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len()
            ),
            Err(e) => error!(event = "core.state.dispatch_failed", error = %e),
        }

        result.map(|()| events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::TerminationReason;
    use crate::errors::ConfigError;
    use crate::process::{ExitOutcome, HelperExit, ProcessError, SpawnId, SpawnedHelper};
    use crate::settings::{MagnifierSettings, Shape};

    struct StubLauncher {
        available: bool,
    }

    impl Launcher for StubLauncher {
        fn is_available(&self, _program: &str) -> bool {
            self.available
        }

        fn spawn(
            &mut self,
            spawn_id: SpawnId,
            _argv: &[String],
        ) -> Result<SpawnedHelper, ProcessError> {
            Ok(SpawnedHelper::new(spawn_id, Some(500)))
        }

        fn terminate(&mut self, _helper: &mut SpawnedHelper) -> Result<(), ProcessError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryHost {
        settings: MagnifierSettings,
    }

    impl AppletHost for MemoryHost {
        fn settings(&self) -> MagnifierSettings {
            self.settings.clone()
        }

        fn save_settings(&mut self, settings: &MagnifierSettings) -> Result<(), ConfigError> {
            self.settings = settings.clone();
            Ok(())
        }

        fn running_state_changed(&mut self, _running: bool) {}
    }

    fn store() -> ProcessController<StubLauncher, MemoryHost> {
        ProcessController::new(
            "mage",
            StubLauncher { available: true },
            MemoryHost::default(),
        )
    }

    #[test]
    fn test_toggle_emits_started_then_state_change() {
        let mut store = store();

        let events = store.dispatch(Command::Toggle).unwrap();

        assert_eq!(events.len(), 2);
        match &events[0] {
            Event::HelperStarted {
                spawn_id,
                pid,
                argv,
                ..
            } => {
                assert_eq!(*spawn_id, SpawnId::new(1));
                assert_eq!(*pid, Some(500));
                assert_eq!(argv, &vec!["mage", "-r", "350", "350", "-z", "2"]);
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(events[1], Event::RunningStateChanged { running: true });
    }

    #[test]
    fn test_settings_change_while_running_emits_restart_sequence() {
        let mut store = store();
        store.dispatch(Command::Toggle).unwrap();

        let settings = MagnifierSettings {
            shape: Shape::Circle,
            width: 200,
            ..MagnifierSettings::default()
        };
        let events = store
            .dispatch(Command::ApplySettings {
                settings: settings.clone(),
            })
            .unwrap();

        assert_eq!(
            events,
            vec![
                Event::SettingsApplied { settings },
                Event::RestartScheduled {
                    spawn_id: SpawnId::new(1)
                },
                Event::StopRequested {
                    spawn_id: SpawnId::new(1),
                    reason: TerminationReason::Restart,
                },
            ]
        );

        let events = store
            .dispatch(Command::HelperExited {
                exit: HelperExit {
                    spawn_id: SpawnId::new(1),
                    pid: Some(500),
                    outcome: ExitOutcome::Signal(15),
                },
            })
            .unwrap();

        assert!(matches!(events[0], Event::HelperExited { .. }));
        assert_eq!(events[1], Event::RunningStateChanged { running: false });
        assert!(matches!(
            events[2],
            Event::HelperStarted { spawn_id, .. } if spawn_id == SpawnId::new(2)
        ));
        assert_eq!(events[3], Event::RunningStateChanged { running: true });
    }

    #[test]
    fn test_unavailable_helper_is_dispatch_error() {
        let mut store = ProcessController::new(
            "mage",
            StubLauncher { available: false },
            MemoryHost::default(),
        );

        let result = store.dispatch(Command::Toggle);
        assert!(matches!(result, Err(DispatchError::Controller(_))));
    }

    #[test]
    fn test_noop_command_returns_no_events() {
        let mut store = store();
        let events = store.dispatch(Command::ZoomIn).unwrap();
        assert!(events.is_empty());
    }
}
