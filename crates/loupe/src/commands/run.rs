use std::io::BufRead;
use std::time::Duration;

use clap::ArgMatches;
use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info, warn};

use loupe_core::errors::ConfigError;
use loupe_core::state::DispatchError;
use loupe_core::{
    AppletHost, Command, Event, HelperExit, MagnifierSettings, ProcessController, SettingsStore,
    Store, SystemLauncher, events,
};

use super::{load_config_with_warning, open_settings_store};

/// How long to wait for the helper to exit after asking it to stop.
///
/// Longer than the launcher's kill grace, so a helper that ignores SIGTERM
/// is still killed and reaped before the CLI gives up.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

type CliController = ProcessController<SystemLauncher, CliHost>;

/// Host backed by the settings file, reporting state changes on stdout.
struct CliHost {
    store: SettingsStore,
    announce: bool,
    last_announced: Option<bool>,
}

impl CliHost {
    fn new(store: SettingsStore, announce: bool) -> Self {
        Self {
            store,
            announce,
            last_announced: None,
        }
    }
}

impl AppletHost for CliHost {
    fn settings(&self) -> MagnifierSettings {
        self.store.current().clone()
    }

    fn save_settings(&mut self, settings: &MagnifierSettings) -> Result<(), ConfigError> {
        self.store.save(settings)
    }

    fn running_state_changed(&mut self, running: bool) {
        if !self.announce || self.last_announced == Some(running) {
            return;
        }
        self.last_announced = Some(running);
        println!("magnifier: {}", if running { "on" } else { "off" });
    }
}

enum Flow {
    Continue,
    Quit,
}

pub(crate) fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let start = matches.get_flag("start");
    let json_output = matches.get_flag("json");

    let config = load_config_with_warning();
    let store = open_settings_store(&config)?;
    let program = config.helper_program().to_string();

    info!(
        event = "cli.run_started",
        program = program.as_str(),
        settings_path = %store.path().display(),
        start = start,
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_loop(program, store, start, json_output))
}

async fn run_loop(
    program: String,
    store: SettingsStore,
    start: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Registered before anything is spawned so an early signal is not lost
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let mut lines = spawn_stdin_reader()?;

    let (launcher, mut exits) = SystemLauncher::channel();
    let controller = ProcessController::new(program, launcher, CliHost::new(store, !json_output));
    #[cfg(feature = "xcap")]
    let controller = controller.with_window_query(loupe_core::window::XcapWindowQuery);
    let mut controller = controller;

    if !controller.is_available() {
        println!(
            "magnifier: unavailable ('{}' is not installed)",
            controller.program()
        );
    }

    if start {
        dispatch(&mut controller, Command::Toggle, json_output)?;
    }

    let reason = loop {
        tokio::select! {
            line = lines.recv() => match line {
                Some(Ok(line)) => {
                    if let Flow::Quit = handle_line(&mut controller, &line, json_output)? {
                        break "quit";
                    }
                }
                Some(Err(e)) => {
                    warn!(event = "cli.run.input_failed", error = %e);
                    break "input_failed";
                }
                None => {
                    info!(event = "cli.run.input_closed");
                    break "input_closed";
                }
            },
            Some(exit) = exits.recv() => {
                dispatch(&mut controller, Command::HelperExited { exit }, json_output)?;
            }
            _ = interrupt.recv() => break "SIGINT",
            _ = terminate.recv() => break "SIGTERM",
        }
    };

    events::log_app_shutdown(reason);
    stop_and_wait(&mut controller, &mut exits, json_output).await
}

/// Read stdin line by line on a detached thread that dies with the process.
///
/// Reads on the runtime's blocking pool cannot be cancelled and would hold
/// runtime shutdown hostage while stdin stays open. The channel closes on
/// end of input or after the first read error.
fn spawn_stdin_reader() -> std::io::Result<UnboundedReceiver<std::io::Result<String>>> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::Builder::new()
        .name("loupe-stdin".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
            debug!(event = "cli.run.stdin_reader_finished");
        })?;

    Ok(rx)
}

fn handle_line(
    controller: &mut CliController,
    line: &str,
    json_output: bool,
) -> Result<Flow, Box<dyn std::error::Error>> {
    let message = line.trim();

    match message {
        "" => {}
        "quit" => return Ok(Flow::Quit),
        "reload" => {
            let reloaded = controller.host_mut().store.reload().cloned();
            match reloaded {
                Ok(settings) => {
                    dispatch(controller, Command::ApplySettings { settings }, json_output)?
                }
                Err(e) => eprintln!("Could not reload settings: {}", e),
            }
        }
        other => match other.parse::<Command>() {
            Ok(command) => dispatch(controller, command, json_output)?,
            Err(e) => eprintln!("{}", e),
        },
    }

    Ok(Flow::Continue)
}

/// Dispatch a command, reporting refusals instead of failing the loop.
fn dispatch(
    controller: &mut CliController,
    command: Command,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match controller.dispatch(command) {
        Ok(events) => print_events(&events, json_output),
        Err(DispatchError::Controller(e)) => {
            eprintln!("{}", e);
            Ok(())
        }
    }
}

fn print_events(events: &[Event], json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    for event in events {
        if json_output {
            println!("{}", serde_json::to_string(event)?);
        } else if let Event::HelperSpawnFailed { message, .. } = event {
            eprintln!("Could not start magnifier: {}", message);
        }
    }
    Ok(())
}

/// Stop a running helper and wait, bounded, for its exit to be observed.
async fn stop_and_wait(
    controller: &mut CliController,
    exits: &mut UnboundedReceiver<HelperExit>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    controller.shutdown();
    print_events(&controller.take_events(), json_output)?;

    let wait = async {
        while controller.is_running() {
            let Some(exit) = exits.recv().await else {
                break;
            };
            dispatch(controller, Command::HelperExited { exit }, json_output)?;
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    };

    match tokio::time::timeout(SHUTDOWN_TIMEOUT, wait).await {
        Ok(result) => result?,
        Err(_) => warn!(
            event = "cli.run.shutdown_timed_out",
            timeout_secs = SHUTDOWN_TIMEOUT.as_secs(),
            "Helper did not exit in time, killing on runtime teardown"
        ),
    }

    info!(event = "cli.run_completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_announces_only_changes() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path().join("settings.toml")).unwrap();
        let mut host = CliHost::new(store, true);

        host.running_state_changed(true);
        assert_eq!(host.last_announced, Some(true));
        host.running_state_changed(false);
        host.running_state_changed(false);
        assert_eq!(host.last_announced, Some(false));
    }

    #[test]
    fn test_silent_host_tracks_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path().join("settings.toml")).unwrap();
        let mut host = CliHost::new(store, false);

        host.running_state_changed(true);
        assert_eq!(host.last_announced, None);
    }

    #[test]
    fn test_host_saves_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let store = SettingsStore::open(&path).unwrap();
        let mut host = CliHost::new(store, false);

        let settings = MagnifierSettings {
            zoom: 6,
            ..MagnifierSettings::default()
        };
        host.save_settings(&settings).unwrap();

        assert_eq!(host.settings().zoom, 6);
        assert_eq!(SettingsStore::open(&path).unwrap().current().zoom, 6);
    }
}
