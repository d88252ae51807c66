//! loupe-core: Core library for screen magnifier helper lifecycle control
//!
//! This library decides when to launch the external magnifier helper, builds
//! its argument list from the current settings, observes its exit, and
//! restarts it when settings change while it is running. It is used by the
//! CLI front end, which plays the role of the panel applet.
//!
//! # Main Entry Points
//!
//! - [`controller`] - The toggle/restart state machine
//! - [`process`] - Argument construction and helper supervision
//! - [`settings`] - Magnifier display settings and their bounds
//! - [`config`] - Configuration management
//! - [`host`] - Collaborator contract and settings persistence

pub mod config;
pub mod controller;
pub mod errors;
pub mod events;
pub mod host;
pub mod logging;
pub mod process;
pub mod settings;
pub mod state;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::LoupeConfig;
pub use controller::{ControllerError, ControllerState, ProcessController, TerminationReason};
pub use host::{AppletHost, SettingsStore};
pub use process::{
    ExitOutcome, HelperExit, Launcher, ProcessError, SpawnId, SpawnedHelper, SystemLauncher,
    build_helper_argv,
};
pub use settings::{MagnifierSettings, Shape};
pub use state::{Command, Event, Store};
pub use window::{NullWindowQuery, WindowError, WindowQuery};

// Re-export logging initialization
pub use logging::init_logging;
