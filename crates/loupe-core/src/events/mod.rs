//! Process-wide lifecycle events shared by every front end.

use std::error::Error;

use tracing::{error, info, warn};

use crate::controller::ControllerError;
use crate::errors::{ConfigError, LoupeError};
use crate::process::ProcessError;
use crate::state::{DispatchError, ParseCommandError};
use crate::window::WindowError;

pub fn log_app_startup(command: &str) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        command = command
    );
}

/// `reason` names what ended the session, e.g. `quit` or `SIGINT`.
pub fn log_app_shutdown(reason: &str) {
    info!(event = "core.app.shutdown_started", reason = reason);
}

/// Log a failed command. Loupe errors carry their code; user errors are
/// logged at warn level.
pub fn log_app_error(err: &(dyn Error + 'static)) {
    match as_loupe_error(err) {
        Some(e) if e.is_user_error() => warn!(
            event = "core.app.error_occurred",
            error = %err,
            error_code = e.error_code(),
            user_error = true
        ),
        Some(e) => error!(
            event = "core.app.error_occurred",
            error = %err,
            error_code = e.error_code(),
            user_error = false
        ),
        None => error!(
            event = "core.app.error_occurred",
            error = %err,
            error_type = std::any::type_name_of_val(err)
        ),
    }
}

fn as_loupe_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a dyn LoupeError> {
    if let Some(e) = err.downcast_ref::<ConfigError>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<ControllerError>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<DispatchError>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<ParseCommandError>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<ProcessError>() {
        return Some(e);
    }
    err.downcast_ref::<WindowError>().map(|e| e as &dyn LoupeError)
}
