//! The helper lifecycle state machine.
//!
//! Two states, `Stopped` and `Running`, plus a `pending_restart` flag. A
//! running helper is only ever stopped by sending it a termination request;
//! the transition to `Stopped` happens when its exit is observed. A settings
//! change while running schedules a restart that fires from the exit
//! handler, so there is never more than one helper per controller.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::ControllerError;
pub use handler::ProcessController;
pub use types::{ControllerState, TerminationReason};
