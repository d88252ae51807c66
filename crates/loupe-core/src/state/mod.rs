//! Command/event layer over the controller.
//!
//! Front ends turn user input into [`Command`]s and react to the [`Event`]s
//! each dispatch returns, instead of calling controller methods directly.

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod store;
pub mod types;

pub use errors::{DispatchError, ParseCommandError};
pub use events::Event;
pub use store::Store;
pub use types::Command;
