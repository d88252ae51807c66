use super::events::Event;
use super::types::Command;

/// Trait for dispatching controller commands.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received. There is no
///   queueing inside the store; a command that arrives mid-termination sees
///   the terminating state.
/// - **Events**: Each dispatch returns the events it caused, in order. A
///   command that changed nothing returns an empty vector.
/// - **Errors**: Only commands that cannot run at all fail. A helper that
///   fails to spawn is reported as events, not as an error.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
