pub mod errors;
pub mod launcher;
pub mod operations;
pub mod system;
pub mod types;

pub use errors::ProcessError;
pub use launcher::{Launcher, SpawnedHelper};
pub use operations::{build_helper_argv, helper_available};
pub use system::{DEFAULT_KILL_GRACE, SystemLauncher};
pub use types::{ExitOutcome, HelperExit, SpawnId};
