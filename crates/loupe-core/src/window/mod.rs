//! On-screen position lookup for the magnifier window.
//!
//! The helper draws its own window, so the only way to learn where a static
//! lens ended up is to ask the window system. The lens is the top-most
//! window right after it has been moved.

pub mod errors;
pub mod handler;

pub use errors::WindowError;
pub use handler::NullWindowQuery;
#[cfg(feature = "xcap")]
pub use handler::XcapWindowQuery;

/// Source of the top-most window's position.
pub trait WindowQuery {
    /// Screen coordinates of the top-left corner of the top-most window.
    fn topmost_window_position(&self) -> Result<(i32, i32), WindowError>;
}
