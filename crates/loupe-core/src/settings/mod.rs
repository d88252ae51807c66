//! # Magnifier Settings
//!
//! The display options handed to the magnifier helper: lens shape and size,
//! zoom factor, optional static window position, tracking modes and
//! filtering.
//!
//! Every numeric field has documented bounds. Out-of-range values are not
//! clamped to the nearest edge; they fall back to the field's default. The
//! static window position is the exception and is only floored at zero.
//!
//! ```toml
//! # ~/.loupe/settings.toml
//! shape = "circle"
//! width = 350
//! zoom = 4
//! static_window = false
//! follow_focus = true
//! ```

pub mod defaults;
pub mod types;
pub mod validation;

pub use types::{MagnifierSettings, Shape};
pub use validation::{
    CIRCLE_WIDTH_BOUNDS, HEIGHT_BOUNDS, RECTANGLE_WIDTH_BOUNDS, ZOOM_BOUNDS, width_bounds,
};
