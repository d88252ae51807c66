//! Default values for magnifier settings.
//!
//! These are the values a freshly installed applet starts with, and the
//! values an out-of-range setting is reset to.

use crate::settings::types::{MagnifierSettings, Shape};

pub const DEFAULT_WIDTH: i32 = 350;
pub const DEFAULT_HEIGHT: i32 = 350;
pub const DEFAULT_ZOOM: i32 = 2;

impl Default for MagnifierSettings {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            zoom: DEFAULT_ZOOM,
            static_window: false,
            x: 0,
            y: 0,
            follow_focus: false,
            follow_text_cursor: false,
            bilinear_filter: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_within_bounds() {
        let settings = MagnifierSettings::default();
        assert_eq!(settings.shape, Shape::Rectangle);
        assert_eq!(settings.clone().normalized(), settings);
    }
}
