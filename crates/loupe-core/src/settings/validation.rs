//! Bounds checking for magnifier settings.
//!
//! Width, height and zoom outside their bounds are reset to the documented
//! default. The static window position is floored at zero and never reset.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::settings::defaults::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_ZOOM};
use crate::settings::types::{MagnifierSettings, Shape};

pub const ZOOM_BOUNDS: RangeInclusive<i32> = 2..=16;
pub const CIRCLE_WIDTH_BOUNDS: RangeInclusive<i32> = 100..=600;
pub const RECTANGLE_WIDTH_BOUNDS: RangeInclusive<i32> = 100..=800;
pub const HEIGHT_BOUNDS: RangeInclusive<i32> = 50..=600;

/// Width bounds depend on the lens shape.
pub fn width_bounds(shape: Shape) -> RangeInclusive<i32> {
    match shape {
        Shape::Circle => CIRCLE_WIDTH_BOUNDS,
        Shape::Rectangle => RECTANGLE_WIDTH_BOUNDS,
    }
}

fn in_bounds_or_default(
    field: &'static str,
    value: i32,
    bounds: RangeInclusive<i32>,
    default: i32,
) -> i32 {
    if bounds.contains(&value) {
        value
    } else {
        debug!(
            event = "core.settings.value_reset",
            field = field,
            value = value,
            low = bounds.start(),
            high = bounds.end(),
            default = default,
        );
        default
    }
}

impl MagnifierSettings {
    /// Correct out-of-range values in place.
    pub fn normalize(&mut self) {
        self.width = in_bounds_or_default(
            "width",
            self.width,
            width_bounds(self.shape),
            DEFAULT_WIDTH,
        );
        self.height = in_bounds_or_default("height", self.height, HEIGHT_BOUNDS, DEFAULT_HEIGHT);
        self.zoom = in_bounds_or_default("zoom", self.zoom, ZOOM_BOUNDS, DEFAULT_ZOOM);
        self.x = self.x.max(0);
        self.y = self.y.max(0);
    }

    /// Owned variant of [`MagnifierSettings::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Step zoom up by one, saturating at the upper bound.
    ///
    /// Returns whether the value changed.
    pub fn zoom_in(&mut self) -> bool {
        if self.zoom < *ZOOM_BOUNDS.end() {
            self.zoom += 1;
            true
        } else {
            false
        }
    }

    /// Step zoom down by one, saturating at the lower bound.
    ///
    /// Returns whether the value changed.
    pub fn zoom_out(&mut self) -> bool {
        if self.zoom > *ZOOM_BOUNDS.start() {
            self.zoom -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_resets_to_default_not_edge() {
        let settings = MagnifierSettings {
            shape: Shape::Circle,
            width: 700,
            height: 20,
            zoom: 17,
            ..MagnifierSettings::default()
        }
        .normalized();

        assert_eq!(settings.width, DEFAULT_WIDTH);
        assert_eq!(settings.height, DEFAULT_HEIGHT);
        assert_eq!(settings.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn test_width_bounds_follow_shape() {
        let rect = MagnifierSettings {
            shape: Shape::Rectangle,
            width: 700,
            ..MagnifierSettings::default()
        }
        .normalized();
        assert_eq!(rect.width, 700);

        let circle = MagnifierSettings {
            shape: Shape::Circle,
            width: 700,
            ..MagnifierSettings::default()
        }
        .normalized();
        assert_eq!(circle.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let settings = MagnifierSettings {
            shape: Shape::Rectangle,
            width: 800,
            height: 50,
            zoom: 16,
            ..MagnifierSettings::default()
        }
        .normalized();
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, 50);
        assert_eq!(settings.zoom, 16);

        let low = MagnifierSettings {
            width: 100,
            zoom: 2,
            height: 600,
            ..MagnifierSettings::default()
        }
        .normalized();
        assert_eq!(low.width, 100);
        assert_eq!(low.zoom, 2);
        assert_eq!(low.height, 600);
    }

    #[test]
    fn test_position_is_floored_not_reset() {
        let settings = MagnifierSettings {
            x: -5,
            y: 4000,
            ..MagnifierSettings::default()
        }
        .normalized();
        assert_eq!(settings.x, 0);
        assert_eq!(settings.y, 4000);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = MagnifierSettings {
            width: 1,
            zoom: 99,
            x: -1,
            ..MagnifierSettings::default()
        }
        .normalized();
        assert_eq!(once.clone().normalized(), once);
    }

    #[test]
    fn test_zoom_steps_saturate() {
        let mut settings = MagnifierSettings {
            zoom: 15,
            ..MagnifierSettings::default()
        };
        assert!(settings.zoom_in());
        assert_eq!(settings.zoom, 16);
        assert!(!settings.zoom_in());
        assert_eq!(settings.zoom, 16);

        settings.zoom = 3;
        assert!(settings.zoom_out());
        assert!(!settings.zoom_out());
        assert_eq!(settings.zoom, 2);
    }
}
