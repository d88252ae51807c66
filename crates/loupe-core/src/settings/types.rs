use serde::{Deserialize, Serialize};

/// Lens shape of the magnifier window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    #[default]
    Rectangle,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Circle => write!(f, "circle"),
            Shape::Rectangle => write!(f, "rectangle"),
        }
    }
}

impl std::str::FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "circle" => Ok(Shape::Circle),
            "rectangle" | "rect" => Ok(Shape::Rectangle),
            other => Err(format!(
                "Invalid shape '{}'. Valid options: circle, rectangle",
                other
            )),
        }
    }
}

/// Display settings for the magnifier helper.
///
/// Owned by the host; the controller reads it before every spawn and writes
/// it back after normalizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnifierSettings {
    pub shape: Shape,
    /// Lens width in pixels (diameter for a circle).
    pub width: i32,
    /// Lens height in pixels. Only used by [`Shape::Rectangle`].
    pub height: i32,
    pub zoom: i32,
    /// Anchor the lens at (`x`, `y`) instead of following the pointer.
    pub static_window: bool,
    pub x: i32,
    pub y: i32,
    pub follow_focus: bool,
    pub follow_text_cursor: bool,
    pub bilinear_filter: bool,
}
