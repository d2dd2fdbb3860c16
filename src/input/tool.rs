//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines what shape is created when the user drags the
/// pointer. A closed enumeration: hosts select a tool, they never extend the
/// set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    Brush,
    /// Freehand erasing - paints the background color at double width
    Eraser,
    /// Axis-aligned rectangle - from corner to corner
    Rectangle,
    /// Circle - centered on the anchor, radius follows the pointer
    Circle,
    /// Isosceles triangle - apex at the anchor, base under the pointer
    Triangle,
}

impl Tool {
    /// Resolves a tool from its lowercase name, as used in configs and scripts.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "brush" => Some(Tool::Brush),
            "eraser" => Some(Tool::Eraser),
            "rectangle" => Some(Tool::Rectangle),
            "circle" => Some(Tool::Circle),
            "triangle" => Some(Tool::Triangle),
            _ => None,
        }
    }

    /// Whether this tool accumulates pointer samples into a polyline.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Brush | Tool::Eraser)
    }
}
