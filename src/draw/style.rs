//! Stroke styling parameters.

use super::color::{BLACK, Color};

/// Styling applied to a single stroke session.
///
/// The editor keeps one mutable `Style` that the host mutates between
/// sessions (palette clicks, slider changes). When a session starts the
/// editor copies the value into the session, so mid-stroke selection changes
/// never affect the shape being drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Outline color for strokes and unfilled shapes
    pub stroke: Color,
    /// Interior color for filled shapes
    pub fill: Color,
    /// Line thickness in pixels
    pub width: f64,
    /// Whether shape tools paint the interior instead of the outline
    pub filled: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: BLACK,
            fill: BLACK,
            width: 5.0,
            filled: false,
        }
    }
}
