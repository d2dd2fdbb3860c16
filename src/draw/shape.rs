//! Shape definitions for canvas drawing.

use super::color::Color;

/// Represents a drawable primitive on the canvas.
///
/// Each variant corresponds to one drawing tool and carries the full set of
/// parameters needed to paint it, so a shape renders identically whether it
/// is a live preview or the committed result of a stroke.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Polyline connecting pointer drag samples.
    ///
    /// Both the brush and the eraser produce this variant; eraser strokes
    /// simply carry the surface background color and a doubled width.
    Stroke {
        /// Sequence of (x, y) coordinates traced by the pointer
        points: Vec<(i32, i32)>,
        /// Stroke color
        color: Color,
        /// Line thickness in pixels
        thick: f64,
    },
    /// Axis-aligned rectangle between two drag corners
    Rect {
        /// Top-left X coordinate
        x: i32,
        /// Top-left Y coordinate
        y: i32,
        /// Width in pixels (non-negative)
        w: i32,
        /// Height in pixels (non-negative)
        h: i32,
        /// Outline or interior color
        color: Color,
        /// Border thickness in pixels
        thick: f64,
        /// Paint the interior instead of the outline
        filled: bool,
    },
    /// Circle centered on the drag anchor
    Circle {
        /// Center X coordinate
        cx: i32,
        /// Center Y coordinate
        cy: i32,
        /// Radius in pixels: the anchor-to-pointer distance
        radius: f64,
        /// Outline or interior color
        color: Color,
        /// Border thickness in pixels
        thick: f64,
        /// Paint the interior instead of the outline
        filled: bool,
    },
    /// Isosceles triangle with its apex at the drag anchor.
    ///
    /// The second base vertex is derived at render time by reflecting
    /// `base_x` across the vertical line through the apex.
    Triangle {
        /// Apex X coordinate
        apex_x: i32,
        /// Apex Y coordinate
        apex_y: i32,
        /// First base vertex X coordinate
        base_x: i32,
        /// Base Y coordinate (shared by both base vertices)
        base_y: i32,
        /// Outline or interior color
        color: Color,
        /// Border thickness in pixels
        thick: f64,
        /// Paint the interior instead of the outline
        filled: bool,
    },
}
