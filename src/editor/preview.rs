use crate::draw::Shape;
use crate::input::Tool;
use crate::util;

use super::core::ERASER_WIDTH_FACTOR;
use super::{Editor, StrokeState};

impl Editor {
    /// Returns the shape the active session would paint for a pointer at
    /// `(current_x, current_y)`.
    ///
    /// # Returns
    /// - `Some(Shape)` while a stroke session is active
    /// - `None` when idle
    ///
    /// # Note
    /// For freehand tools this clones the accumulated points; the pointer
    /// handlers render those through a borrowed fast path instead.
    pub fn preview_shape(&self, current_x: i32, current_y: i32) -> Option<Shape> {
        let StrokeState::Active {
            tool,
            style,
            anchor,
            points,
            ..
        } = &self.state
        else {
            return None;
        };

        let (anchor_x, anchor_y) = *anchor;
        match tool {
            Tool::Brush => Some(Shape::Stroke {
                points: points.clone(),
                color: style.stroke,
                thick: style.width,
            }),
            Tool::Eraser => Some(Shape::Stroke {
                points: points.clone(),
                color: self.surface.background(),
                thick: style.width * ERASER_WIDTH_FACTOR,
            }),
            Tool::Rectangle => {
                // Normalize to handle dragging in any direction
                let (x, y, w, h) =
                    util::normalized_rect(anchor_x, anchor_y, current_x, current_y);
                Some(Shape::Rect {
                    x,
                    y,
                    w,
                    h,
                    color: shape_color(style),
                    thick: style.width,
                    filled: style.filled,
                })
            }
            Tool::Circle => Some(Shape::Circle {
                cx: anchor_x,
                cy: anchor_y,
                radius: util::distance(anchor_x, anchor_y, current_x, current_y),
                color: shape_color(style),
                thick: style.width,
                filled: style.filled,
            }),
            Tool::Triangle => Some(Shape::Triangle {
                apex_x: anchor_x,
                apex_y: anchor_y,
                base_x: current_x,
                base_y: current_y,
                color: shape_color(style),
                thick: style.width,
                filled: style.filled,
            }),
        }
    }
}

fn shape_color(style: &crate::draw::Style) -> crate::draw::Color {
    if style.filled { style.fill } else { style.stroke }
}
