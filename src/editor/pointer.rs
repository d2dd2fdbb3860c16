use crate::draw::{SurfaceError, render_shape, render_stroke_borrowed};
use crate::input::{PointerButton, Tool};

use super::core::ERASER_WIDTH_FACTOR;
use super::{Editor, StrokeState};

impl Editor {
    /// Processes a pointer button press event.
    ///
    /// # Arguments
    /// * `button` - Which pointer button was pressed
    /// * `x` - Pointer X coordinate
    /// * `y` - Pointer Y coordinate
    ///
    /// # Behavior
    /// - Left press while Idle: snapshots the surface and starts a stroke
    ///   session with the current tool and a copy of the current style
    /// - Left press while a session is active: ignored (at most one session)
    /// - Right press: cancels the stroke in progress
    pub fn on_pointer_press(
        &mut self,
        button: PointerButton,
        x: i32,
        y: i32,
    ) -> Result<(), SurfaceError> {
        match button {
            PointerButton::Left => {
                if matches!(self.state, StrokeState::Idle) {
                    let snapshot = self.surface.snapshot()?;
                    self.state = StrokeState::Active {
                        tool: self.current_tool,
                        style: self.current_style,
                        anchor: (x, y),
                        points: vec![(x, y)],
                        snapshot,
                    };
                    log::debug!("Started {:?} stroke at ({x}, {y})", self.current_tool);
                }
            }
            PointerButton::Right => {
                self.cancel_stroke()?;
            }
            PointerButton::Middle => {}
        }
        Ok(())
    }

    /// Processes pointer motion (dragging) events.
    ///
    /// # Arguments
    /// * `x` - Current pointer X coordinate
    /// * `y` - Current pointer Y coordinate
    ///
    /// # Behavior
    /// Restores the session snapshot (undoing the previous preview), then
    /// repaints the preview for the current pointer position. Freehand tools
    /// append the sample to their polyline first. Motion with no active
    /// session is a silent no-op, guarding against stray events before any
    /// press.
    pub fn on_pointer_motion(&mut self, x: i32, y: i32) -> Result<(), SurfaceError> {
        let StrokeState::Active { tool, points, .. } = &mut self.state else {
            return Ok(());
        };
        if tool.is_freehand() {
            points.push((x, y));
        }

        if let StrokeState::Active { snapshot, .. } = &self.state {
            self.surface.restore(snapshot)?;
        }
        self.render_preview(x, y)
    }

    /// Processes pointer button release events.
    ///
    /// # Arguments
    /// * `button` - Which pointer button was released
    ///
    /// # Behavior
    /// A left release while drawing commits the stroke: the buffer already
    /// holds the last preview, so this is a state transition only and the
    /// release coordinates are deliberately unused. The session snapshot is
    /// dropped here, ending its lifetime.
    pub fn on_pointer_release(&mut self, button: PointerButton, _x: i32, _y: i32) {
        if button != PointerButton::Left {
            return;
        }

        if let StrokeState::Active { tool, .. } = &self.state {
            log::debug!("Committed {tool:?} stroke");
            self.state = StrokeState::Idle;
        }
    }

    /// Paints the preview for the active session at the given pointer position.
    ///
    /// Freehand tools take a borrowed fast path to avoid cloning their points
    /// on every sample; shape tools render the provisional shape value.
    fn render_preview(&mut self, x: i32, y: i32) -> Result<(), SurfaceError> {
        let StrokeState::Active {
            tool,
            style,
            points,
            ..
        } = &self.state
        else {
            return Ok(());
        };

        match tool {
            Tool::Brush => {
                let (color, thick) = (style.stroke, style.width);
                self.surface
                    .with_context(|ctx| render_stroke_borrowed(ctx, points, color, thick))
            }
            Tool::Eraser => {
                let color = self.surface.background();
                let thick = style.width * ERASER_WIDTH_FACTOR;
                self.surface
                    .with_context(|ctx| render_stroke_borrowed(ctx, points, color, thick))
            }
            _ => match self.preview_shape(x, y) {
                Some(shape) => self.surface.with_context(|ctx| render_shape(ctx, &shape)),
                None => Ok(()),
            },
        }
    }
}
