//! Editor state and stroke session lifecycle.

use crate::config::{Config, ExportConfig};
use crate::draw::{Color, Snapshot, Style, Surface, SurfaceError};
use crate::export::{self, ExportError};
use crate::input::Tool;
use std::path::PathBuf;

/// Width multiplier applied to eraser strokes relative to the configured
/// brush width.
pub const ERASER_WIDTH_FACTOR: f64 = 2.0;

/// Current stroke session state machine.
///
/// Tracks whether the user is idle or actively dragging a stroke. State
/// transitions occur on pointer press and release events.
#[derive(Debug)]
pub enum StrokeState {
    /// Not actively drawing - waiting for pointer input
    Idle,
    /// Actively drawing a stroke (pointer button held down)
    Active {
        /// Which tool this session is using
        tool: Tool,
        /// Style copied from the editor when the session started
        style: Style,
        /// Where the pointer was pressed
        anchor: (i32, i32),
        /// Accumulated samples for freehand strokes (starts with the anchor)
        points: Vec<(i32, i32)>,
        /// Pre-stroke pixel copy; previews restore this before repainting
        snapshot: Snapshot,
    },
}

/// The drawing canvas and its interaction state.
///
/// Holds the retained surface, the pending tool/style selection, and the
/// stroke session state machine. All pointer handlers run to completion
/// synchronously; there is exactly one mutator of the surface at a time.
pub struct Editor {
    pub(super) surface: Surface,
    pub(super) current_tool: Tool,
    pub(super) current_style: Style,
    pub(super) state: StrokeState,
}

impl Editor {
    /// Creates an editor with a fresh surface and default tool selection.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, SurfaceError> {
        let surface = Surface::new(width, height, background)?;
        log::debug!("Created {width}x{height} canvas");
        Ok(Self {
            surface,
            current_tool: Tool::Brush,
            current_style: Style::default(),
            state: StrokeState::Idle,
        })
    }

    /// Creates an editor sized and styled from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Result<Self, SurfaceError> {
        let background = config.canvas.background.to_color();
        let mut editor = Self::new(config.canvas.width, config.canvas.height, background)?;
        let color = config.drawing.default_color.to_color();
        editor.current_tool = config.drawing.default_tool;
        editor.current_style = Style {
            stroke: color,
            fill: color,
            width: config.drawing.default_thickness,
            filled: config.drawing.default_fill,
        };
        Ok(editor)
    }

    /// Selects the tool used by the next stroke session.
    ///
    /// An active session keeps the tool it was started with.
    pub fn set_tool(&mut self, tool: Tool) {
        self.current_tool = tool;
        log::debug!("Selected {tool:?} tool");
    }

    /// Sets the color used by the next stroke session.
    ///
    /// Drives both the outline and the interior color, matching a single
    /// palette selection.
    pub fn set_color(&mut self, color: Color) {
        self.current_style.stroke = color;
        self.current_style.fill = color;
    }

    /// Sets the brush width used by the next stroke session.
    pub fn set_thickness(&mut self, width: f64) {
        self.current_style.width = width;
    }

    /// Switches shape tools between outline and filled rendering.
    pub fn set_filled(&mut self, filled: bool) {
        self.current_style.filled = filled;
    }

    /// The tool the next session will use.
    pub fn current_tool(&self) -> Tool {
        self.current_tool
    }

    /// The style the next session will copy.
    pub fn current_style(&self) -> Style {
        self.current_style
    }

    /// Whether a stroke session is currently active.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Active { .. })
    }

    /// The underlying drawing surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable access to the surface, for readback and direct painting.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Discards the stroke in progress, rewinding to the pre-stroke pixels.
    pub fn cancel_stroke(&mut self) -> Result<(), SurfaceError> {
        let state = std::mem::replace(&mut self.state, StrokeState::Idle);
        if let StrokeState::Active { snapshot, .. } = state {
            self.surface.restore(&snapshot)?;
            log::debug!("Cancelled stroke in progress");
        }
        Ok(())
    }

    /// Resets the whole canvas to the background color.
    ///
    /// Any stroke in progress is dropped along with its snapshot, which
    /// holds pre-clear pixels and must not be restored afterwards.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        if self.is_drawing() {
            self.state = StrokeState::Idle;
        }
        self.surface.clear()?;
        log::debug!("Cleared canvas");
        Ok(())
    }

    /// Encodes the current canvas and saves it per the export settings.
    ///
    /// Returns the path of the written file.
    pub fn export(&mut self, config: &ExportConfig) -> Result<PathBuf, ExportError> {
        export::export_surface(&mut self.surface, config)
    }
}
