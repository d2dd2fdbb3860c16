//! Stroke-session state machine driving the drawing surface.
//!
//! The [`Editor`] owns the pixel buffer and the currently selected tool and
//! style. Pointer events move it between idle and an active stroke session;
//! each session snapshots the buffer once and repaints its preview on every
//! pointer sample.

mod core;
mod pointer;
mod preview;
#[cfg(test)]
mod tests;

pub use core::{ERASER_WIDTH_FACTOR, Editor, StrokeState};
