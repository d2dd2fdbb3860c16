//! Generic input event types for cross-host compatibility.

/// Pointer button identification.
///
/// Host frontends map their native button codes to these generic values
/// before forwarding events to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button (starts and commits strokes)
    Left,
    /// Secondary button (cancels the stroke in progress)
    Right,
    /// Middle button (currently unused)
    Middle,
}
