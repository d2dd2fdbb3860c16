//! Pointer input primitives.
//!
//! This module defines the generic event vocabulary the editor consumes.
//! Host frontends (and the bundled script runner) map their native input
//! events onto these types; the editor never sees platform event structs.

pub mod events;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerButton;
pub use tool::Tool;
