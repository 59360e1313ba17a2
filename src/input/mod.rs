//! Input handling and the drawing-tool state machine.
//!
//! This module translates pointer events into store commits and preview
//! geometry. All session state (active tool, colors, drag state, committed
//! shapes) lives in [`SketchState`], which is passed by reference to event
//! handlers rather than captured as ambient variables.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::MouseButton;
pub use state::{DrawingState, SketchState};
pub use tool::Tool;
