//! Drawing state machine and session state.

use crate::draw::{Color, ShapeStore, Viewport, color};
use crate::input::tool::Tool;
use crate::util;

/// Per-gesture drag state machine.
///
/// Lives between pointer-down and pointer-up. A gesture either commits once at
/// release (line, square, rectangle) or streams segment commits during motion
/// (pen, eraser). There is no terminal state; the machine runs for the
/// lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not dragging - waiting for a pointer press
    Idle,
    /// Pointer held down, gesture in progress
    Dragging {
        /// Tool captured at press time; switching tools mid-drag does not
        /// affect the gesture in progress
        tool: Tool,
        /// Press X coordinate (anchor for line/square/rect geometry)
        start_x: i32,
        /// Press Y coordinate
        start_y: i32,
        /// Most recent pointer X (segment tail for pen/eraser, live preview
        /// endpoint for the other tools)
        last_x: i32,
        /// Most recent pointer Y
        last_y: i32,
    },
}

/// All session state for one drawing surface.
///
/// Owns the committed shape store, the active tool and colors, and the drag
/// state machine. Event handlers mutate this through `&mut` rather than
/// ambient globals, so multiple sessions can coexist.
pub struct SketchState {
    /// Committed shapes plus their flattened vertex runs
    pub store: ShapeStore,
    /// Pixel dimensions used for normalized-coordinate conversion
    pub viewport: Viewport,
    /// Color applied to newly committed shapes
    pub current_color: Color,
    /// Canvas background; also the eraser stroke color
    pub background: Color,
    /// Tool used for the next gesture
    pub active_tool: Tool,
    /// Drag state machine
    pub state: DrawingState,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Maximum committed shapes (0 = unlimited)
    pub max_shapes: usize,
}

impl SketchState {
    /// Creates session state with explicit defaults.
    pub fn with_defaults(
        viewport: Viewport,
        color: Color,
        background: Color,
        tool: Tool,
        max_shapes: usize,
    ) -> Self {
        Self {
            store: ShapeStore::new(),
            viewport,
            current_color: color,
            background,
            active_tool: tool,
            state: DrawingState::Idle,
            needs_redraw: true,
            max_shapes,
        }
    }

    /// Creates session state with the stock defaults: red pen on white.
    #[allow(dead_code)]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_defaults(
            Viewport::new(width, height),
            color::RED,
            color::WHITE,
            Tool::Pen,
            0,
        )
    }

    /// Selects the active tool; takes effect on the next gesture.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.active_tool != tool {
            log::debug!("Tool switched to {tool:?}");
            self.active_tool = tool;
        }
    }

    /// Sets the drawing color directly.
    #[allow(dead_code)]
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Sets the drawing color from a color name or 6-hex-digit string.
    ///
    /// Malformed input is non-fatal: a warning is logged and the current color
    /// is kept, so subsequent draws simply use the previous color.
    pub fn set_color_spec(&mut self, spec: &str) {
        match util::parse_color(spec) {
            Some(color) => {
                log::debug!("Color set to {} ({spec})", util::color_to_name(&color));
                self.current_color = color;
            }
            None => log::warn!("Ignoring malformed color '{spec}'"),
        }
    }

    /// Empties the shape store and aborts any gesture in progress.
    ///
    /// The next render clears the surface and replays nothing.
    pub fn clear_canvas(&mut self) {
        self.store.clear();
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
    }

    /// Removes the most recently committed shape, if any.
    pub fn undo(&mut self) -> bool {
        let undone = self.store.undo().is_some();
        if undone {
            self.needs_redraw = true;
        }
        undone
    }
}
