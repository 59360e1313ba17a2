use log::warn;

use crate::draw::{Shape, ShapeKind, shape};
use crate::input::{events::MouseButton, tool::Tool};

use super::{DrawingState, SketchState};

impl SketchState {
    /// Processes a pointer button press.
    ///
    /// # Behavior
    /// - Left press while Idle: starts a gesture with the active tool,
    ///   recording the press position as the gesture anchor
    /// - Right press during a gesture: cancels it, discarding any
    ///   not-yet-committed geometry
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Left => {
                if matches!(self.state, DrawingState::Idle) {
                    self.state = DrawingState::Dragging {
                        tool: self.active_tool,
                        start_x: x,
                        start_y: y,
                        last_x: x,
                        last_y: y,
                    };
                    self.needs_redraw = true;
                }
            }
            MouseButton::Right => {
                if !matches!(self.state, DrawingState::Idle) {
                    self.state = DrawingState::Idle;
                    self.needs_redraw = true;
                }
            }
            _ => {}
        }
    }

    /// Processes pointer motion while dragging.
    ///
    /// # Behavior
    /// - Pen/Eraser: commits a segment from the previous position to the
    ///   current one on every event (the eraser strokes in the background
    ///   color)
    /// - Line/Square/Rect: only moves the live preview endpoint; nothing is
    ///   committed until release
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        let DrawingState::Dragging {
            tool,
            last_x,
            last_y,
            ..
        } = &mut self.state
        else {
            return;
        };

        if tool.is_continuous() {
            let color = if *tool == Tool::Eraser {
                self.background
            } else {
                self.current_color
            };
            let vertices = shape::line_vertices(self.viewport, *last_x, *last_y, x, y);
            let segment = Shape {
                kind: ShapeKind::Line,
                color,
            };
            if !self.store.try_append(segment, &vertices, self.max_shapes) {
                warn!(
                    "Shape limit ({}) reached; dropping stroke segment",
                    self.max_shapes
                );
            }
        }

        *last_x = x;
        *last_y = y;
        self.needs_redraw = true;
    }

    /// Processes a pointer button release.
    ///
    /// # Behavior
    /// When the left button is released during a gesture, the release-time
    /// tools compute their final geometry from start to release point and
    /// commit it as one shape. Pen and eraser have already committed their
    /// segments during motion. All tools return to Idle and mark the display
    /// for a full redraw.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }

        if let DrawingState::Dragging {
            tool,
            start_x,
            start_y,
            ..
        } = self.state
        {
            let committed = match tool {
                // Segments were committed continuously during motion
                Tool::Pen | Tool::Eraser => None,
                Tool::Line => Some((
                    ShapeKind::Line,
                    shape::line_vertices(self.viewport, start_x, start_y, x, y),
                )),
                Tool::Square => Some((
                    ShapeKind::Square,
                    shape::square_vertices(self.viewport, start_x, start_y, x, y),
                )),
                Tool::Rect => Some((
                    ShapeKind::Rect,
                    shape::rect_vertices(self.viewport, start_x, start_y, x, y),
                )),
            };

            if let Some((kind, vertices)) = committed {
                let shape = Shape {
                    kind,
                    color: self.current_color,
                };
                if !self.store.try_append(shape, &vertices, self.max_shapes) {
                    warn!(
                        "Shape limit ({}) reached; discarding new shape",
                        self.max_shapes
                    );
                }
            }

            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }
    }
}
