use crate::draw::{self, Color, ShapeKind, Surface, Topology, shape};
use crate::input::tool::Tool;

use super::{DrawingState, SketchState};

impl SketchState {
    /// Geometry for the shape currently being dragged, for live preview.
    ///
    /// # Returns
    /// The topology, normalized vertex run, and color of the preview
    /// primitive, or `None` when idle or when the tool commits continuously
    /// (pen and eraser strokes are already in the store).
    pub fn provisional_geometry(&self) -> Option<(Topology, Vec<f32>, Color)> {
        let DrawingState::Dragging {
            tool,
            start_x,
            start_y,
            last_x,
            last_y,
        } = self.state
        else {
            return None;
        };

        let (kind, vertices) = match tool {
            Tool::Pen | Tool::Eraser => return None,
            Tool::Line => (
                ShapeKind::Line,
                shape::line_vertices(self.viewport, start_x, start_y, last_x, last_y),
            ),
            Tool::Square => (
                ShapeKind::Square,
                shape::square_vertices(self.viewport, start_x, start_y, last_x, last_y),
            ),
            Tool::Rect => (
                ShapeKind::Rect,
                shape::rect_vertices(self.viewport, start_x, start_y, last_x, last_y),
            ),
        };

        Some((kind.topology(), vertices, self.current_color))
    }

    /// Renders the full session: background, committed shapes, live preview.
    ///
    /// Replays the entire store on every call, then overlays at most one
    /// preview primitive for a gesture in progress. Clears `needs_redraw`.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        draw::redraw_all(surface, &self.store, self.background);

        if let Some((topology, vertices, color)) = self.provisional_geometry() {
            draw::draw_preview(surface, topology, &vertices, color);
        }

        self.needs_redraw = false;
    }
}
