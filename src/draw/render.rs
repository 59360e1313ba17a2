//! Primitive-level rendering: the surface seam, preview draws, and full replay.

use super::color::Color;
use super::store::ShapeStore;

/// Fixed topology of a single primitive draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Independent segments: every consecutive vertex pair is one line
    Lines,
    /// Connected strip through all vertices
    LineStrip,
    /// Connected strip closed back to the first vertex
    LineLoop,
}

/// Rendering target accepting solid-color line primitives in normalized space.
///
/// Vertices are interleaved (x, y) pairs in [-1, 1]. Every call draws with a
/// single uniform color. This is the seam between the drawing core and a
/// concrete backend (raster surface, recording surface, ...).
pub trait Surface {
    /// Fills the whole surface with `color`, discarding prior drawing.
    fn clear(&mut self, color: Color);

    /// Issues one primitive draw call.
    fn draw_primitive(&mut self, topology: Topology, vertices: &[f32], color: Color);
}

/// Draws one transient primitive for interactive feedback.
///
/// Does not touch the shape store; the preview disappears on the next full
/// replay.
pub fn draw_preview(surface: &mut dyn Surface, topology: Topology, vertices: &[f32], color: Color) {
    surface.draw_primitive(topology, vertices, color);
}

/// Clears the surface, then replays every committed shape in insertion order.
///
/// Walks a running offset into the shared vertex buffer so each shape draws
/// from its own contiguous run: committing N shapes yields exactly N primitive
/// calls, each with the vertex count fixed by its kind.
pub fn redraw_all(surface: &mut dyn Surface, store: &ShapeStore, background: Color) {
    surface.clear(background);

    let vertices = store.vertices();
    let mut offset = 0;
    for shape in store.shapes() {
        let len = shape.kind.vertex_count() * 2;
        surface.draw_primitive(shape.kind.topology(), &vertices[offset..offset + len], shape.color);
        offset += len;
    }
}

/// One recorded primitive draw call.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveCall {
    /// Topology the call was issued with
    pub topology: Topology,
    /// Copy of the vertex run
    pub vertices: Vec<f32>,
    /// Uniform draw color
    pub color: Color,
}

/// Surface that records the calls it receives instead of rasterizing them.
///
/// A `clear` wipes previously recorded primitives, mirroring what a real
/// surface displays. Used by tests to assert on primitive sequences and usable
/// for dry runs.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Every clear color received, in order
    pub clears: Vec<Color>,
    /// Primitives drawn since the most recent clear
    pub calls: Vec<PrimitiveCall>,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.clears.push(color);
        self.calls.clear();
    }

    fn draw_primitive(&mut self, topology: Topology, vertices: &[f32], color: Color) {
        self.calls.push(PrimitiveCall {
            topology,
            vertices: vertices.to_vec(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED, WHITE};
    use crate::draw::shape::{Shape, ShapeKind};

    fn store_with_line_and_rect() -> ShapeStore {
        let mut store = ShapeStore::new();
        store.append(
            Shape {
                kind: ShapeKind::Line,
                color: RED,
            },
            &[-0.5, -0.5, 0.5, 0.5],
        );
        store.append(
            Shape {
                kind: ShapeKind::Rect,
                color: BLUE,
            },
            &[0.0, 0.0, 0.4, 0.0, 0.4, 0.4, 0.0, 0.4, 0.0, 0.0],
        );
        store
    }

    #[test]
    fn replay_issues_one_call_per_shape_with_kind_vertex_count() {
        let store = store_with_line_and_rect();
        let mut surface = RecordingSurface::new();

        redraw_all(&mut surface, &store, WHITE);

        assert_eq!(surface.clears, vec![WHITE]);
        assert_eq!(surface.calls.len(), 2);
        assert_eq!(surface.calls[0].topology, Topology::Lines);
        assert_eq!(surface.calls[0].vertices.len(), 2 * 2);
        assert_eq!(surface.calls[1].topology, Topology::LineLoop);
        assert_eq!(surface.calls[1].vertices.len(), 5 * 2);
    }

    #[test]
    fn replay_slices_each_run_from_its_offset() {
        let store = store_with_line_and_rect();
        let mut surface = RecordingSurface::new();

        redraw_all(&mut surface, &store, WHITE);

        assert_eq!(surface.calls[0].vertices, vec![-0.5, -0.5, 0.5, 0.5]);
        assert_eq!(surface.calls[0].color, RED);
        assert_eq!(
            surface.calls[1].vertices,
            vec![0.0, 0.0, 0.4, 0.0, 0.4, 0.4, 0.0, 0.4, 0.0, 0.0]
        );
        assert_eq!(surface.calls[1].color, BLUE);
    }

    #[test]
    fn replay_after_clear_issues_zero_calls() {
        let mut store = store_with_line_and_rect();
        store.clear();

        let mut surface = RecordingSurface::new();
        redraw_all(&mut surface, &store, WHITE);

        assert!(store.is_empty());
        assert!(surface.calls.is_empty());
        assert_eq!(surface.clears.len(), 1);
    }

    #[test]
    fn replay_is_idempotent_without_new_commits() {
        let store = store_with_line_and_rect();
        let mut surface = RecordingSurface::new();

        redraw_all(&mut surface, &store, WHITE);
        let first_pass = surface.calls.clone();

        redraw_all(&mut surface, &store, WHITE);
        assert_eq!(surface.calls, first_pass);
    }

    #[test]
    fn preview_draw_does_not_touch_the_store() {
        let store = ShapeStore::new();
        let mut surface = RecordingSurface::new();

        draw_preview(&mut surface, Topology::Lines, &[0.0, 0.0, 0.1, 0.1], RED);

        assert!(store.is_empty());
        assert_eq!(surface.calls.len(), 1);
    }
}
