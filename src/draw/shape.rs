//! Shape definitions and their normalized vertex-run builders.

use super::color::Color;
use super::render::Topology;
use super::viewport::Viewport;
use crate::util;

/// Kind of committed shape.
///
/// The kind fixes both the primitive topology a shape is drawn with and the
/// number of vertex pairs it contributes to the shared vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Two-point straight segment (also used for pen and eraser strokes)
    Line,
    /// Equal-sided quad outline, closed by a duplicate first vertex
    Square,
    /// Axis-aligned quad outline, closed by a duplicate first vertex
    Rect,
}

impl ShapeKind {
    /// Number of (x, y) vertex pairs this kind stores in the vertex buffer.
    pub fn vertex_count(&self) -> usize {
        match self {
            ShapeKind::Line => 2,
            ShapeKind::Square | ShapeKind::Rect => 5,
        }
    }

    /// Primitive topology used to draw this kind.
    ///
    /// Square and rectangle runs both end on a duplicate of the first vertex,
    /// so a strip and a loop trace the same outline.
    pub fn topology(&self) -> Topology {
        match self {
            ShapeKind::Line => Topology::Lines,
            ShapeKind::Square => Topology::LineStrip,
            ShapeKind::Rect => Topology::LineLoop,
        }
    }
}

/// A committed shape: its kind plus the solid color it is drawn with.
///
/// The geometry itself lives in the store's shared vertex buffer, one
/// contiguous run per shape in commit order. Shapes are immutable once
/// committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Primitive kind, fixing topology and vertex count
    pub kind: ShapeKind,
    /// Uniform color for the whole primitive
    pub color: Color,
}

/// Builds the two-point vertex run for a straight segment.
pub fn line_vertices(viewport: Viewport, x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<f32> {
    let (ax, ay) = viewport.to_ndc(x1, y1);
    let (bx, by) = viewport.to_ndc(x2, y2);
    vec![ax, ay, bx, by]
}

/// Builds the five-point closed run for the square tool.
///
/// The drag is snapped to equal sides: the shorter of the two drag deltas
/// wins, and the corner direction follows the sign of each delta, so dragging
/// up-left or down-right produces the square on the correct side of the start
/// point.
pub fn square_vertices(viewport: Viewport, x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<f32> {
    let (cx, cy) = util::square_corner(x1, y1, x2, y2);
    quad_vertices(viewport, x1, y1, cx, cy)
}

/// Builds the five-point closed run for the rectangle tool.
pub fn rect_vertices(viewport: Viewport, x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<f32> {
    quad_vertices(viewport, x1, y1, x2, y2)
}

/// Outline through both corners, closed back onto the first vertex.
fn quad_vertices(viewport: Viewport, x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<f32> {
    let (ax, ay) = viewport.to_ndc(x1, y1);
    let (bx, by) = viewport.to_ndc(x2, y2);
    vec![ax, ay, bx, ay, bx, by, ax, by, ax, ay]
}
