//! Append-only store for committed shapes and their vertex runs.

use super::shape::Shape;

/// Ordered collection of committed shapes plus the flattened vertex buffer.
///
/// Shapes and vertex runs are appended in lockstep: the i-th shape's run is
/// the next `kind.vertex_count()` pairs after the runs of shapes `0..i`. The
/// store is only ever appended to or cleared, never edited in place, so
/// read-only snapshots are plain slice borrows.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    vertices: Vec<f32>,
}

impl ShapeStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one shape and its vertex run to the end of both sequences.
    pub fn append(&mut self, shape: Shape, vertices: &[f32]) {
        debug_assert_eq!(
            vertices.len(),
            shape.kind.vertex_count() * 2,
            "vertex run length must match the shape kind"
        );
        self.shapes.push(shape);
        self.vertices.extend_from_slice(vertices);
    }

    /// Appends a shape unless a maximum shape count would be exceeded.
    ///
    /// A `max` of zero means unlimited. Returns `true` when the shape was
    /// added, `false` when the limit would be exceeded.
    pub fn try_append(&mut self, shape: Shape, vertices: &[f32], max: usize) -> bool {
        if max == 0 || self.shapes.len() < max {
            self.append(shape, vertices);
            true
        } else {
            false
        }
    }

    /// Empties both the shape list and the vertex buffer together.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.vertices.clear();
    }

    /// Removes and returns the most recently committed shape, trimming its
    /// vertex run from the buffer.
    pub fn undo(&mut self) -> Option<Shape> {
        let shape = self.shapes.pop()?;
        let trimmed = self.vertices.len() - shape.kind.vertex_count() * 2;
        self.vertices.truncate(trimmed);
        Some(shape)
    }

    /// Read-only view of committed shapes in commit order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Read-only view of the flattened vertex buffer (interleaved x, y pairs).
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Number of committed shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the store holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
