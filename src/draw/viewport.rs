//! Pixel to normalized-device-coordinate conversion.

/// Pixel dimensions of the drawing surface.
///
/// Maps device pixel coordinates into the normalized coordinate space the
/// renderer works in, where both axes range over [-1, 1] regardless of the
/// surface pixel size. Callers guarantee both dimensions are greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl Viewport {
    /// Creates a viewport with the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Maps a pixel coordinate to normalized device coordinates.
    ///
    /// Pure linear transform with no error cases: (0, 0) maps to (-1, 1) at the
    /// top-left, and (width, height) to (1, -1) at the bottom-right. The Y axis
    /// flips because pixel space grows downward while NDC grows upward.
    pub fn to_ndc(&self, x: i32, y: i32) -> (f32, f32) {
        let nx = (x as f32 / self.width as f32) * 2.0 - 1.0;
        let ny = 1.0 - (y as f32 / self.height as f32) * 2.0;
        (nx, ny)
    }
}
