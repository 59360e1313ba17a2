//! Cairo raster backend: strokes normalized primitives into an image surface.

use std::fs::File;
use std::path::Path;

use thiserror::Error;

use crate::draw::{Color, Surface, Topology};

/// Errors raised by the raster backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The cairo image surface or drawing context could not be created.
    /// Fatal for callers: without a graphics context nothing can be drawn.
    #[error("failed to initialize drawing surface: {0}")]
    Init(#[from] cairo::Error),

    /// The rendered canvas could not be encoded as PNG.
    #[error("failed to encode png: {0}")]
    Png(#[from] cairo::IoError),

    /// The output file could not be created.
    #[error("failed to create output file: {0}")]
    Io(#[from] std::io::Error),
}

/// Offscreen raster surface stroking primitives through cairo.
///
/// Normalized coordinates are mapped back to device pixels at draw time:
/// (-1, 1) is the top-left corner and (1, -1) the bottom-right, the inverse of
/// [`crate::draw::Viewport::to_ndc`].
pub struct RasterSurface {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    width: f64,
    height: f64,
    stroke_width: f64,
}

impl RasterSurface {
    /// Default stroke width in pixels for all primitives.
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

    /// Creates an offscreen ARGB surface of the given pixel size.
    pub fn new(width: u32, height: u32) -> Result<Self, BackendError> {
        let surface =
            cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)?;
        let ctx = cairo::Context::new(&surface)?;

        Ok(Self {
            surface,
            ctx,
            width: width as f64,
            height: height as f64,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
        })
    }

    /// Overrides the stroke width used for subsequent primitives.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width.max(0.1);
    }

    /// Writes the current canvas contents to `path` as PNG.
    pub fn write_png(&self, path: &Path) -> Result<(), BackendError> {
        let mut file = File::create(path)?;
        self.surface.flush();
        self.surface.write_to_png(&mut file)?;
        Ok(())
    }

    fn to_device(&self, nx: f32, ny: f32) -> (f64, f64) {
        let x = (nx as f64 + 1.0) / 2.0 * self.width;
        let y = (1.0 - ny as f64) / 2.0 * self.height;
        (x, y)
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        let _ = self.ctx.paint(); // Ignore errors - a failed paint leaves the old contents
    }

    fn draw_primitive(&mut self, topology: Topology, vertices: &[f32], color: Color) {
        // A primitive needs at least two vertex pairs to stroke anything.
        if vertices.len() < 4 {
            return;
        }

        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        self.ctx.set_line_width(self.stroke_width);
        self.ctx.set_line_cap(cairo::LineCap::Round);
        self.ctx.set_line_join(cairo::LineJoin::Round);

        let points: Vec<(f64, f64)> = vertices
            .chunks_exact(2)
            .map(|pair| self.to_device(pair[0], pair[1]))
            .collect();

        match topology {
            Topology::Lines => {
                for pair in points.chunks_exact(2) {
                    self.ctx.move_to(pair[0].0, pair[0].1);
                    self.ctx.line_to(pair[1].0, pair[1].1);
                }
            }
            Topology::LineStrip | Topology::LineLoop => {
                self.ctx.move_to(points[0].0, points[0].1);
                for &(x, y) in &points[1..] {
                    self.ctx.line_to(x, y);
                }
                if topology == Topology::LineLoop {
                    self.ctx.close_path();
                }
            }
        }

        let _ = self.ctx.stroke();
    }
}
