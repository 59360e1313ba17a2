//! Drawing core: colors, shapes, the shape store, and the primitive renderer.
//!
//! This module defines the types the whole crate revolves around:
//! - [`Color`]: RGBA color with hex parsing and predefined constants
//! - [`Viewport`]: pixel to normalized-device-coordinate mapping
//! - [`Shape`]: committed shapes and their vertex-run builders
//! - [`ShapeStore`]: append-only shape list plus flattened vertex buffer
//! - [`Surface`] and the replay functions: the primitive-level rendering seam

pub mod color;
pub mod render;
pub mod shape;
pub mod store;
pub mod viewport;

// Re-export commonly used types at module level
pub use color::Color;
pub use render::{PrimitiveCall, RecordingSurface, Surface, Topology, draw_preview, redraw_all};
pub use shape::{Shape, ShapeKind};
pub use store::ShapeStore;
pub use viewport::Viewport;

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
