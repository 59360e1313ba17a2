//! Concrete rendering backends for the primitive surface seam.

pub mod raster;

// Re-export commonly used types at module level
pub use raster::{BackendError, RasterSurface};
