mod core;
mod mouse;
mod render;
#[cfg(test)]
mod tests;

pub use core::{DrawingState, SketchState};
