//! Library exports for reusing strokepad subsystems.
//!
//! Exposes the drawing pipeline, pointer state machine, and script replay
//! alongside the configuration data structures so that external tools can
//! share geometry and validation logic with the main binary.

pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
