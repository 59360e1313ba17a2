//! Generic pointer event types.

/// Mouse button identification.
///
/// Frontends map their native button codes to these values before calling the
/// session handlers.
#[allow(dead_code)] // Some variants are only produced by specific frontends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (cancels the current gesture)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
