//! Drawing tool selection.

use std::str::FromStr;

use thiserror::Error;

/// Drawing tool selection.
///
/// Exactly one tool is active at a time; it changes only through explicit
/// selection (a script `tool` command or the configured default). The active
/// tool determines what geometry a pointer drag produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing - commits a segment for every motion event
    Pen,
    /// Straight line between the press and release points
    Line,
    /// Equal-sided square snapped to the shorter drag delta
    Square,
    /// Axis-aligned rectangle from corner to corner
    Rect,
    /// Freehand strokes in the background color
    Eraser,
}

impl Tool {
    /// True for tools that commit continuously during the drag instead of
    /// once at release.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Tool::Pen | Tool::Eraser)
    }
}

/// Error returned when a tool name is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tool '{0}'")]
pub struct ParseToolError(pub String);

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pen" => Ok(Tool::Pen),
            "line" => Ok(Tool::Line),
            "square" => Ok(Tool::Square),
            "rect" | "rectangle" => Ok(Tool::Rect),
            "eraser" => Ok(Tool::Eraser),
            other => Err(ParseToolError(other.to_string())),
        }
    }
}
