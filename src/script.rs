//! Line-oriented pointer-event scripts.
//!
//! The CLI binary drives a [`SketchState`] from a plain-text script instead of
//! live widget events. One command per line:
//!
//! ```text
//! tool square
//! color #2266AA
//! press 10 10
//! move 40 25      # live preview position
//! release 50 30
//! clear
//! undo
//! ```
//!
//! A `#` begins a comment at the start of a line or when followed by
//! whitespace, so hex arguments like `#2266AA` pass through intact. Blank
//! lines are ignored. Unknown color names are non-fatal (the draw keeps the
//! previous color); everything else malformed is a hard parse error carrying
//! the line number.

use std::io::BufRead;

use thiserror::Error;

use crate::input::{MouseButton, SketchState, Tool};

/// Errors produced while parsing a pointer script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The first word of a line is not a known command.
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    /// A known command was given the wrong arguments.
    #[error("line {line}: '{command}' expects {expected}")]
    BadArguments {
        line: usize,
        command: String,
        expected: &'static str,
    },

    /// A `tool` command named a tool that does not exist.
    #[error("line {line}: unknown tool '{name}'")]
    UnknownTool { line: usize, name: String },

    /// The script source could not be read.
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

/// A single replayable pointer or session command.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Select the active tool
    Tool(Tool),
    /// Set the drawing color (name or hex; invalid specs warn and no-op)
    Color(String),
    /// Left pointer press at pixel coordinates
    Press(i32, i32),
    /// Pointer motion at pixel coordinates
    Move(i32, i32),
    /// Left pointer release at pixel coordinates
    Release(i32, i32),
    /// Empty the canvas
    Clear,
    /// Remove the most recent shape
    Undo,
}

impl ScriptCommand {
    /// Applies this command to session state.
    pub fn apply(&self, state: &mut SketchState) {
        match self {
            ScriptCommand::Tool(tool) => state.set_tool(*tool),
            ScriptCommand::Color(spec) => state.set_color_spec(spec),
            ScriptCommand::Press(x, y) => state.on_mouse_press(MouseButton::Left, *x, *y),
            ScriptCommand::Move(x, y) => state.on_mouse_motion(*x, *y),
            ScriptCommand::Release(x, y) => state.on_mouse_release(MouseButton::Left, *x, *y),
            ScriptCommand::Clear => state.clear_canvas(),
            ScriptCommand::Undo => {
                state.undo();
            }
        }
    }
}

/// Parses a full script, returning the commands in order.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let text = strip_comment(&line).trim();
        if text.is_empty() {
            continue;
        }

        let fields: Vec<&str> = text.split_whitespace().collect();
        let (command, args) = (fields[0], &fields[1..]);
        commands.push(parse_line(command, args, line_no)?);
    }

    Ok(commands)
}

/// Cuts a trailing comment off one script line.
///
/// A `#` only delimits a comment when it is the first non-whitespace character
/// of the line or when the next character is whitespace (or the line ends
/// there). A `#` glued to more text, as in `color #2266AA`, is part of the
/// argument.
fn strip_comment(line: &str) -> &str {
    for (idx, _) in line.match_indices('#') {
        let at_line_start = line[..idx].trim().is_empty();
        let delimits = line[idx + 1..]
            .chars()
            .next()
            .is_none_or(char::is_whitespace);
        if at_line_start || delimits {
            return &line[..idx];
        }
    }
    line
}

fn parse_line(command: &str, args: &[&str], line: usize) -> Result<ScriptCommand, ScriptError> {
    match (command, args) {
        ("tool", [name]) => {
            let tool = name.parse().map_err(|_| ScriptError::UnknownTool {
                line,
                name: (*name).to_string(),
            })?;
            Ok(ScriptCommand::Tool(tool))
        }
        ("color", [spec]) => Ok(ScriptCommand::Color((*spec).to_string())),
        ("press", [x, y]) => Ok(ScriptCommand::Press(
            coord(x, command, line)?,
            coord(y, command, line)?,
        )),
        ("move", [x, y]) => Ok(ScriptCommand::Move(
            coord(x, command, line)?,
            coord(y, command, line)?,
        )),
        ("release", [x, y]) => Ok(ScriptCommand::Release(
            coord(x, command, line)?,
            coord(y, command, line)?,
        )),
        ("clear", []) => Ok(ScriptCommand::Clear),
        ("undo", []) => Ok(ScriptCommand::Undo),
        ("tool" | "color", _) => Err(ScriptError::BadArguments {
            line,
            command: command.to_string(),
            expected: "a single argument",
        }),
        ("press" | "move" | "release", _) => Err(ScriptError::BadArguments {
            line,
            command: command.to_string(),
            expected: "two integer coordinates",
        }),
        ("clear" | "undo", _) => Err(ScriptError::BadArguments {
            line,
            command: command.to_string(),
            expected: "no arguments",
        }),
        _ => Err(ScriptError::UnknownCommand {
            line,
            command: command.to_string(),
        }),
    }
}

fn coord(field: &str, command: &str, line: usize) -> Result<i32, ScriptError> {
    field.parse().map_err(|_| ScriptError::BadArguments {
        line,
        command: command.to_string(),
        expected: "two integer coordinates",
    })
}
