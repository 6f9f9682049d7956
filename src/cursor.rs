//! Cursor position and movement direction types.
//!
//! A [`Cursor`] identifies an edit position as a (line, column) pair.
//! Columns count characters, not bytes; a column equal to the line length
//! means "after the last character".

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Cursor position in a [`LineBuffer`].
///
/// [`LineBuffer`]: crate::buffer::LineBuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (character offset within the line).
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn new() -> Self {
        Self { line: 0, col: 0 }
    }

    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.col)
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The lowercase name of the direction.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a direction name cannot be parsed.
///
/// The typed API cannot receive an invalid direction; this is the rejection
/// at the string boundary for harnesses that feed textual input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction `{input}`, expected one of: up, down, left, right")]
pub struct ParseDirectionError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse a direction from its name.
    ///
    /// Accepts `"up"`, `"down"`, `"left"` and `"right"`, ignoring ASCII
    /// case and surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use linebuf::cursor::Direction;
    ///
    /// assert_eq!("left".parse(), Ok(Direction::Left));
    /// assert!("sideways".parse::<Direction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseDirectionError {
                input: s.to_string(),
            }),
        }
    }
}
