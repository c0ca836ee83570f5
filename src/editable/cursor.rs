//! Cursor position type shared by the surface, history and controller.

use std::fmt;

/// A cursor location in the buffer.
///
/// Lines are 1-indexed and columns are 0-indexed character counts, matching
/// the addressing scheme of the text surface (`"1.0"` is the buffer start).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Start of the buffer
    pub const START: Position = Position { line: 1, column: 0 };

    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// 0-indexed line, for addressing into the buffer's line table
    pub const fn line_index(&self) -> usize {
        self.line.saturating_sub(1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.line, self.column)
    }
}
