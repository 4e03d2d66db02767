//! Source positions.
//!
//! The compiler works over a single, fully-realized UTF-8 source buffer (no
//! multi-file source map — the host is responsible for file I/O), so all a
//! token or diagnostic needs is a 1-based line/column pair.

use std::fmt;

/// A 1-based line/column location in the source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub const START: Position = Position { line: 1, col: 1 };

    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Advances past a newline: bumps the line, resets the column.
    pub fn advance_line(&mut self) {
        self.line += 1;
        self.col = 1;
    }

    /// Advances past a single rune on the current line.
    pub fn advance_col(&mut self) {
        self.col += 1;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
