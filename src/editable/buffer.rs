//! Rope-backed text buffer used by the headless surface.
//!
//! Every accessor clamps out-of-range input instead of panicking, so callers
//! can hand it whatever cursor the UI layer reported. Positions use the
//! surface addressing (1-indexed lines, 0-indexed columns).

use ropey::Rope;
use std::ops::Range;

use super::cursor::Position;

#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Number of lines; a trailing newline opens an empty last line
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Characters on a 0-indexed line, newline excluded
    fn line_len(&self, index: usize) -> usize {
        let line = self.rope.line(index);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Text of a 1-indexed line without its newline, or None past the end
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line == 0 || line > self.rope.len_lines() {
            return None;
        }
        let index = line - 1;
        let start = self.rope.line_to_char(index);
        Some(self.rope.slice(start..start + self.line_len(index)).to_string())
    }

    /// Character offset of `position`. Lines past the end map to the buffer
    /// end; columns past the line end map to the line end.
    pub fn offset_of(&self, position: Position) -> usize {
        let index = position.line_index();
        if index >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(index) + position.column.min(self.line_len(index))
    }

    pub fn position_of(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let index = self.rope.char_to_line(offset);
        Position::new(index + 1, offset - self.rope.line_to_char(index))
    }

    /// Clamped character range as a String
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.rope.len_chars();
        let (start, end) = (range.start.min(len), range.end.min(len));
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    pub fn content(&self) -> String {
        self.rope.to_string()
    }

    /// Insert at a clamped offset, returning the offset actually used
    pub fn insert(&mut self, offset: usize, text: &str) -> usize {
        let offset = offset.min(self.rope.len_chars());
        self.rope.insert(offset, text);
        offset
    }

    /// Remove a clamped range, returning the range actually removed
    pub fn remove(&mut self, range: Range<usize>) -> Option<Range<usize>> {
        let len = self.rope.len_chars();
        let (start, end) = (range.start.min(len), range.end.min(len));
        if start >= end {
            return None;
        }
        self.rope.remove(start..end);
        Some(start..end)
    }

    pub fn replace_all(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }
}
