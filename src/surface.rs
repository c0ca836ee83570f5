//! The text surface: the buffer + cursor + tag layer the controller drives.
//!
//! A real UI owns the display and implements [`TextSurface`] over its widget;
//! [`MemorySurface`] is the headless implementation used by the binary and
//! tests.

use std::collections::BTreeSet;
use std::ops::Range;

use crate::editable::{Position, RopeBuffer};
use crate::keymap::{KeyCode, Keystroke};
use crate::syntax::{Tag, TaggedRange};

/// Capabilities the editing core needs from the display layer.
///
/// Offsets are character offsets into the whole buffer. Implementations must
/// clamp out-of-range offsets and positions rather than panic. The cursor
/// behaves like a mark with right gravity: text inserted at or before it
/// pushes it forward, and deleting a range containing it moves it to the
/// start of the range.
pub trait TextSurface {
    /// Text in a character range
    fn text(&self, range: Range<usize>) -> String;

    /// Whole buffer
    fn content(&self) -> String;

    fn len_chars(&self) -> usize;

    fn insert_text(&mut self, offset: usize, text: &str);

    fn delete_range(&mut self, range: Range<usize>);

    /// Replace the whole buffer (cursor clamps into the new text)
    fn set_content(&mut self, text: &str);

    fn cursor(&self) -> Position;

    fn set_cursor(&mut self, position: Position);

    /// Clamping conversion from a position to a character offset
    fn position_to_offset(&self, position: Position) -> usize;

    fn offset_to_position(&self, offset: usize) -> Position;

    /// Text of a 1-indexed line without its newline; empty if out of range
    fn line_text(&self, line: usize) -> String;

    fn clear_all_tags(&mut self);

    fn apply_tag(&mut self, tag: Tag, range: Range<usize>);

    /// Names of every tag currently applied somewhere in the buffer
    fn active_tag_names(&self) -> BTreeSet<&'static str>;

    /// Cursor as a character offset
    fn cursor_offset(&self) -> usize {
        self.position_to_offset(self.cursor())
    }

    fn set_cursor_offset(&mut self, offset: usize) {
        let position = self.offset_to_position(offset);
        self.set_cursor(position);
    }

    /// The surface's own handling of a key the controller did not consume
    fn native_key(&mut self, keystroke: &Keystroke) {
        let cursor = self.cursor_offset();
        if let Some(c) = keystroke.text() {
            let mut buf = [0u8; 4];
            self.insert_text(cursor, c.encode_utf8(&mut buf));
            return;
        }

        let position = self.cursor();
        match keystroke.key {
            KeyCode::Enter => self.insert_text(cursor, "\n"),
            KeyCode::Tab => self.insert_text(cursor, "\t"),
            KeyCode::Backspace if cursor > 0 => self.delete_range(cursor - 1..cursor),
            KeyCode::Delete => self.delete_range(cursor..cursor + 1),
            KeyCode::Left => self.set_cursor_offset(cursor.saturating_sub(1)),
            KeyCode::Right => self.set_cursor_offset(cursor + 1),
            KeyCode::Up if position.line > 1 => {
                self.set_cursor(Position::new(position.line - 1, position.column))
            }
            KeyCode::Down => self.set_cursor(Position::new(position.line + 1, position.column)),
            KeyCode::Home => self.set_cursor(Position::new(position.line, 0)),
            KeyCode::End => self.set_cursor(Position::new(position.line, usize::MAX)),
            _ => {}
        }
    }
}

/// In-memory surface: rope buffer, cursor offset and a flat tag list.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    buffer: RopeBuffer,
    cursor: usize,
    tags: Vec<TaggedRange>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface holding `text` with the cursor at the start
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: RopeBuffer::from_text(text),
            cursor: 0,
            tags: Vec::new(),
        }
    }

    /// Tags in the order they were applied
    pub fn tags(&self) -> &[TaggedRange] {
        &self.tags
    }

    /// Every tag covering `offset`
    pub fn tags_at(&self, offset: usize) -> Vec<Tag> {
        let mut tags: Vec<Tag> = self
            .tags
            .iter()
            .filter(|r| r.contains(offset))
            .map(|r| r.tag)
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    pub fn buffer(&self) -> &RopeBuffer {
        &self.buffer
    }
}

impl TextSurface for MemorySurface {
    fn text(&self, range: Range<usize>) -> String {
        self.buffer.slice(range)
    }

    fn content(&self) -> String {
        self.buffer.content()
    }

    fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    fn insert_text(&mut self, offset: usize, text: &str) {
        let offset = self.buffer.insert(offset, text);
        if offset <= self.cursor {
            self.cursor += text.chars().count();
        }
    }

    fn delete_range(&mut self, range: Range<usize>) {
        let Some(Range { start, end }) = self.buffer.remove(range) else {
            return;
        };
        if self.cursor >= end {
            self.cursor -= end - start;
        } else if self.cursor > start {
            self.cursor = start;
        }
    }

    fn set_content(&mut self, text: &str) {
        self.buffer.replace_all(text);
        self.cursor = self.cursor.min(self.buffer.len_chars());
    }

    fn cursor(&self) -> Position {
        self.offset_to_position(self.cursor)
    }

    fn set_cursor(&mut self, position: Position) {
        self.cursor = self.position_to_offset(position);
    }

    fn position_to_offset(&self, position: Position) -> usize {
        self.buffer.offset_of(position)
    }

    fn offset_to_position(&self, offset: usize) -> Position {
        self.buffer.position_of(offset)
    }

    fn line_text(&self, line: usize) -> String {
        self.buffer.line_text(line).unwrap_or_default()
    }

    fn clear_all_tags(&mut self) {
        self.tags.clear();
    }

    fn apply_tag(&mut self, tag: Tag, range: Range<usize>) {
        let len = self.buffer.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start < end {
            self.tags.push(TaggedRange::new(start, end, tag));
        }
    }

    fn active_tag_names(&self) -> BTreeSet<&'static str> {
        self.tags.iter().map(|r| r.tag.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Modifiers;

    #[test]
    fn test_insert_at_cursor_advances_cursor() {
        let mut surface = MemorySurface::with_text("ac");
        surface.set_cursor(Position::new(1, 1));
        surface.insert_text(1, "b");
        assert_eq!(surface.content(), "abc");
        assert_eq!(surface.cursor(), Position::new(1, 2));
    }

    #[test]
    fn test_insert_after_cursor_leaves_cursor() {
        let mut surface = MemorySurface::with_text("ab");
        surface.set_cursor(Position::new(1, 1));
        surface.insert_text(2, "c");
        assert_eq!(surface.cursor(), Position::new(1, 1));
    }

    #[test]
    fn test_delete_range_moves_cursor() {
        let mut surface = MemorySurface::with_text("abcdef");
        surface.set_cursor(Position::new(1, 5));
        surface.delete_range(1..3);
        assert_eq!(surface.content(), "adef");
        assert_eq!(surface.cursor(), Position::new(1, 3));

        surface.delete_range(2..10);
        assert_eq!(surface.content(), "ad");
        assert_eq!(surface.cursor(), Position::new(1, 2));
    }

    #[test]
    fn test_cursor_positions_clamp() {
        let mut surface = MemorySurface::with_text("one\ntwo");
        surface.set_cursor(Position::new(9, 9));
        assert_eq!(surface.cursor(), Position::new(2, 3));

        surface.set_cursor(Position::new(1, 50));
        assert_eq!(surface.cursor(), Position::new(1, 3));

        surface.set_cursor(Position::new(0, 2));
        assert_eq!(surface.cursor(), Position::new(1, 2));
    }

    #[test]
    fn test_line_text() {
        let surface = MemorySurface::with_text("one\n  two\n");
        assert_eq!(surface.line_text(1), "one");
        assert_eq!(surface.line_text(2), "  two");
        assert_eq!(surface.line_text(3), "");
        assert_eq!(surface.line_text(0), "");
        assert_eq!(surface.line_text(99), "");
    }

    #[test]
    fn test_tags_clamp_and_clear() {
        let mut surface = MemorySurface::with_text("abc");
        surface.apply_tag(Tag::Keyword, 0..2);
        surface.apply_tag(Tag::String, 2..99);
        surface.apply_tag(Tag::Number, 5..9);
        assert_eq!(surface.tags().len(), 2);
        assert_eq!(surface.tags_at(2), vec![Tag::String]);

        let names: Vec<_> = surface.active_tag_names().into_iter().collect();
        assert_eq!(names, vec!["keyword", "string"]);

        surface.clear_all_tags();
        assert!(surface.active_tag_names().is_empty());
    }

    #[test]
    fn test_set_content_clamps_cursor() {
        let mut surface = MemorySurface::with_text("hello world");
        surface.set_cursor(Position::new(1, 11));
        surface.set_content("hi");
        assert_eq!(surface.cursor(), Position::new(1, 2));
    }

    #[test]
    fn test_native_keys() {
        let mut surface = MemorySurface::new();
        surface.native_key(&Keystroke::char('a'));
        surface.native_key(&Keystroke::char_with_mods('B', Modifiers::SHIFT));
        surface.native_key(&Keystroke::key(KeyCode::Enter));
        surface.native_key(&Keystroke::char('c'));
        assert_eq!(surface.content(), "aB\nc");
        assert_eq!(surface.cursor(), Position::new(2, 1));

        surface.native_key(&Keystroke::key(KeyCode::Up));
        assert_eq!(surface.cursor(), Position::new(1, 1));
        surface.native_key(&Keystroke::key(KeyCode::End));
        assert_eq!(surface.cursor(), Position::new(1, 2));
        surface.native_key(&Keystroke::key(KeyCode::Backspace));
        assert_eq!(surface.content(), "a\nc");
        surface.native_key(&Keystroke::key(KeyCode::Delete));
        assert_eq!(surface.content(), "ac");
        surface.native_key(&Keystroke::key(KeyCode::Home));
        surface.native_key(&Keystroke::key(KeyCode::Backspace));
        assert_eq!(surface.content(), "ac");

        // Shortcuts don't type
        surface.native_key(&Keystroke::char_with_mods('z', Modifiers::CTRL));
        assert_eq!(surface.content(), "ac");
    }
}
