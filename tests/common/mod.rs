//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use quill::config::EditorConfig;
use quill::editable::Position;
use quill::keymap::{parse_key_string, Keystroke, Modifiers};
use quill::syntax::{RuleTable, Tag};
use quill::theme::Theme;
use quill::update::{dispatch_keystroke, dispatch_text};
use quill::{EditorModel, MemorySurface, TextSurface};

/// Create a test model with given text and cursor position (1-indexed line)
pub fn test_model(text: &str, line: usize, column: usize) -> EditorModel {
    let mut surface = MemorySurface::with_text(text);
    surface.set_cursor(Position::new(line, column));
    EditorModel::new(
        surface,
        RuleTable::builtin(),
        EditorConfig::default(),
        Theme::default(),
    )
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &EditorModel) -> String {
    model.text()
}

pub fn cursor(model: &EditorModel) -> Position {
    model.surface.cursor()
}

/// Replay key strings like "a", "(", "backspace", "ctrl+z"
pub fn type_keys(model: &mut EditorModel, keys: &[&str]) {
    for key in keys {
        let keystroke = parse_key_string(key).unwrap();
        dispatch_keystroke(model, keystroke);
    }
}

/// Type text one character at a time
pub fn type_text(model: &mut EditorModel, text: &str) {
    dispatch_text(model, text);
}

pub fn ctrl_z(model: &mut EditorModel) {
    dispatch_keystroke(model, Keystroke::char_with_mods('z', Modifiers::CTRL));
}

pub fn ctrl_y(model: &mut EditorModel) {
    dispatch_keystroke(model, Keystroke::char_with_mods('y', Modifiers::CTRL));
}

/// Text covered by every range carrying `tag`, in application order
pub fn tagged_text(model: &EditorModel, tag: Tag) -> Vec<String> {
    model
        .surface
        .tags()
        .iter()
        .filter(|range| range.tag == tag)
        .map(|range| model.surface.text(range.range()))
        .collect()
}
