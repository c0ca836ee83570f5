//! Update function for the Elm-style architecture
//!
//! Every keystroke runs: snapshot → mutate → re-highlight, synchronously and
//! to completion before the next event.

use crate::editable::HistoryDebug;
use crate::keymap::{KeyCode, Keystroke};
use crate::messages::{Msg, Propagation};
use crate::model::{AroundCursor, EditorModel};
use crate::surface::TextSurface;
use crate::syntax::{compute_indent, leading_whitespace};

/// Main update function - dispatches to the press/release handlers
pub fn update<S: TextSurface>(model: &mut EditorModel<S>, msg: Msg) -> Propagation {
    match msg {
        Msg::KeyPress(keystroke) => update_key_press(model, keystroke),
        Msg::KeyRelease(keystroke) => update_key_release(model, keystroke),
    }
}

/// Run a full press → native default → release cycle for one keystroke
pub fn dispatch_keystroke<S: TextSurface>(model: &mut EditorModel<S>, keystroke: Keystroke) {
    if update(model, Msg::KeyPress(keystroke)) == Propagation::Continue {
        model.surface.native_key(&keystroke);
    }
    update(model, Msg::KeyRelease(keystroke));
}

/// Type `text` one key at a time; `\n` becomes Return and `\t` Tab
pub fn dispatch_text<S: TextSurface>(model: &mut EditorModel<S>, text: &str) {
    for c in text.chars() {
        let keystroke = match c {
            '\n' => Keystroke::key(KeyCode::Enter),
            '\t' => Keystroke::key(KeyCode::Tab),
            c => Keystroke::char(c),
        };
        dispatch_keystroke(model, keystroke);
    }
}

fn update_key_press<S: TextSurface>(model: &mut EditorModel<S>, keystroke: Keystroke) -> Propagation {
    match (keystroke.ctrl_char(), keystroke.mods.shift()) {
        (Some('z'), false) => {
            undo(model);
            return Propagation::Stop;
        }
        (Some('z'), true) | (Some('y'), _) => {
            redo(model);
            return Propagation::Stop;
        }
        _ => {}
    }
    if keystroke.key.is_modifier() {
        return Propagation::Continue;
    }

    match keystroke.key {
        KeyCode::Enter if !keystroke.mods.is_command() => {
            insert_newline(model);
            Propagation::Stop
        }
        KeyCode::Tab if !keystroke.mods.is_command() => {
            model.snapshot();
            let tab = model.tab_text();
            let at = model.surface.cursor_offset();
            model.surface.insert_text(at, &tab);
            Propagation::Stop
        }
        KeyCode::Delete => {
            model.snapshot();
            if delete_indent_forward(model) {
                Propagation::Stop
            } else {
                Propagation::Continue
            }
        }
        _ => {
            // Captures the pre-edit state; the surface applies the key itself
            model.snapshot();
            model.around_cursor = AroundCursor::capture(&model.surface);
            Propagation::Continue
        }
    }
}

fn update_key_release<S: TextSurface>(
    model: &mut EditorModel<S>,
    keystroke: Keystroke,
) -> Propagation {
    if !keystroke.key.is_modifier() {
        let earlier = model.keys.record(keystroke.key);

        if keystroke.text() == Some('(') && !earlier.just_deleted_opener() {
            auto_close_paren(model);
        }

        if keystroke.key == KeyCode::Backspace && model.around_cursor.inside_empty_pair() {
            delete_paired_closer(model);
        }
    }

    model.around_cursor = AroundCursor::default();
    model.highlight();
    Propagation::Continue
}

/// Return: new line carrying the computed indentation
fn insert_newline<S: TextSurface>(model: &mut EditorModel<S>) {
    model.snapshot();

    let cursor = model.surface.cursor();
    let line_before_cursor: String = model
        .surface
        .line_text(cursor.line)
        .chars()
        .take(cursor.column)
        .collect();

    let indent = match model.rule_set() {
        Some(rules) => compute_indent(&line_before_cursor, rules),
        None => leading_whitespace(&line_before_cursor),
    };

    let at = model.surface.cursor_offset();
    model
        .surface
        .insert_text(at, &format!("\n{}", " ".repeat(indent)));
    tracing::debug!(line = cursor.line, indent, "newline inserted");

    model.highlight();
}

/// Delete a whole indentation level when the cursor sits on an indent stop
/// followed by that many spaces. Returns true if it deleted.
fn delete_indent_forward<S: TextSurface>(model: &mut EditorModel<S>) -> bool {
    let size = model.indent_size();
    if size == 0 {
        return false;
    }

    let cursor = model.surface.cursor();
    if cursor.column % size != 0 {
        return false;
    }

    let ahead: String = model
        .surface
        .line_text(cursor.line)
        .chars()
        .skip(cursor.column)
        .take(size)
        .collect();
    if ahead.len() != size || !ahead.chars().all(|c| c == ' ') {
        return false;
    }

    let at = model.surface.cursor_offset();
    model.surface.delete_range(at..at + size);
    tracing::trace!(line = cursor.line, column = cursor.column, "deleted indent level");
    true
}

/// Insert `)` after the cursor, leaving the cursor inside the pair
fn auto_close_paren<S: TextSurface>(model: &mut EditorModel<S>) {
    let at = model.surface.cursor_offset();
    model.surface.insert_text(at, ")");
    model.surface.set_cursor_offset(at);
}

/// Backspace removed the `(` of an empty pair; remove its `)` too
fn delete_paired_closer<S: TextSurface>(model: &mut EditorModel<S>) {
    let at = model.surface.cursor_offset();
    if model.surface.text(at..at + 1) == ")" {
        model.surface.delete_range(at..at + 1);
    }
}

fn undo<S: TextSurface>(model: &mut EditorModel<S>) {
    let before = HistoryDebug::of(&model.history);
    // Edits since the last key press are not on the stack yet
    model.commit_edit();
    let Some(snapshot) = model.history.undo() else {
        tracing::debug!("nothing to undo");
        return;
    };

    model.restore(&snapshot);
    model.highlight();
    if let Some(diff) = before.diff(&HistoryDebug::of(&model.history)) {
        tracing::debug!(target: "history", "undo: {}", diff);
    }
}

fn redo<S: TextSurface>(model: &mut EditorModel<S>) {
    let before = HistoryDebug::of(&model.history);
    if model.commit_edit() {
        tracing::debug!("edited since undo, redo discarded");
        return;
    }
    let live = model.live_snapshot();
    let Some(snapshot) = model.history.redo(live) else {
        tracing::debug!("nothing to redo");
        return;
    };

    model.restore(&snapshot);
    model.highlight();
    if let Some(diff) = before.diff(&HistoryDebug::of(&model.history)) {
        tracing::debug!(target: "history", "redo: {}", diff);
    }
}
