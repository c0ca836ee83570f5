//! Text editing tests - auto-pairing, Tab, Delete and Return

mod common;

use common::{buffer_to_string, cursor, test_model, type_keys, type_text};
use quill::editable::Position;
use quill::keymap::{KeyCode, Keystroke};
use quill::messages::{Msg, Propagation};
use quill::update::{dispatch_keystroke, update};

// ========================================================================
// Auto-pairing
// ========================================================================

#[test]
fn test_open_paren_inserts_closer() {
    let mut model = test_model("", 1, 0);
    type_keys(&mut model, &["("]);

    assert_eq!(buffer_to_string(&model), "()");
    assert_eq!(cursor(&model), Position::new(1, 1));
}

#[test]
fn test_typing_inside_pair() {
    let mut model = test_model("", 1, 0);
    type_text(&mut model, "len(x");

    assert_eq!(buffer_to_string(&model), "len(x)");
    assert_eq!(cursor(&model), Position::new(1, 5));
}

#[test]
fn test_paren_after_deleting_pair_is_not_closed() {
    let mut model = test_model("", 1, 0);
    type_keys(&mut model, &["(", "backspace"]);
    assert_eq!(buffer_to_string(&model), "");

    type_keys(&mut model, &["("]);
    assert_eq!(buffer_to_string(&model), "(");

    // The suppression only looks at the last two releases
    type_keys(&mut model, &["("]);
    assert_eq!(buffer_to_string(&model), "(()");
    assert_eq!(cursor(&model), Position::new(1, 2));
}

#[test]
fn test_shift_between_keys_does_not_break_suppression() {
    let mut model = test_model("", 1, 0);
    type_keys(&mut model, &["(", "backspace", "shift", "("]);
    assert_eq!(buffer_to_string(&model), "(");
}

#[test]
fn test_backspace_inside_empty_pair_removes_both() {
    let mut model = test_model("f()", 1, 2);
    type_keys(&mut model, &["backspace"]);

    assert_eq!(buffer_to_string(&model), "f");
    assert_eq!(cursor(&model), Position::new(1, 1));
}

#[test]
fn test_backspace_after_paren_with_content_removes_only_paren() {
    let mut model = test_model("(x)", 1, 1);
    type_keys(&mut model, &["backspace"]);
    assert_eq!(buffer_to_string(&model), "x)");
}

#[test]
fn test_backspace_at_start_is_harmless() {
    let mut model = test_model("abc", 1, 0);
    type_keys(&mut model, &["backspace"]);
    assert_eq!(buffer_to_string(&model), "abc");
    assert_eq!(cursor(&model), Position::new(1, 0));
}

// ========================================================================
// Tab and Delete
// ========================================================================

#[test]
fn test_tab_inserts_four_spaces() {
    let mut model = test_model("x", 1, 0);
    let propagation = update(&mut model, Msg::KeyPress(Keystroke::key(KeyCode::Tab)));

    assert_eq!(propagation, Propagation::Stop);
    assert_eq!(buffer_to_string(&model), "    x");
    assert_eq!(cursor(&model), Position::new(1, 4));
}

#[test]
fn test_tab_without_grammar_uses_default_width() {
    let mut model = test_model("", 1, 0);
    model.set_language("plain");
    type_keys(&mut model, &["tab"]);
    assert_eq!(buffer_to_string(&model), "    ");
}

#[test]
fn test_delete_removes_whole_indent_level() {
    let mut model = test_model("        x", 1, 0);
    type_keys(&mut model, &["delete"]);

    assert_eq!(buffer_to_string(&model), "    x");
    assert_eq!(cursor(&model), Position::new(1, 0));
}

#[test]
fn test_delete_off_indent_stop_removes_one_char() {
    let mut model = test_model("      x", 1, 2);
    type_keys(&mut model, &["delete"]);
    assert_eq!(buffer_to_string(&model), "     x");
}

#[test]
fn test_delete_before_partial_indent_removes_one_char() {
    let mut model = test_model("  x", 1, 0);
    type_keys(&mut model, &["delete"]);
    assert_eq!(buffer_to_string(&model), " x");
}

#[test]
fn test_delete_at_end_of_buffer_is_harmless() {
    let mut model = test_model("ab", 1, 2);
    type_keys(&mut model, &["delete"]);
    assert_eq!(buffer_to_string(&model), "ab");
}

// ========================================================================
// Return
// ========================================================================

#[test]
fn test_return_after_colon_indents() {
    let mut model = test_model("def f():", 1, 8);
    type_keys(&mut model, &["enter"]);

    assert_eq!(buffer_to_string(&model), "def f():\n    ");
    assert_eq!(cursor(&model), Position::new(2, 4));
}

#[test]
fn test_return_keeps_current_indent() {
    let mut model = test_model("    x = 1", 1, 9);
    type_keys(&mut model, &["enter"]);
    assert_eq!(buffer_to_string(&model), "    x = 1\n    ");
}

#[test]
fn test_return_after_block_ender_dedents() {
    let mut model = test_model("    return x", 1, 12);
    type_keys(&mut model, &["enter"]);

    assert_eq!(buffer_to_string(&model), "    return x\n");
    assert_eq!(cursor(&model), Position::new(2, 0));
}

#[test]
fn test_return_in_middle_of_line_splits_it() {
    let mut model = test_model("if a: b", 1, 6);
    dispatch_keystroke(&mut model, Keystroke::key(KeyCode::Enter));
    assert_eq!(buffer_to_string(&model), "if a: \n    b");
    assert_eq!(cursor(&model), Position::new(2, 4));
}

#[test]
fn test_typing_a_small_function() {
    let mut model = test_model("", 1, 0);
    type_text(&mut model, "def f(x");
    // Step over the auto-inserted closer
    type_keys(&mut model, &["right"]);
    type_text(&mut model, ":\nreturn x\n");

    assert_eq!(buffer_to_string(&model), "def f(x):\n    return x\n");
}
