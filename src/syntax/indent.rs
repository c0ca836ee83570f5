//! Auto-indentation for the line inserted on Return.

use super::languages::RuleSet;

/// Leading spaces for the line that follows `line_before_cursor`.
///
/// First match wins:
/// 1. the trimmed line starts with a block-ender → one level less (floored at 0)
/// 2. the line contains an indent-after trigger anywhere → one level more
/// 3. otherwise keep the current indentation
///
/// Triggers are plain substring checks, so a `:` inside a string literal or
/// comment also indents.
pub fn compute_indent(line_before_cursor: &str, rules: &RuleSet) -> usize {
    let indent = rules.indent();
    let base = leading_whitespace(line_before_cursor);
    let trimmed = line_before_cursor.trim_start();

    let new_indent = if indent
        .block_enders
        .iter()
        .any(|keyword| trimmed.starts_with(keyword.as_str()))
    {
        base.saturating_sub(indent.size)
    } else if indent
        .after
        .iter()
        .any(|trigger| line_before_cursor.contains(trigger.as_str()))
    {
        base + indent.size
    } else {
        base
    };

    tracing::trace!(base, new_indent, "computed indent");
    new_indent
}

/// Count of leading whitespace characters
pub fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
