//! Terminal rendering of a highlighted buffer
//!
//! Turns the buffer text plus its tagged ranges into ANSI truecolor output.
//! Bracket tags are drawn over token tags; among token tags the one applied
//! last wins, matching how a widget resolves overlapping tag colors.

use std::fmt::Write;

use crate::syntax::{Tag, TaggedRange};
use crate::theme::{Color, Theme};

const RESET: &str = "\x1b[0m";

/// Resolve the tag that colors each character of `text`
pub fn resolve_char_tags(text: &str, tags: &[TaggedRange]) -> Vec<Option<Tag>> {
    let len = text.chars().count();
    let mut resolved: Vec<Option<Tag>> = vec![None; len];

    // Tokens first, then brackets on top
    for pass_brackets in [false, true] {
        for range in tags.iter().filter(|r| r.tag.is_bracket() == pass_brackets) {
            let end = range.end.min(len);
            for slot in resolved.iter_mut().take(end).skip(range.start) {
                *slot = Some(range.tag);
            }
        }
    }

    resolved
}

/// Render `text` with each character colored by its tag.
///
/// Untagged characters use the theme foreground. Newlines reset the color so
/// every line stands on its own when printed.
pub fn render_ansi(text: &str, tags: &[TaggedRange], theme: &Theme) -> String {
    let resolved = resolve_char_tags(text, tags);
    let mut out = String::with_capacity(text.len() * 2);
    let mut current: Option<Color> = None;

    for (ch, tag) in text.chars().zip(resolved) {
        if ch == '\n' {
            if current.take().is_some() {
                out.push_str(RESET);
            }
            out.push('\n');
            continue;
        }

        // Determine color for this character
        let color = tag
            .and_then(|tag| theme.color_for(tag))
            .unwrap_or(theme.foreground);

        if current != Some(color) {
            push_fg(&mut out, color);
            current = Some(color);
        }
        out.push(ch);
    }

    if current.is_some() {
        out.push_str(RESET);
    }
    out
}

fn push_fg(out: &mut String, color: Color) {
    let _ = write!(out, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
}

/// One line per tagged range: name, char range and the covered text
pub fn format_tags(text: &str, tags: &[TaggedRange]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    for range in tags {
        let end = range.end.min(chars.len());
        let start = range.start.min(end);
        let covered: String = chars[start..end].iter().collect();
        let _ = writeln!(
            out,
            "{:<16} {}..{} {:?}",
            range.tag.name(),
            range.start,
            range.end,
            covered
        );
    }
    out
}
