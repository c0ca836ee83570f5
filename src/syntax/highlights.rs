//! Tags, tagged ranges and the full-buffer highlight pass.

use std::fmt;
use std::ops::Range;

use super::brackets::match_brackets;
use super::languages::{RuleSet, RuleTable};
use crate::surface::TextSurface;

/// Visual annotation kinds the core knows about.
///
/// Token tags and bracket tags live on independent axes: a `(` inside a
/// string can be both `string` and `paren_matched`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Keyword,
    Builtin,
    String,
    Comment,
    Number,
    ParenMatched,
    ParenUnmatched,
}

impl Tag {
    pub const ALL: [Tag; 7] = [
        Tag::Keyword,
        Tag::Builtin,
        Tag::String,
        Tag::Comment,
        Tag::Number,
        Tag::ParenMatched,
        Tag::ParenUnmatched,
    ];

    /// Stable name used by surfaces and theme files
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Keyword => "keyword",
            Tag::Builtin => "builtin",
            Tag::String => "string",
            Tag::Comment => "comment",
            Tag::Number => "number",
            Tag::ParenMatched => "paren_matched",
            Tag::ParenUnmatched => "paren_unmatched",
        }
    }

    pub fn from_name(name: &str) -> Option<Tag> {
        Tag::ALL.iter().copied().find(|tag| tag.name() == name)
    }

    /// True for the tags produced by the bracket matcher
    pub const fn is_bracket(self) -> bool {
        matches!(self, Tag::ParenMatched | Tag::ParenUnmatched)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tag over a range of character offsets (end exclusive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRange {
    pub start: usize,
    pub end: usize,
    pub tag: Tag,
}

impl TaggedRange {
    pub const fn new(start: usize, end: usize, tag: Tag) -> Self {
        Self { start, end, tag }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// Converts monotonically increasing byte offsets into character offsets
/// without rescanning from the start each time.
struct CharCounter<'a> {
    text: &'a str,
    ascii: bool,
    byte: usize,
    chars: usize,
}

impl<'a> CharCounter<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            ascii: text.is_ascii(),
            byte: 0,
            chars: 0,
        }
    }

    fn at(&mut self, byte: usize) -> usize {
        if self.ascii {
            return byte;
        }
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Compute every tagged range for `text`.
///
/// Each token rule is an independent pass over the whole text in table order;
/// bracket tags are appended after all token tags.
pub fn highlight(text: &str, rules: &RuleSet) -> Vec<TaggedRange> {
    let mut ranges = Vec::new();

    for rule in rules.tokens() {
        let mut counter = CharCounter::new(text);
        for m in rule.pattern.find_iter(text) {
            if m.is_empty() {
                continue;
            }
            let start = counter.at(m.start());
            let end = counter.at(m.end());
            ranges.push(TaggedRange::new(start, end, rule.tag));
        }
    }

    ranges.extend(match_brackets(text));
    ranges
}

/// Re-highlight the whole surface.
///
/// Tags are always cleared first, so an unknown language leaves the buffer
/// untagged rather than showing stale tags. Returns the number of ranges
/// applied.
pub fn apply_highlights<S: TextSurface + ?Sized>(
    surface: &mut S,
    table: &RuleTable,
    language: &str,
) -> usize {
    surface.clear_all_tags();

    let Some(rules) = table.rules_for(language) else {
        tracing::trace!(language, "no rules for language, skipping highlight");
        return 0;
    };

    let text = surface.content();
    let ranges = highlight(&text, rules);
    for range in &ranges {
        surface.apply_tag(range.tag, range.range());
    }

    tracing::trace!(language, ranges = ranges.len(), "highlight pass");
    ranges.len()
}
