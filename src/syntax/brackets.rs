//! Round-bracket matching.

use super::highlights::{Tag, TaggedRange};

/// Tag every `(` and `)` in `text` as matched or unmatched.
///
/// One left-to-right pass with a stack of unmatched `(` offsets. Pairs are
/// emitted opener first as they close; leftover openers come last in
/// ascending offset order. Offsets are characters.
pub fn match_brackets(text: &str) -> Vec<TaggedRange> {
    let mut ranges = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for (offset, ch) in text.chars().enumerate() {
        match ch {
            '(' => open.push(offset),
            ')' => match open.pop() {
                Some(start) => {
                    ranges.push(single(start, Tag::ParenMatched));
                    ranges.push(single(offset, Tag::ParenMatched));
                }
                None => ranges.push(single(offset, Tag::ParenUnmatched)),
            },
            _ => {}
        }
    }

    ranges.extend(open.into_iter().map(|start| single(start, Tag::ParenUnmatched)));
    ranges
}

fn single(offset: usize, tag: Tag) -> TaggedRange {
    TaggedRange::new(offset, offset + 1, tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_at(ranges: &[TaggedRange], offset: usize) -> Option<Tag> {
        ranges.iter().find(|r| r.start == offset).map(|r| r.tag)
    }

    #[test]
    fn test_nested_with_leftover_opener() {
        let ranges = match_brackets("(()");
        assert_eq!(tag_at(&ranges, 0), Some(Tag::ParenUnmatched));
        assert_eq!(tag_at(&ranges, 1), Some(Tag::ParenMatched));
        assert_eq!(tag_at(&ranges, 2), Some(Tag::ParenMatched));
        assert_eq!(ranges.len(), 3);
    }

    #[test]
    fn test_stray_closer_is_unmatched() {
        let ranges = match_brackets(")(x)");
        assert_eq!(tag_at(&ranges, 0), Some(Tag::ParenUnmatched));
        assert_eq!(tag_at(&ranges, 1), Some(Tag::ParenMatched));
        assert_eq!(tag_at(&ranges, 3), Some(Tag::ParenMatched));
        assert_eq!(tag_at(&ranges, 2), None);
    }

    #[test]
    fn test_closer_cannot_match_later_opener() {
        let ranges = match_brackets(")(");
        assert!(ranges.iter().all(|r| r.tag == Tag::ParenUnmatched));
        assert_eq!(ranges.len(), 2);
    }

    #[test]
    fn test_all_openers_are_unmatched_in_order() {
        let ranges = match_brackets("(((");
        let offsets: Vec<_> = ranges.iter().map(|r| r.start).collect();
        assert_eq!(offsets, vec![0, 1, 2]);
        assert!(ranges.iter().all(|r| r.tag == Tag::ParenUnmatched));
    }

    #[test]
    fn test_other_brackets_are_ignored() {
        assert!(match_brackets("[]{}<>").is_empty());
        assert!(match_brackets("").is_empty());
    }

    #[test]
    fn test_every_paren_gets_exactly_one_tag() {
        let text = "f(a(b), (c)) ) ((";
        let ranges = match_brackets(text);
        let parens = text.chars().filter(|c| *c == '(' || *c == ')').count();
        assert_eq!(ranges.len(), parens);

        let matched = ranges.iter().filter(|r| r.tag == Tag::ParenMatched).count();
        assert_eq!(matched, 6);
    }

    #[test]
    fn test_multibyte_text_uses_char_offsets() {
        let ranges = match_brackets("é(ü)");
        assert_eq!(tag_at(&ranges, 1), Some(Tag::ParenMatched));
        assert_eq!(tag_at(&ranges, 3), Some(Tag::ParenMatched));
    }
}
