//! Syntax highlighting, bracket matching and auto-indentation
//!
//! Everything here is a pure function of the buffer text and a [`RuleSet`]
//! looked up by language name in a [`RuleTable`].
//!
//! ## Architecture
//!
//! ```text
//! Edit → apply_highlights(surface, table, language)
//!      → clear_all_tags → highlight(text, rules) → apply_tag per range
//! ```
//!
//! The highlight pass re-scans the whole buffer on every call: one regex pass
//! per token rule, then one bracket pass.

mod brackets;
mod highlights;
mod indent;
mod languages;

pub use brackets::match_brackets;
pub use highlights::{apply_highlights, highlight, Tag, TaggedRange};
pub use indent::{compute_indent, leading_whitespace};
pub use languages::{
    load_grammar_file, GrammarData, GrammarError, IndentData, IndentRules, RuleSet, RuleTable,
    TokenRule, TokenRuleData, PYTHON_GRAMMAR_YAML,
};
