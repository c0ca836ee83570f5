//! Editor state owned by the controller
//!
//! One [`EditorModel`] owns one surface, its history and the rule table.
//! Nothing here is shared or global: theme and config are passed in at
//! construction.

use crate::config::EditorConfig;
use crate::editable::{History, Snapshot};
use crate::keymap::KeyCode;
use crate::surface::{MemorySurface, TextSurface};
use crate::syntax::{apply_highlights, RuleSet, RuleTable};
use crate::theme::Theme;

/// Indent width used when the language has no rules
pub const DEFAULT_INDENT_SIZE: usize = 4;

/// The two most recently released keys (modifier-only keys excluded)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyTracker {
    pub previous: Option<KeyCode>,
    pub before_previous: Option<KeyCode>,
}

impl KeyTracker {
    /// Record a release, returning the tracker as it was before
    pub fn record(&mut self, key: KeyCode) -> KeyTracker {
        let before = *self;
        self.before_previous = self.previous;
        self.previous = Some(key);
        before
    }

    /// The last two releases were `(` then Backspace, i.e. the user just
    /// deleted a bracket pair
    pub fn just_deleted_opener(&self) -> bool {
        self.previous == Some(KeyCode::Backspace) && self.before_previous == Some(KeyCode::Char('('))
    }
}

/// Characters around the cursor when the last key went down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AroundCursor {
    pub before: Option<char>,
    pub after: Option<char>,
}

impl AroundCursor {
    pub fn capture<S: TextSurface + ?Sized>(surface: &S) -> Self {
        let position = surface.cursor();
        let line: Vec<char> = surface.line_text(position.line).chars().collect();
        let column = position.column.min(line.len());
        Self {
            before: column.checked_sub(1).and_then(|c| line.get(c)).copied(),
            after: line.get(column).copied(),
        }
    }

    /// Cursor sat between `(` and `)`
    pub fn inside_empty_pair(&self) -> bool {
        self.before == Some('(') && self.after == Some(')')
    }
}

/// Controller state for a single editor
#[derive(Debug)]
pub struct EditorModel<S: TextSurface = MemorySurface> {
    pub surface: S,
    pub history: History,
    pub rules: RuleTable,
    pub language: String,
    pub config: EditorConfig,
    pub theme: Theme,
    pub keys: KeyTracker,
    pub around_cursor: AroundCursor,
}

impl<S: TextSurface> EditorModel<S> {
    /// Bind a model to `surface`.
    ///
    /// The surface's current state becomes the first history entry, and the
    /// buffer is highlighted once.
    pub fn new(surface: S, rules: RuleTable, config: EditorConfig, theme: Theme) -> Self {
        let initial = Snapshot::new(surface.content(), surface.cursor());
        let mut model = Self {
            surface,
            history: History::new(initial),
            rules,
            language: config.language.clone(),
            config,
            theme,
            keys: KeyTracker::default(),
            around_cursor: AroundCursor::default(),
        };
        model.highlight();
        model
    }

    /// Rules for the active language
    pub fn rule_set(&self) -> Option<&RuleSet> {
        self.rules.rules_for(&self.language)
    }

    pub fn indent_size(&self) -> usize {
        self.rule_set()
            .map(|rules| rules.indent().size)
            .unwrap_or(DEFAULT_INDENT_SIZE)
    }

    /// Text inserted by the Tab key
    pub fn tab_text(&self) -> String {
        self.rule_set()
            .map(|rules| rules.indent().tab.clone())
            .unwrap_or_else(|| " ".repeat(DEFAULT_INDENT_SIZE))
    }

    pub fn text(&self) -> String {
        self.surface.content()
    }

    /// Current buffer and cursor
    pub fn live_snapshot(&self) -> Snapshot {
        Snapshot::new(self.surface.content(), self.surface.cursor())
    }

    /// Record the current state in history (deduplicated)
    pub fn snapshot(&mut self) -> bool {
        let content = self.surface.content();
        let cursor = self.surface.cursor();
        self.history.snapshot(&content, cursor)
    }

    /// Record text typed since the last key press; cursor moves alone are skipped
    pub fn commit_edit(&mut self) -> bool {
        let content = self.surface.content();
        let cursor = self.surface.cursor();
        self.history.commit_edit(&content, cursor)
    }

    /// Replace buffer and cursor with a history entry
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.surface.set_content(&snapshot.content);
        self.surface.set_cursor(snapshot.cursor);
    }

    /// Full re-highlight of the buffer
    pub fn highlight(&mut self) -> usize {
        apply_highlights(&mut self.surface, &self.rules, &self.language)
    }

    /// Switch grammar and re-highlight
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
        if self.rule_set().is_none() {
            tracing::warn!("No rules for language {}, highlighting disabled", self.language);
        }
        self.highlight();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::Position;

    fn model(text: &str) -> EditorModel {
        EditorModel::new(
            MemorySurface::with_text(text),
            RuleTable::builtin(),
            EditorConfig::default(),
            Theme::default(),
        )
    }

    #[test]
    fn test_new_model_records_initial_state_and_highlights() {
        let model = model("def f():");
        assert_eq!(model.history.undo_count(), 1);
        assert_eq!(
            model.history.current(),
            Some(&Snapshot::new("def f():", Position::START))
        );
        assert!(model.surface.active_tag_names().contains("keyword"));
    }

    #[test]
    fn test_key_tracker_shifts() {
        let mut keys = KeyTracker::default();
        keys.record(KeyCode::Char('('));
        let before = keys.record(KeyCode::Backspace);
        assert_eq!(before.previous, Some(KeyCode::Char('(')));
        assert!(keys.just_deleted_opener());

        keys.record(KeyCode::Char('x'));
        assert!(!keys.just_deleted_opener());
    }

    #[test]
    fn test_around_cursor_capture() {
        let mut surface = MemorySurface::with_text("f()\nx");
        surface.set_cursor(Position::new(1, 2));
        let around = AroundCursor::capture(&surface);
        assert!(around.inside_empty_pair());

        surface.set_cursor(Position::new(2, 0));
        let around = AroundCursor::capture(&surface);
        assert_eq!(around.before, None);
        assert_eq!(around.after, Some('x'));
    }

    #[test]
    fn test_unknown_language_falls_back_to_defaults() {
        let mut model = model("def");
        model.set_language("cobol");
        assert_eq!(model.indent_size(), DEFAULT_INDENT_SIZE);
        assert_eq!(model.tab_text(), "    ");
        assert!(model.surface.active_tag_names().is_empty());
    }
}
