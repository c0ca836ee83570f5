//! Snapshot-based undo/redo history.
//!
//! Every entry is a full copy of the buffer plus the cursor. The top of the
//! undo stack is always the live state, so the stack is never empty after
//! construction and the initial state can never be undone past.

use std::collections::VecDeque;

use super::cursor::Position;

/// Maximum entries kept on each stack
pub const HISTORY_CAPACITY: usize = 50;

/// A captured (text, cursor) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub content: String,
    pub cursor: Position,
}

impl Snapshot {
    pub fn new(content: impl Into<String>, cursor: Position) -> Self {
        Self {
            content: content.into(),
            cursor,
        }
    }

    /// Snapshot of an empty buffer with the cursor at the start
    pub fn empty() -> Self {
        Self::new(String::new(), Position::START)
    }
}

/// Bounded undo/redo stacks of snapshots.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: VecDeque<Snapshot>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::empty())
    }
}

impl History {
    /// Create a history whose undo stack holds just `initial`
    pub fn new(initial: Snapshot) -> Self {
        Self::with_capacity(initial, HISTORY_CAPACITY)
    }

    /// Create a history with a custom bound (clamped to at least 1)
    pub fn with_capacity(initial: Snapshot, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut undo_stack = VecDeque::with_capacity(capacity);
        undo_stack.push_back(initial);
        Self {
            undo_stack,
            redo_stack: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record the state unless it equals the current top.
    ///
    /// Returns true when a new entry was pushed (which also clears redo).
    pub fn snapshot(&mut self, content: &str, cursor: Position) -> bool {
        if self
            .undo_stack
            .back()
            .is_some_and(|top| top.cursor == cursor && top.content == content)
        {
            tracing::trace!(%cursor, "snapshot unchanged, skipped");
            return false;
        }

        push_bounded(
            &mut self.undo_stack,
            Snapshot::new(content, cursor),
            self.capacity,
        );
        self.redo_stack.clear();
        tracing::trace!(%cursor, undo = self.undo_stack.len(), "snapshot pushed");
        true
    }

    /// Record the state only if its text differs from the top.
    ///
    /// A cursor-only change is not an edit: it neither pushes nor clears redo.
    pub fn commit_edit(&mut self, content: &str, cursor: Position) -> bool {
        if self
            .undo_stack
            .back()
            .is_some_and(|top| top.content == content)
        {
            return false;
        }
        self.snapshot(content, cursor)
    }

    /// Step back one state.
    ///
    /// Moves the live state onto the redo stack and returns the state below it,
    /// which stays on the undo stack as the new live state.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.undo_stack.len() <= 1 {
            return None;
        }
        let current = self.undo_stack.pop_back()?;
        push_bounded(&mut self.redo_stack, current, self.capacity);
        self.undo_stack.back().cloned()
    }

    /// Step forward one state.
    ///
    /// `current` is the live state captured fresh by the caller; it is pushed
    /// onto the undo stack (unless it equals the top), then the redone
    /// snapshot is pushed as the new live state and returned.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop_back()?;
        self.push_distinct(current);
        self.push_distinct(next.clone());
        Some(next)
    }

    fn push_distinct(&mut self, snapshot: Snapshot) {
        if self.undo_stack.back() != Some(&snapshot) {
            push_bounded(&mut self.undo_stack, snapshot, self.capacity);
        }
    }

    /// The live state (top of the undo stack)
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo_stack.back()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate the undo stack from oldest to newest
    pub fn undo_entries(&self) -> impl Iterator<Item = &Snapshot> {
        self.undo_stack.iter()
    }
}

fn push_bounded(stack: &mut VecDeque<Snapshot>, snapshot: Snapshot, capacity: usize) {
    stack.push_back(snapshot);
    while stack.len() > capacity {
        stack.pop_front();
    }
}

/// Stack sizes before/after an operation, for trace logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryDebug {
    pub undo: usize,
    pub redo: usize,
}

impl HistoryDebug {
    pub fn of(history: &History) -> Self {
        Self {
            undo: history.undo_count(),
            redo: history.redo_count(),
        }
    }

    /// Describe how the stacks changed, or None if they didn't
    pub fn diff(&self, other: &HistoryDebug) -> Option<String> {
        let mut changes = Vec::new();
        if self.undo != other.undo {
            changes.push(format!("undo: {} → {}", self.undo, other.undo));
        }
        if self.redo != other.redo {
            changes.push(format!("redo: {} → {}", self.redo, other.redo));
        }
        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
