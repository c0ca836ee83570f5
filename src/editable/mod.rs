//! Text storage, cursor addressing and undo history.
//!
//! - [`RopeBuffer`]: multi-line buffer backed by `ropey::Rope`
//! - [`Position`]: 1-indexed line, 0-indexed column
//! - [`History`]: bounded undo/redo stacks of [`Snapshot`]s

mod buffer;
mod cursor;
mod history;

pub use buffer::RopeBuffer;
pub use cursor::Position;
pub use history::{History, HistoryDebug, Snapshot, HISTORY_CAPACITY};
