//! Keyboard input types
//!
//! The UI layer translates its native key events into [`Keystroke`]s and
//! feeds them to the controller as press/release messages.
//!
//! ```text
//! native key event → Keystroke → Msg::KeyPress / Msg::KeyRelease → update()
//! ```

mod parse;
mod types;

pub use parse::{parse_key_string, KeyParseError};
pub use types::{KeyCode, Keystroke, Modifiers};
