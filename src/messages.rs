//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::keymap::Keystroke;

/// Input events delivered by the UI layer, in the order they happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// A key went down. Returned [`Propagation`] decides whether the surface
    /// still runs its native handling for the key.
    KeyPress(Keystroke),
    /// A key came up, after any native handling of the press
    KeyRelease(Keystroke),
}

/// Whether the surface's native key handling should run after `update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Let the surface apply its default behavior
    Continue,
    /// The event was fully handled; suppress the default
    Stop,
}

impl Propagation {
    pub fn is_stop(self) -> bool {
        self == Propagation::Stop
    }
}
