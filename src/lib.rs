//! Quill - a small code editor core with live highlighting
//!
//! This crate provides the controller, history, highlighter and indent engine
//! behind an editor view, implementing the Elm Architecture pattern. The
//! display widget is abstracted as a [`surface::TextSurface`].

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod surface;
pub mod syntax;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use config::EditorConfig;
pub use messages::{Msg, Propagation};
pub use model::EditorModel;
pub use surface::{MemorySurface, TextSurface};
pub use theme::Theme;
pub use update::{dispatch_keystroke, update};
