//! Command-line argument parsing for the headless driver
//!
//! Supports:
//! - Opening a file as the initial buffer
//! - Overriding the configured language and theme
//! - Replaying a keystroke script from a file or stdin

use clap::Parser;
use std::path::PathBuf;

use crate::config::EditorConfig;
use crate::keymap::{parse_key_string, Keystroke};

/// Replay keystrokes against a buffer and print the highlighted result
#[derive(Parser, Debug)]
#[command(
    name = "quill",
    version,
    about = "Replay keystrokes against a buffer and print the highlighted result"
)]
pub struct CliArgs {
    /// File to load as the initial buffer
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Grammar to use (overrides the config file)
    #[arg(short = 'l', long, value_name = "NAME")]
    pub language: Option<String>,

    /// Theme id to render with (overrides the config file)
    #[arg(short = 't', long, value_name = "ID")]
    pub theme: Option<String>,

    /// Keystroke script, one key per line ("-" reads stdin)
    #[arg(short = 's', long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Print the tagged ranges after the buffer
    #[arg(long)]
    pub dump_tags: bool,

    /// Print the buffer without colors
    #[arg(long)]
    pub plain: bool,
}

/// Where keystrokes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// No script; the buffer is printed as loaded
    None,
    Stdin,
    File(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Config file values with CLI overrides applied
    pub editor: EditorConfig,
    pub file: Option<PathBuf>,
    pub script: ScriptSource,
    pub dump_tags: bool,
    pub plain: bool,
}

impl CliArgs {
    /// Merge parsed CLI args over the loaded config.
    ///
    /// `stdin_is_terminal` decides whether stdin is read as a script when no
    /// `--script` is given.
    pub fn into_config(
        self,
        mut editor: EditorConfig,
        stdin_is_terminal: bool,
    ) -> Result<StartupConfig, String> {
        if let Some(path) = &self.file {
            if path.is_dir() {
                return Err(format!("Cannot open a directory: {}", path.display()));
            }
        }

        if let Some(language) = self.language {
            editor.language = language;
        }
        if let Some(theme) = self.theme {
            editor.theme = theme;
        }

        let script = match self.script {
            Some(path) if path.as_os_str() == "-" => ScriptSource::Stdin,
            Some(path) => ScriptSource::File(path),
            None if !stdin_is_terminal => ScriptSource::Stdin,
            None => ScriptSource::None,
        };

        Ok(StartupConfig {
            editor,
            file: self.file,
            script,
            dump_tags: self.dump_tags,
            plain: self.plain,
        })
    }
}

/// Parse a keystroke script: one key string per line, blank lines and
/// `#` comments skipped. A line holding just `#` is the hash key.
pub fn parse_script(script: &str) -> Result<Vec<Keystroke>, String> {
    script
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim();
            if line.is_empty() || (line.starts_with('#') && line.len() > 1) {
                return None;
            }
            Some(
                parse_key_string(line)
                    .map_err(|e| format!("Script line {}: {}", index + 1, e)),
            )
        })
        .collect()
}
