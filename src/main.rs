use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal, Read, Write};

use quill::cli::{parse_script, CliArgs, ScriptSource, StartupConfig};
use quill::config_paths;
use quill::syntax::RuleTable;
use quill::theme::{load_theme, Theme};
use quill::view::{format_tags, render_ansi};
use quill::{dispatch_keystroke, EditorConfig, EditorModel, MemorySurface};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    quill::tracing::init();

    let startup = args
        .into_config(EditorConfig::load(), io::stdin().is_terminal())
        .map_err(anyhow::Error::msg)?;

    let theme = load_theme(&startup.editor.theme).unwrap_or_else(|e| {
        tracing::warn!("Failed to load theme '{}': {}, using default", startup.editor.theme, e);
        Theme::default()
    });

    let mut rules = RuleTable::builtin();
    if let Some(dir) = config_paths::languages_dir() {
        rules.load_user_languages(&dir);
    }
    if rules.rules_for(&startup.editor.language).is_none() {
        tracing::warn!(
            "No grammar for '{}' (available: {}), highlighting disabled",
            startup.editor.language,
            rules.languages().join(", ")
        );
    }

    let surface = load_surface(&startup)?;
    let mut model = EditorModel::new(surface, rules, startup.editor.clone(), theme);

    let script = read_script(&startup.script)?;
    let keystrokes = parse_script(&script).map_err(anyhow::Error::msg)?;
    tracing::debug!(count = keystrokes.len(), "replaying keystrokes");
    for keystroke in keystrokes {
        dispatch_keystroke(&mut model, keystroke);
    }

    let text = model.text();
    let mut stdout = io::stdout().lock();
    if startup.plain {
        write!(stdout, "{}", text)?;
    } else {
        write!(stdout, "{}", render_ansi(&text, model.surface.tags(), &model.theme))?;
    }
    if !text.ends_with('\n') {
        writeln!(stdout)?;
    }
    if startup.dump_tags {
        write!(stdout, "{}", format_tags(&text, model.surface.tags()))?;
    }
    stdout.flush()?;

    Ok(())
}

/// Initial buffer: the file's content, or empty for a new file
fn load_surface(startup: &StartupConfig) -> Result<MemorySurface> {
    let Some(path) = &startup.file else {
        return Ok(MemorySurface::new());
    };
    if !path.exists() {
        tracing::info!("{} does not exist, starting with an empty buffer", path.display());
        return Ok(MemorySurface::new());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(MemorySurface::with_text(&text))
}

fn read_script(source: &ScriptSource) -> Result<String> {
    match source {
        ScriptSource::None => Ok(String::new()),
        ScriptSource::Stdin => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read keystroke script from stdin")?;
            Ok(script)
        }
        ScriptSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
    }
}
