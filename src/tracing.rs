//! Logging setup for the headless driver
//!
//! stdout carries the rendered buffer, so console logs go to stderr and stay
//! quiet unless `RUST_LOG` asks for more:
//! - `RUST_LOG=quill::update=debug` - keystroke pipeline and indent decisions
//! - `RUST_LOG=history=debug` - undo/redo stack changes
//! - `RUST_LOG=quill::syntax=trace,quill::editable=trace` - highlight passes and snapshots
//!
//! The rolling file at `~/.config/quill/logs/quill.log` always records quill's
//! own debug events, with dependencies held at `warn`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Console directives when `RUST_LOG` is unset
const CONSOLE_DIRECTIVES: &str = "warn,quill::config=info,quill::syntax=info";

/// File directives, independent of `RUST_LOG`
const FILE_DIRECTIVES: &str = "warn,quill=debug,history=debug";

const LOG_FILE: &str = "quill.log";

fn console_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(CONSOLE_DIRECTIVES))
}

/// Install the stderr and rolling file subscribers
pub fn init() {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true)
        .with_filter(console_filter());

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new(FILE_DIRECTIVES)),
        ),
        Err(e) => {
            eprintln!("quill: file logging disabled: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
