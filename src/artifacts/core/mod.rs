//! Core utilities and shared helpers
//!
//! This module contains the helpers shared by both binaries: splitting command
//! output into lines, installing the log subscriber and reporting fatal errors.

use colored::Colorize;
use is_terminal::IsTerminal;
use std::io::Write;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Split `raw` after every `\n`, keeping the terminator on each line.
///
/// The empty segment after a trailing newline is dropped, but blank lines are
/// kept since they still carry their `\n`.
///
/// ## Example
///
/// ```
/// use repos::artifacts::core::lines_inclusive;
///
/// assert_eq!(lines_inclusive(" M a.txt\n?? b.txt\n"), vec![" M a.txt\n", "?? b.txt\n"]);
/// assert!(lines_inclusive("").is_empty());
/// ```
pub fn lines_inclusive(raw: &str) -> Vec<String> {
    raw.split_inclusive('\n').map(str::to_owned).collect()
}

/// Install the global `tracing` subscriber writing to stderr.
///
/// The filter is read from `RUST_LOG` and falls back to `warn`, so regular
/// runs only print repository paths.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // a second init (e.g. from tests) is a no-op
    let _ = subscriber.try_init();
}

/// Print a fatal error as a single line on stderr.
///
/// The whole context chain is rendered with `{:#}` so the message stays on
/// one line; the label is only colored when stderr is a terminal.
pub fn report_error(error: &anyhow::Error) {
    let mut stderr = std::io::stderr();
    colored::control::set_override(stderr.is_terminal());

    let _ = writeln!(stderr, "{} {:#}", "Error:".red().bold(), error);
}
