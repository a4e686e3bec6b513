//! Logging as GitHub workflow commands
//!
//! Log records are written to stdout, where the runner picks them up:
//! - `debug` → `::debug::` (shown when step debug logging is enabled)
//! - `warn` → `::warning::`
//! - `error` → `::error::` (annotates the run)
//! - `info`/`trace` → plain lines
//!
//! The filter comes from `RUST_LOG` and defaults to [`DEFAULT_FILTER`].

use env_logger::{Builder, Env, Target};
use log::Level;
use std::io::Write;

/// Debug output for our crates, info for dependencies
pub const DEFAULT_FILTER: &str =
    "info,pr_limits=debug,pr_limits_config=debug,pr_limits_action=debug,gh_client=debug";

/// Initialize stdout logging
pub fn init() {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stdout)
        .format(|buf, record| {
            let line = format_line(record.level(), &record.args().to_string());
            writeln!(buf, "{}", line)
        })
        .init();
}

/// Render one log line, prefixed with the workflow command for `level`
pub fn format_line(level: Level, message: &str) -> String {
    match command(level) {
        Some(name) => format!("::{}::{}", name, escape_data(message)),
        None => message.to_string(),
    }
}

fn command(level: Level) -> Option<&'static str> {
    match level {
        Level::Error => Some("error"),
        Level::Warn => Some("warning"),
        Level::Debug => Some("debug"),
        Level::Info | Level::Trace => None,
    }
}

/// Escape a workflow command message so it stays on one line
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
