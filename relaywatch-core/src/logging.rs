use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostics logging.
///
/// - Level filtering comes from `RUST_LOG`, defaulting to `info`
/// - Events are written as flattened JSON
/// - Output goes to stderr; stdout carries command results only
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}

/// Pick the summary format when the caller did not ask for one.
pub fn default_output_format() -> OutputFormat {
    if io::stdout().is_terminal() {
        OutputFormat::Pretty
    } else {
        OutputFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Pretty,
}
