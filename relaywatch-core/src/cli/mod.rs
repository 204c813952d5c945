//! Command handlers behind the `relaywatch` binary.
//!
//! Each handler takes its parsed `clap` arguments and returns `anyhow::Result`; results go to
//! stdout, diagnostics go through `tracing`.

pub mod classify;
pub mod conf;
pub mod parse;
pub mod summarize;

#[cfg(test)]
mod tests;
