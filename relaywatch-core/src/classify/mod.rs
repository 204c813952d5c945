//! Destination -> platform classification.
//!
//! Classification runs in three steps:
//!
//! 1. The lower-cased hostname is checked against an ordered list of host rules. A rule matches
//!    when any of its needles is a substring of the hostname; the first matching rule wins.
//! 2. When no host rule matches and an IP literal is available, the address is checked against an
//!    ordered list of CIDR rules.
//! 3. Anything left over is [`PLATFORM_OTHER`].
//!
//! The rule tables are plain data. Operators can put their own rules in front of the built-in ones
//! via configuration without touching the algorithm.

mod builtin;
mod classifier;
mod error;

#[cfg(test)]
mod tests;

pub use classifier::*;
pub use error::ClassifierError;

/// Platform assigned to destinations no rule recognizes.
pub const PLATFORM_OTHER: &str = "other";

/// Classify against the built-in rule tables.
pub fn classify(destination_host: &str, destination_ip: Option<&str>) -> &'static str {
    Classifier::builtin_shared().classify(destination_host, destination_ip)
}
