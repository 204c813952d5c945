//! Relay access-log lines.
//!
//! A relay writes one line per connection attempt:
//!
//! ```text
//! 2024/01/01 10:00:00.123 from tcp:10.0.0.5:41223 accepted tcp:t.me:443 [vless-in >> direct] email: alice@example.com
//! ```
//!
//! [`parse_line`] extracts a [`ParsedEvent`] from such a line or reports "no match".

mod address;
mod parse;
mod timestamp;
mod types;

#[cfg(test)]
mod tests;

pub use address::{is_ipv6_literal, strip_port};
pub use parse::*;
pub use timestamp::parse_timestamp_ms;
pub use types::*;
