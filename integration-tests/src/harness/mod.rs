pub mod fixtures;
pub mod tracing;

pub use fixtures::*;
pub use tracing::{CapturedEvent, capture_events};
