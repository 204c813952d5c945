//! The externally visible result of a run.
//!
//! [`emit`] turns the final aggregate state plus run diagnostics into a [`Summary`], the JSON
//! document dashboards consume. [`render_summary`] draws the same data as a terminal dashboard.

mod emit;
mod render;
mod types;


pub use emit::*;
pub use render::*;
pub use types::*;
