//! Per-identity aggregation of accepted connection events.
//!
//! The aggregator is the only stateful piece of a run. It is created fresh for every run, mutated
//! by a single sequential pass and handed to the summary emitter at the end. Nothing is shared
//! across runs and nothing here takes a lock.

mod aggregator;
mod client;
mod unmatched;

#[cfg(test)]
mod tests;

pub use aggregator::*;
pub use client::*;
pub use unmatched::*;
