//! NDJSON chunk stream.
//!
//! The transport in front of the engine delivers one JSON object per line. Each object is either a
//! chunk belonging to a multi-source log stream (`logs`, `metadata`, `error`, `complete`) or a
//! whole-request failure (`{"error": ..., "detail": ...}`). This module turns those lines into
//! [`StreamChunk`] values.
//!
//! Lines that are not JSON, or JSON that matches none of the known shapes, are skipped without a
//! trace in the output. Log noise is expected here and must never break a run.

mod demux;
mod reader;
mod types;


pub use demux::*;
pub use reader::*;
pub use types::*;
