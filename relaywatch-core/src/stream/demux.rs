use crate::stream::types::{SourceInfo, StreamChunk};
use serde_json::Value;

/// Source name used for `logs` chunks that do not carry a `node_name`.
pub const LOCAL_SOURCE_NAME: &str = "local";

const UNKNOWN_SOURCE_ERROR: &str = "source error";
const UNKNOWN_FATAL_ERROR: &str = "request failed";

/// Decode a single NDJSON line into a chunk.
///
/// Returns `None` for anything that is not a recognizable chunk: blank lines, invalid JSON,
/// non-object JSON, unknown `type` values, and objects carrying neither `type` nor `error`.
pub fn decode_chunk(line: &str) -> Option<StreamChunk> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<Value>(line) else {
        return None;
    };

    let object = value.as_object()?;

    match object.get("type").and_then(Value::as_str) {
        Some("logs") => Some(decode_logs(&value)),
        Some("metadata") => decode_metadata(&value),
        Some("error") => Some(decode_source_error(&value)),
        Some("complete") => Some(StreamChunk::Complete),
        Some(_) => None,
        // No discriminator at all: only a top-level `error` makes this a whole-request failure.
        None => object.get("error").map(|error| StreamChunk::FatalError {
            message: text_of(error).unwrap_or_else(|| UNKNOWN_FATAL_ERROR.to_string()),
            detail: object.get("detail").and_then(text_of),
        }),
    }
}

fn decode_logs(value: &Value) -> StreamChunk {
    let lines = value
        .get("lines")
        .and_then(Value::as_array)
        .map(|lines| {
            lines
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    StreamChunk::Logs {
        source_id: value.get("node_id").and_then(Value::as_i64),
        source_name: value
            .get("node_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(LOCAL_SOURCE_NAME)
            .to_string(),
        lines,
    }
}

fn decode_metadata(value: &Value) -> Option<StreamChunk> {
    let sources = value.get("sources")?.as_array()?;

    let sources = sources
        .iter()
        .filter_map(|s| serde_json::from_value::<SourceInfo>(s.clone()).ok())
        .collect();

    Some(StreamChunk::Metadata { sources })
}

fn decode_source_error(value: &Value) -> StreamChunk {
    StreamChunk::SourceError {
        source_id: value.get("node_id").and_then(Value::as_i64),
        source_name: value
            .get("node_name")
            .and_then(Value::as_str)
            .map(str::to_string),
        message: value
            .get("error")
            .and_then(text_of)
            .unwrap_or_else(|| UNKNOWN_SOURCE_ERROR.to_string()),
    }
}

/// Strings are taken as-is; any other non-null JSON value is rendered compactly.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Lazy chunk sequence over in-memory lines.
///
/// Stops right after yielding [`StreamChunk::Complete`], even if more lines follow.
pub struct Demux<I> {
    lines: I,
    finished: bool,
}

impl<I> Demux<I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            finished: false,
        }
    }
}

impl<I, S> Iterator for Demux<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = StreamChunk;

    fn next(&mut self) -> Option<StreamChunk> {
        if self.finished {
            return None;
        }

        for line in self.lines.by_ref() {
            if let Some(chunk) = decode_chunk(line.as_ref()) {
                if matches!(chunk, StreamChunk::Complete) {
                    self.finished = true;
                }
                return Some(chunk);
            }
        }

        self.finished = true;
        None
    }
}
