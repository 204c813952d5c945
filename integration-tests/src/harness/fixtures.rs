use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};
use std::path::PathBuf;

/// The instant every fixture is written against: 2024-01-01T10:01:00Z.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 1, 0).unwrap()
}

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// An accepted tcp access line on 2024/01/01.
pub fn accepted(time: &str, src: &str, dest: &str) -> String {
    format!("2024/01/01 {time} from {src}:40000 accepted tcp:{dest}:443 [direct]")
}

pub fn tagged(time: &str, src: &str, dest: &str, tag: &str) -> String {
    format!("{} email: {tag}", accepted(time, src, dest))
}

pub fn logs_chunk(id: i64, name: &str, lines: &[String]) -> String {
    json!({"type": "logs", "node_id": id, "node_name": name, "lines": lines}).to_string()
}

pub fn metadata_chunk(sources: &[(i64, &str, bool)]) -> String {
    let sources: Vec<Value> = sources
        .iter()
        .map(|(id, name, is_master)| {
            json!({"node_id": id, "node_name": name, "is_master": is_master, "connected": true})
        })
        .collect();
    json!({"type": "metadata", "sources": sources}).to_string()
}

pub fn source_error_chunk(id: i64, name: &str, error: &str) -> String {
    json!({"type": "error", "node_id": id, "node_name": name, "error": error}).to_string()
}

pub fn fatal_chunk(error: &str, detail: &str) -> String {
    json!({"error": error, "detail": detail}).to_string()
}

pub fn complete_chunk() -> String {
    json!({"type": "complete"}).to_string()
}

/// Join chunks into one NDJSON document.
pub fn ndjson(chunks: &[String]) -> String {
    let mut out = String::new();
    for c in chunks {
        out.push_str(c);
        out.push('\n');
    }
    out
}
