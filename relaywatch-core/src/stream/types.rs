use serde::{Deserialize, Serialize};

/// One contributing log origin, as announced by a `metadata` chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    #[serde(rename = "node_id", default)]
    pub source_id: Option<i64>,

    #[serde(rename = "node_name", default)]
    pub source_name: String,

    #[serde(rename = "is_master", default)]
    pub is_primary: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamChunk {
    Logs {
        source_id: Option<i64>,
        source_name: String,
        lines: Vec<String>,
    },
    Metadata {
        sources: Vec<SourceInfo>,
    },
    SourceError {
        source_id: Option<i64>,
        source_name: Option<String>,
        message: String,
    },
    Complete,
    FatalError {
        message: String,
        detail: Option<String>,
    },
}

impl StreamChunk {
    pub fn kind(&self) -> &'static str {
        match self {
            StreamChunk::Logs { .. } => "logs",
            StreamChunk::Metadata { .. } => "metadata",
            StreamChunk::SourceError { .. } => "error",
            StreamChunk::Complete => "complete",
            StreamChunk::FatalError { .. } => "fatal",
        }
    }
}
