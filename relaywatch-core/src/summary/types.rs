use crate::conf::Mode;
use crate::stream::SourceInfo;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub mode: Mode,
    pub sources: Vec<SourceInfo>,
    pub items: Vec<ClientSummary>,
    pub platform_counts: BTreeMap<String, u64>,
    pub platforms: Vec<PlatformShare>,
    pub matched_entries: u64,
    pub unmatched: Vec<UnmatchedEntry>,
    #[serde(serialize_with = "iso8601")]
    pub generated_at: DateTime<Utc>,
    pub lookback_lines: u64,
    pub window_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSummary {
    pub user_key: String,
    pub user_label: String,
    #[serde(serialize_with = "iso8601")]
    pub last_seen: DateTime<Utc>,
    pub route: String,
    pub connections: u64,
    /// Distinct source addresses, sorted.
    pub sources: Vec<String>,
    pub platforms: Vec<ClientPlatform>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientPlatform {
    pub platform: String,
    pub connections: u64,
    pub destinations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformShare {
    pub platform: String,
    pub count: u64,
    /// Share of distinct clients, as a ratio in `[0, 1]`.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedEntry {
    pub destination: String,
    pub destination_ip: Option<String>,
    pub platform: String,
}

fn iso8601<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
