use crate::aggregate::{AggregatorParts, ClientAggregate};
use crate::conf::EngineSettings;
use crate::stream::SourceInfo;
use crate::summary::types::{ClientPlatform, ClientSummary, PlatformShare, Summary, UnmatchedEntry};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Run-level diagnostics collected from non-log chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Sources announced by the last `metadata` chunk.
    pub sources: Vec<SourceInfo>,
    pub error: Option<String>,
    pub detail: Option<String>,
}

/// Build the public summary from the final aggregate state.
pub fn emit(
    parts: AggregatorParts,
    outcome: RunOutcome,
    settings: &EngineSettings,
    generated_at: DateTime<Utc>,
) -> Summary {
    let total_clients = parts.clients.len() as u64;

    let platform_counts: BTreeMap<String, u64> = parts
        .platform_tally
        .iter()
        .map(|(platform, users)| (platform.clone(), users.len() as u64))
        .collect();

    let mut platforms: Vec<PlatformShare> = platform_counts
        .iter()
        .map(|(platform, count)| PlatformShare {
            platform: platform.clone(),
            count: *count,
            percent: if total_clients == 0 {
                0.0
            } else {
                *count as f64 / total_clients as f64
            },
        })
        .collect();
    platforms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.platform.cmp(&b.platform)));

    let mut clients = parts.clients;
    clients.sort_by(|a, b| {
        b.last_seen_ms
            .cmp(&a.last_seen_ms)
            .then_with(|| a.user_key.cmp(&b.user_key))
    });
    clients.truncate(settings.limit);

    let unmatched = parts
        .unmatched
        .into_entries()
        .into_iter()
        .map(|u| UnmatchedEntry {
            destination: u.destination_host,
            destination_ip: u.destination_ip,
            platform: u.platform.to_string(),
        })
        .collect();

    Summary {
        mode: settings.mode,
        sources: outcome.sources,
        items: clients.into_iter().map(client_summary).collect(),
        platform_counts,
        platforms,
        matched_entries: parts.matched_entries,
        unmatched,
        generated_at,
        lookback_lines: settings.lookback_lines,
        window_seconds: settings.window_seconds,
        error: outcome.error,
        detail: outcome.detail,
    }
}

fn client_summary(client: ClientAggregate) -> ClientSummary {
    let connections = client.connections();

    let mut platforms: Vec<ClientPlatform> = client
        .platform_stats
        .into_iter()
        .map(|(platform, stats)| ClientPlatform {
            platform,
            connections: stats.connection_count,
            destinations: stats.destinations.into_iter().collect(),
        })
        .collect();
    platforms.sort_by(|a, b| {
        b.connections
            .cmp(&a.connections)
            .then_with(|| a.platform.cmp(&b.platform))
    });

    ClientSummary {
        user_key: client.user_key,
        user_label: client.user_label,
        last_seen: DateTime::<Utc>::from_timestamp_millis(client.last_seen_ms).unwrap_or_default(),
        route: client.route,
        connections,
        sources: client.source_ips.into_iter().collect(),
        platforms,
    }
}
