use indexmap::IndexSet;
use std::collections::{BTreeMap, BTreeSet};

/// Connection statistics for one (client, platform) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformStats {
    pub connection_count: u64,
    /// Distinct destination hosts in first-seen order, capped by the aggregation limits.
    pub destinations: IndexSet<String>,
}

/// Rolled-up statistics for one identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAggregate {
    pub user_key: String,
    pub user_label: String,
    pub last_seen_ms: i64,
    /// Route of the most recent event that carried one.
    pub route: String,
    pub source_ips: BTreeSet<String>,
    pub source_names: BTreeSet<String>,
    pub event_count: u64,
    pub platform_stats: BTreeMap<String, PlatformStats>,
}

impl ClientAggregate {
    pub(crate) fn new(user_key: &str, user_label: &str, first_seen_ms: i64) -> Self {
        Self {
            user_key: user_key.to_string(),
            user_label: user_label.to_string(),
            last_seen_ms: first_seen_ms,
            route: String::new(),
            source_ips: BTreeSet::new(),
            source_names: BTreeSet::new(),
            event_count: 0,
            platform_stats: BTreeMap::new(),
        }
    }

    /// Distinct source addresses seen for this client.
    ///
    /// Falls back to the raw event count when no source address was recorded, which only happens
    /// for events without a usable source field.
    pub fn connections(&self) -> u64 {
        if self.source_ips.is_empty() {
            self.event_count
        } else {
            self.source_ips.len() as u64
        }
    }
}
