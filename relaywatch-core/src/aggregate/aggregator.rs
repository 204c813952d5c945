use crate::access_log::ParsedEvent;
use crate::aggregate::client::ClientAggregate;
use crate::aggregate::unmatched::UnmatchedTracker;
use crate::classify::{Classifier, PLATFORM_OTHER};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Bounds applied while folding events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationLimits {
    pub window_seconds: u64,
    pub max_clients: usize,
    pub max_destinations_per_platform: usize,
}

impl Default for AggregationLimits {
    fn default() -> Self {
        Self {
            window_seconds: 120,
            max_clients: 500,
            max_destinations_per_platform: 20,
        }
    }
}

pub struct Aggregator<'c> {
    classifier: &'c Classifier,
    limits: AggregationLimits,
    cutoff_ms: i64,
    clients: BTreeMap<String, ClientAggregate>,
    platform_tally: BTreeMap<String, BTreeSet<String>>,
    matched_entries: u64,
    unmatched: UnmatchedTracker,
}

impl<'c> Aggregator<'c> {
    /// The recency cutoff is fixed once, from `now`, for the lifetime of the aggregator.
    pub fn new(classifier: &'c Classifier, limits: AggregationLimits, now: DateTime<Utc>) -> Self {
        let window_ms = i64::try_from(limits.window_seconds.saturating_mul(1000)).unwrap_or(i64::MAX);

        Self {
            classifier,
            limits,
            cutoff_ms: now.timestamp_millis().saturating_sub(window_ms),
            clients: BTreeMap::new(),
            platform_tally: BTreeMap::new(),
            matched_entries: 0,
            unmatched: UnmatchedTracker::new(),
        }
    }

    /// Fold one event into the aggregate state.
    ///
    /// Returns `false`, leaving the state untouched, when the event is not accepted, has no
    /// timestamp, is older than the window, or belongs to a new client while the client map is
    /// full.
    pub fn ingest(&mut self, event: &ParsedEvent, source_name: &str) -> bool {
        if !event.is_accepted() {
            return false;
        }
        let Some(timestamp_ms) = event.timestamp_ms else {
            return false;
        };
        if timestamp_ms < self.cutoff_ms {
            return false;
        }
        if !self.clients.contains_key(&event.user_key) && self.clients.len() >= self.limits.max_clients
        {
            return false;
        }

        let classifier = self.classifier;
        let platform = classifier.classify(&event.destination_host, event.destination_ip.as_deref());

        let client = self
            .clients
            .entry(event.user_key.clone())
            .or_insert_with(|| ClientAggregate::new(&event.user_key, &event.user_label, timestamp_ms));

        client.last_seen_ms = client.last_seen_ms.max(timestamp_ms);
        if !event.route.is_empty() {
            client.route = event.route.clone();
        }
        if !event.source_ip.is_empty() {
            client.source_ips.insert(event.source_ip.clone());
        }
        client.source_names.insert(source_name.to_string());
        client.event_count += 1;

        let stats = client.platform_stats.entry(platform.to_string()).or_default();
        stats.connection_count += 1;
        if stats.destinations.len() < self.limits.max_destinations_per_platform {
            stats.destinations.insert(event.destination_host.clone());
        }

        self.platform_tally
            .entry(platform.to_string())
            .or_default()
            .insert(event.user_key.clone());

        self.matched_entries += 1;

        if platform == PLATFORM_OTHER {
            self.unmatched
                .record(&event.destination_host, event.destination_ip.as_deref());
        }

        true
    }

    pub fn limits(&self) -> AggregationLimits {
        self.limits
    }

    pub fn matched_entries(&self) -> u64 {
        self.matched_entries
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn client(&self, user_key: &str) -> Option<&ClientAggregate> {
        self.clients.get(user_key)
    }

    pub fn clients(&self) -> impl Iterator<Item = &ClientAggregate> {
        self.clients.values()
    }

    pub fn platform_tally(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.platform_tally
    }

    pub fn unmatched(&self) -> &UnmatchedTracker {
        &self.unmatched
    }

    /// Drop every aggregate while keeping the cutoff and limits.
    pub(crate) fn clear(&mut self) {
        self.clients.clear();
        self.platform_tally.clear();
        self.matched_entries = 0;
        self.unmatched = UnmatchedTracker::new();
    }

    pub fn into_parts(self) -> AggregatorParts {
        AggregatorParts {
            clients: self.clients.into_values().collect(),
            platform_tally: self.platform_tally,
            matched_entries: self.matched_entries,
            unmatched: self.unmatched,
        }
    }
}

/// Final aggregate state handed to the summary emitter.
pub struct AggregatorParts {
    pub clients: Vec<ClientAggregate>,
    pub platform_tally: BTreeMap<String, BTreeSet<String>>,
    pub matched_entries: u64,
    pub unmatched: UnmatchedTracker,
}
