use crate::classify::PLATFORM_OTHER;
use indexmap::IndexMap;

/// A destination no classifier rule recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedDestination {
    pub destination_host: String,
    pub destination_ip: Option<String>,
    pub platform: &'static str,
}

/// First-seen collection of unclassified destinations, kept for operator review.
#[derive(Debug, Default)]
pub struct UnmatchedTracker {
    entries: IndexMap<String, UnmatchedDestination>,
}

impl UnmatchedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a destination. Later sightings of the same host/ip pair are ignored.
    pub fn record(&mut self, destination_host: &str, destination_ip: Option<&str>) {
        let key = format!("{}:{}", destination_host, destination_ip.unwrap_or_default());

        self.entries
            .entry(key)
            .or_insert_with(|| UnmatchedDestination {
                destination_host: destination_host.to_string(),
                destination_ip: destination_ip.map(str::to_string),
                platform: PLATFORM_OTHER,
            });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnmatchedDestination> {
        self.entries.values()
    }

    pub fn into_entries(self) -> Vec<UnmatchedDestination> {
        self.entries.into_values().collect()
    }
}
