use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Accepted,
    Rejected,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Accepted => "accepted",
            Action::Rejected => "rejected",
        }
    }
}

/// One connection attempt extracted from an access-log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedEvent {
    /// UTC epoch milliseconds; `None` when the timestamp did not form a valid date-time.
    pub timestamp_ms: Option<i64>,
    pub action: Action,
    /// Source address without its port.
    pub source_ip: String,
    /// Destination without its port.
    pub destination_host: String,
    /// Set when the destination host is itself an IP literal.
    pub destination_ip: Option<String>,
    /// Inbound/outbound route tag, empty when absent.
    pub route: String,
    pub identity_tag: Option<String>,
    /// Lower-cased identity, unique per client.
    pub user_key: String,
    pub user_label: String,
}

impl ParsedEvent {
    pub fn is_accepted(&self) -> bool {
        self.action == Action::Accepted
    }
}
