use crate::stream::SourceInfo;
use std::collections::BTreeSet;

const UNKNOWN_SOURCE: &str = "unknown";

/// Per-source bookkeeping used to decide how a run reports failures.
#[derive(Debug, Default)]
pub(crate) struct SourceDiagnostics {
    sources: Vec<SourceInfo>,
    failed: BTreeSet<String>,
    first_failure: Option<String>,
    delivered: BTreeSet<String>,
}

impl SourceDiagnostics {
    pub(crate) fn set_sources(&mut self, sources: Vec<SourceInfo>) {
        self.sources = sources;
    }

    pub(crate) fn record_lines(&mut self, source_name: &str, count: usize) {
        if count > 0 {
            self.delivered.insert(source_name.to_string());
        }
    }

    pub(crate) fn record_failure(
        &mut self,
        source_id: Option<i64>,
        source_name: Option<&str>,
        message: &str,
    ) {
        let identity = match (source_name, source_id) {
            (Some(name), _) if !name.is_empty() => name.to_string(),
            (_, Some(id)) => id.to_string(),
            _ => UNKNOWN_SOURCE.to_string(),
        };
        self.failed.insert(identity);
        if self.first_failure.is_none() {
            self.first_failure = Some(message.to_string());
        }
    }

    pub(crate) fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Whether any source that never reported a failure delivered log lines.
    pub(crate) fn healthy_delivered(&self) -> bool {
        self.delivered.iter().any(|name| !self.failed.contains(name))
    }

    pub(crate) fn first_failure(&self) -> Option<&str> {
        self.first_failure.as_deref()
    }

    pub(crate) fn into_sources(self) -> Vec<SourceInfo> {
        self.sources
    }
}
