use crate::access_log::parse_line;
use crate::aggregate::Aggregator;
use crate::classify::Classifier;
use crate::conf::EngineSettings;
use crate::engine::diagnostics::SourceDiagnostics;
use crate::stream::StreamChunk;
use crate::summary::{RunOutcome, Summary, emit};
use chrono::{DateTime, Utc};
use std::ops::ControlFlow;
use tracing::{debug, info, trace, warn};

/// Transport-level failure that ends a run without data.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fatal {
    message: String,
    detail: Option<String>,
}

/// One in-flight aggregation run.
///
/// Feed chunks with [`Run::apply`] in arrival order, then consume the run with [`Run::finish`].
pub struct Run<'e> {
    settings: &'e EngineSettings,
    aggregator: Aggregator<'e>,
    diagnostics: SourceDiagnostics,
    fatal: Option<Fatal>,
    closed: bool,
    lines_seen: u64,
    lines_dropped: u64,
}

impl<'e> Run<'e> {
    pub(crate) fn new(
        settings: &'e EngineSettings,
        classifier: &'e Classifier,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            settings,
            aggregator: Aggregator::new(classifier, settings.limits(), now),
            diagnostics: SourceDiagnostics::default(),
            fatal: None,
            closed: false,
            lines_seen: 0,
            lines_dropped: 0,
        }
    }

    /// Apply one chunk.
    ///
    /// Returns `Break` once the stream is over (`complete` or a fatal error); later chunks are
    /// ignored.
    pub fn apply(&mut self, chunk: StreamChunk) -> ControlFlow<()> {
        if self.closed {
            trace!(kind = chunk.kind(), "chunk after end of stream ignored");
            return ControlFlow::Break(());
        }

        match chunk {
            StreamChunk::Logs {
                source_id,
                source_name,
                lines,
            } => {
                debug!(
                    source_id = ?source_id,
                    source = %source_name,
                    lines = lines.len(),
                    "logs chunk"
                );
                self.diagnostics.record_lines(&source_name, lines.len());
                for line in &lines {
                    self.ingest_line(line, &source_name);
                }
            }
            StreamChunk::Metadata { sources } => {
                debug!(sources = sources.len(), "metadata chunk");
                self.diagnostics.set_sources(sources);
            }
            StreamChunk::SourceError {
                source_id,
                source_name,
                message,
            } => {
                warn!(
                    source_id = ?source_id,
                    source = source_name.as_deref().unwrap_or("-"),
                    error = %message,
                    "source failed"
                );
                self.diagnostics
                    .record_failure(source_id, source_name.as_deref(), &message);
            }
            StreamChunk::Complete => {
                debug!("stream complete");
                self.closed = true;
                return ControlFlow::Break(());
            }
            StreamChunk::FatalError { message, detail } => {
                self.abort(&message, detail);
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }

    /// End the run as a transport failure. Aggregates collected so far are discarded.
    pub fn abort(&mut self, message: &str, detail: Option<String>) {
        warn!(error = %message, detail = detail.as_deref().unwrap_or("-"), "stream failed");
        self.aggregator.clear();
        self.fatal = Some(Fatal {
            message: message.to_string(),
            detail,
        });
        self.closed = true;
    }

    fn ingest_line(&mut self, line: &str, source_name: &str) {
        self.lines_seen += 1;
        let Some(event) = parse_line(line) else {
            self.lines_dropped += 1;
            trace!(source = %source_name, "unparseable line dropped");
            return;
        };
        self.aggregator.ingest(&event, source_name);
    }

    pub fn matched_entries(&self) -> u64 {
        self.aggregator.matched_entries()
    }

    /// Whether `complete` or a fatal error has been applied.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Finalize the run into its summary, stamped with the current wall clock.
    pub fn finish(self) -> Summary {
        self.finish_at(Utc::now())
    }

    /// Finalize the run with an explicit emission time.
    pub fn finish_at(self, generated_at: DateTime<Utc>) -> Summary {
        let matched = self.aggregator.matched_entries();
        let failed_sources = self.diagnostics.failed_count();

        let (error, detail) = match &self.fatal {
            Some(fatal) => (Some(fatal.message.clone()), fatal.detail.clone()),
            None if failed_sources == 0 => (None, None),
            None if !self.diagnostics.healthy_delivered() && matched == 0 => (
                self.diagnostics.first_failure().map(str::to_string),
                None,
            ),
            None => (
                None,
                Some(format!("partial data from {failed_sources} source(s)")),
            ),
        };

        debug!(
            lines = self.lines_seen,
            dropped_lines = self.lines_dropped,
            "line parsing done"
        );
        info!(
            matched_entries = matched,
            clients = self.aggregator.client_count(),
            unmatched = self.aggregator.unmatched().len(),
            failed_sources,
            fatal = self.fatal.is_some(),
            "run finished"
        );

        let outcome = RunOutcome {
            sources: self.diagnostics.into_sources(),
            error,
            detail,
        };
        emit(self.aggregator.into_parts(), outcome, self.settings, generated_at)
    }
}
