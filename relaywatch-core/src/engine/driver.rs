use crate::classify::{Classifier, ClassifierError};
use crate::conf::{EngineSettings, RelaywatchConfig};
use crate::engine::run::Run;
use crate::stream::{AsyncChunkReader, ChunkReader, Demux};
use crate::summary::Summary;
use chrono::{DateTime, Utc};
use std::io::BufRead;
use std::ops::ControlFlow;
use tokio::io::AsyncBufRead;

const READ_FAILED: &str = "failed to read stream";

/// Settings and classifier shared by every run.
#[derive(Debug, Clone)]
pub struct Engine {
    settings: EngineSettings,
    classifier: Classifier,
}

impl Engine {
    pub fn new(settings: EngineSettings, classifier: Classifier) -> Self {
        Self {
            settings,
            classifier,
        }
    }

    /// Build an engine from a loaded config, compiling operator classifier rules.
    pub fn from_config(config: &RelaywatchConfig) -> Result<Self, ClassifierError> {
        let classifier =
            Classifier::with_rules(&config.classifier.host_rules, &config.classifier.ip_rules)?;
        Ok(Self::new(config.engine.clone(), classifier))
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Open a run. `now` fixes the recency cutoff and the summary timestamp.
    pub fn start(&self, now: DateTime<Utc>) -> Run<'_> {
        Run::new(&self.settings, &self.classifier, now)
    }

    /// Run over already-split NDJSON lines.
    pub fn run_lines<I, S>(&self, lines: I, now: DateTime<Utc>) -> Summary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut run = self.start(now);
        for chunk in Demux::new(lines.into_iter()) {
            if run.apply(chunk).is_break() {
                break;
            }
        }
        run.finish()
    }

    /// Run over a blocking NDJSON reader.
    ///
    /// A read failure is treated like a transport-fatal chunk.
    pub fn run_reader<R: BufRead>(&self, reader: R, now: DateTime<Utc>) -> Summary {
        let mut run = self.start(now);
        let mut chunks = ChunkReader::new(reader);
        loop {
            match chunks.next_chunk() {
                Ok(Some(chunk)) => {
                    if let ControlFlow::Break(()) = run.apply(chunk) {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    run.abort(READ_FAILED, Some(e.to_string()));
                    break;
                }
            }
        }
        run.finish()
    }

    /// Async counterpart of [`Engine::run_reader`].
    pub async fn run_async<R>(&self, reader: R, now: DateTime<Utc>) -> Summary
    where
        R: AsyncBufRead + Unpin,
    {
        let mut run = self.start(now);
        let mut chunks = AsyncChunkReader::new(reader);
        loop {
            match chunks.next_chunk().await {
                Ok(Some(chunk)) => {
                    if let ControlFlow::Break(()) = run.apply(chunk) {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    run.abort(READ_FAILED, Some(e.to_string()));
                    break;
                }
            }
        }
        run.finish()
    }
}
