use crate::conf::{Mode, RelaywatchConfig, load_optional_config, validate_config};
use crate::engine::Engine;
use crate::logging::{OutputFormat, default_output_format};
use crate::summary::{Summary, render_summary};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct SummarizeArgs {
    /// NDJSON stream to read (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to a relaywatch.hcl config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ignore events older than this many seconds
    #[arg(long)]
    pub window_seconds: Option<u64>,

    /// Maximum number of clients in the summary
    #[arg(long)]
    pub limit: Option<usize>,

    /// Lines fetched per source, echoed in the summary
    #[arg(long)]
    pub lookback_lines: Option<u64>,

    /// Dashboard side reported in the summary
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Reference time for the window cutoff, as RFC 3339 (defaults to now)
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,

    /// Print the summary as JSON
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    /// Print the summary as a text dashboard
    #[arg(long)]
    pub pretty: bool,
}

impl SummarizeArgs {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.pretty {
            OutputFormat::Pretty
        } else {
            default_output_format()
        }
    }
}

pub fn summarize(args: SummarizeArgs) -> Result<()> {
    let format = args.output_format();
    let summary = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            build_summary(&args, BufReader::new(file))?
        }
        None => build_summary(&args, io::stdin().lock())?,
    };

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    write_summary(&summary, format, color, &mut stdout.lock())
}

/// Resolve configuration for `args` and run the engine over `reader`.
pub fn build_summary<R: BufRead>(args: &SummarizeArgs, reader: R) -> Result<Summary> {
    let config = resolve_config(args)?;
    let engine = Engine::from_config(&config).context("invalid classifier rules")?;
    let now = args.now.unwrap_or_else(Utc::now);

    let summary = engine.run_reader(reader, now);
    if let Some(error) = &summary.error {
        tracing::warn!(error = %error, "summary carries an error");
    }
    Ok(summary)
}

/// File values first, then command-line overrides, validated together.
pub fn resolve_config(args: &SummarizeArgs) -> Result<RelaywatchConfig> {
    let mut config = load_optional_config(args.config.as_deref())?;

    let engine = &mut config.engine;
    if let Some(window_seconds) = args.window_seconds {
        engine.window_seconds = window_seconds;
    }
    if let Some(limit) = args.limit {
        engine.limit = limit;
    }
    if let Some(lookback_lines) = args.lookback_lines {
        engine.lookback_lines = lookback_lines;
    }
    if let Some(mode) = args.mode {
        engine.mode = mode;
    }

    validate_config(&config)?;
    Ok(config)
}

pub fn write_summary<W: Write>(
    summary: &Summary,
    format: OutputFormat,
    color: bool,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, summary).context("failed to encode summary")?;
            writeln!(out)?;
        }
        OutputFormat::Pretty => write!(out, "{}", render_summary(summary, color))?,
    }
    out.flush()?;
    Ok(())
}
