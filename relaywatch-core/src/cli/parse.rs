use crate::access_log::parse_line;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct ParseArgs {
    /// Raw access log to read (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

pub fn parse(args: ParseArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let parsed = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            parse_events(BufReader::new(file), &mut out)?
        }
        None => parse_events(io::stdin().lock(), &mut out)?,
    };

    tracing::debug!(parsed, "access log parsed");
    Ok(())
}

/// Write one JSON event per parseable line, returning how many were written.
///
/// Invalid UTF-8 is decoded lossily, so a corrupt line is skipped like any other non-matching one.
pub fn parse_events<R: BufRead, W: Write>(mut reader: R, out: &mut W) -> Result<usize> {
    let mut parsed = 0;
    let mut buf = Vec::with_capacity(4096);
    loop {
        buf.clear();
        if reader
            .read_until(b'\n', &mut buf)
            .context("failed to read access log")?
            == 0
        {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let Some(event) = parse_line(line.trim_end()) else {
            continue;
        };
        serde_json::to_writer(&mut *out, &event)?;
        writeln!(out)?;
        parsed += 1;
    }
    out.flush()?;
    Ok(parsed)
}
