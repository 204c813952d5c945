use crate::access_log::strip_port;
use crate::classify::Classifier;
use crate::conf::load_optional_config;
use anyhow::{Context, Result};
use clap::Args;
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Destination host, optionally with a port
    pub host: String,

    /// Resolved destination address
    #[arg(long)]
    pub ip: Option<String>,

    /// Path to a relaywatch.hcl config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn classify(args: ClassifyArgs) -> Result<()> {
    println!("{}", classify_host(&args)?);
    Ok(())
}

pub fn classify_host(args: &ClassifyArgs) -> Result<String> {
    let config = load_optional_config(args.config.as_deref())?;
    let classifier =
        Classifier::with_rules(&config.classifier.host_rules, &config.classifier.ip_rules)
            .context("invalid classifier rules")?;

    let host = strip_port(args.host.trim());
    // A literal address doubles as the IP when none was given.
    let ip = args
        .ip
        .as_deref()
        .or_else(|| host.parse::<IpAddr>().is_ok().then_some(host));

    Ok(classifier.classify(host, ip).to_string())
}
