mod check;
mod dump;
mod init;

pub use check::*;
use crate::conf::DEFAULT_CONFIG_FILE;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfCmd {
    /// Validate a config file and exit
    Check {
        /// Path to the config file
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },

    /// Print the effective configuration
    Dump {
        /// Path to the config file (built-in defaults when omitted)
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a default config file
    Init {
        /// Path of the file to create
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfCmd) -> anyhow::Result<()> {
    match cmd {
        ConfCmd::Check { path } => check(&path),
        ConfCmd::Dump { path, json, yaml } => dump(path.as_deref(), yaml && !json),
        ConfCmd::Init { path } => init(&path),
    }
}
