use clap::{Parser, Subcommand};
use relaywatch_core::cli;
use relaywatch_core::cli::classify::ClassifyArgs;
use relaywatch_core::cli::conf::ConfCmd;
use relaywatch_core::cli::parse::ParseArgs;
use relaywatch_core::cli::summarize::SummarizeArgs;
use relaywatch_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "relaywatch",
    version,
    about = "relaywatch: relay access-log aggregation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate an NDJSON log stream into a summary (default input: stdin)
    Summarize(SummarizeArgs),

    /// Parse raw access-log lines into JSON events
    Parse(ParseArgs),

    /// Print the platform for a destination
    Classify(ClassifyArgs),

    /// Configuration tooling
    Conf {
        #[command(subcommand)]
        cmd: ConfCmd,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Summarize(args) => cli::summarize::summarize(args),
        Command::Parse(args) => cli::parse::parse(args),
        Command::Classify(args) => cli::classify::classify(args),
        Command::Conf { cmd } => cli::conf::run(cmd),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
