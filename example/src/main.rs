mod alternation;
mod csv;
mod repeat;

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "example", about = "Walks through the unicomb combinators")]
struct Cli {
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run every demo (the default)
    Demo,
    /// Parse TEXT as a CSV document and print its rows
    Csv {
        text: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            repeat::main();
            alternation::main();
            csv::main();
            ExitCode::SUCCESS
        }
        Command::Csv { text } => csv::print(&text),
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "warn",
        1 => "example=debug,unicomb_core=debug,unicomb_parsers=debug",
        _ => "example=trace,unicomb_core=trace,unicomb_parsers=trace",
    }
}
