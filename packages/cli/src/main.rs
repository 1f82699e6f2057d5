mod commands;

use clap::{Parser, Subcommand};
use commands::{get, list, GetArgs, ListArgs};

/// Propfile CLI - read INI-like property files
#[derive(Parser, Debug)]
#[command(name = "propfile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value of a single property
    Get(GetArgs),

    /// List every property in a file
    List(ListArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Get(args) => get(args),
        Command::List(args) => list(args),
    }
}
