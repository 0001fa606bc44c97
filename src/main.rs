//! Synhide - hide text in text
//!
//! A CLI tool that hides messages in ordinary prose by swapping words for
//! their synonyms, and reads them back.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CapacityCommand, CheckCommand, CommandExecutor, DecodeCommand, EncodeCommand};

/// Synhide - hide text in text
///
/// Each word of the carrier that appears in the synonym file carries one bit
/// of the secret. Anyone with the same synonym file can read it back.
#[derive(Parser)]
#[command(name = "synhide")]
#[command(version)]
#[command(about = "Hide messages in text by swapping synonyms")]
#[command(long_about = None)]
struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message in a carrier text
    Encode(EncodeCommand),

    /// Read a hidden message from a text
    Decode(DecodeCommand),

    /// Show how much a carrier text can hold
    Capacity(CapacityCommand),

    /// Validate a synonym file
    Check(CheckCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Encode(cmd) => cmd,
            Commands::Decode(cmd) => cmd,
            Commands::Capacity(cmd) => cmd,
            Commands::Check(cmd) => cmd,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("synhide=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("synhide=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    cli.command.executor().execute()
}
