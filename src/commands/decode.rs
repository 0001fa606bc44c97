//! Decode command - read a hidden message from a text.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::{read_carrier, CommandExecutor, TableArgs};

/// Read a message hidden with the same synonym file.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    #[command(flatten)]
    pub table: TableArgs,

    /// Path to the text containing the hidden message
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// Write the message to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let stego = self.table.load()?;
        let carrier = read_carrier(&self.carrier)?;

        let secret = stego
            .read(&carrier)
            .with_context(|| format!("Failed to read a message from {}", self.carrier.display()))?;

        match &self.output {
            Some(path) => {
                fs::write(path, &secret)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("Decoded {} bytes to {}", secret.len(), path.display());
            }
            None => println!("{}", secret),
        }

        Ok(())
    }
}
