//! Encode command - hide a message in a carrier text.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::{read_carrier, CommandExecutor, TableArgs};

/// Hide a message inside a carrier text by swapping synonyms.
///
/// The modified text is printed to stdout unless --output or --in-place is given.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    #[command(flatten)]
    pub table: TableArgs,

    /// Path to the carrier text file
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// Message to hide (reads from stdin if not provided)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Write the modified text to this file
    #[arg(short, long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the carrier file with the modified text
    #[arg(long)]
    pub in_place: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let stego = self.table.load()?;
        let carrier = read_carrier(&self.carrier)?;

        let message = match &self.message {
            Some(m) => m.clone(),
            None => {
                eprintln!("Reading message from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read message from stdin")?;
                buffer.trim_end_matches(['\n', '\r']).to_string()
            }
        };

        let available = stego.capacity(&carrier);
        let required = synhide::required_bits(&message);

        let updated = stego
            .write(&carrier, &message)
            .context("Failed to hide message")?;

        let target = if self.in_place {
            Some(&self.carrier)
        } else {
            self.output.as_ref()
        };

        match target {
            Some(path) => {
                fs::write(path, &updated)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!(
                    "Hidden {} bytes using {} of {} matching words in {}",
                    message.len(),
                    required,
                    available,
                    path.display()
                );
            }
            None => print!("{}", updated),
        }

        Ok(())
    }
}
