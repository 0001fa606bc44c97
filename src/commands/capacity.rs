//! Capacity command - how much a carrier can hold.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use synhide::{required_bits, BITS_PER_BYTE};

use super::{read_carrier, CommandExecutor, TableArgs};

/// Show how many bytes a carrier text can hide.
#[derive(Args, Debug)]
pub struct CapacityCommand {
    #[command(flatten)]
    pub table: TableArgs,

    /// Path to the carrier text file
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// Also check whether this message would fit
    #[arg(short, long)]
    pub message: Option<String>,
}

impl CommandExecutor for CapacityCommand {
    fn execute(&self) -> Result<()> {
        let stego = self.table.load()?;
        let carrier = read_carrier(&self.carrier)?;

        let bits = stego.capacity(&carrier);
        let max_bytes = (bits / BITS_PER_BYTE).saturating_sub(1);

        println!("Carrier Capacity");
        println!("================");
        println!("  Matching words: {}", bits);
        println!("  Max secret size: {} bytes", max_bytes);

        if let Some(message) = &self.message {
            let required = required_bits(message);
            let status = if required <= bits { "FITS" } else { "TOO LARGE" };
            println!("  Message needs: {} words", required);
            println!("  Status: {}", status);
        }

        Ok(())
    }
}
