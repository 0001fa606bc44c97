//! Check command - validate a synonym file.

use anyhow::Result;
use clap::Args;

use super::{CommandExecutor, TableArgs};

/// Validate a synonym file and show its pairs.
#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub table: TableArgs,

    /// Print every pair (primary = bit 0, alternate = bit 1)
    #[arg(short, long)]
    pub list: bool,
}

impl CommandExecutor for CheckCommand {
    fn execute(&self) -> Result<()> {
        let stego = self.table.load()?;
        let table = stego.table();

        println!("Synonym file OK: {} pairs", table.len());
        println!("  Sentinel: 0x{:02X}", stego.sentinel());

        if self.list {
            println!();
            for (i, pair) in table.iter().enumerate() {
                println!("  {:>4}  {} / {}", i, pair.primary, pair.alternate);
            }
        }

        Ok(())
    }
}
