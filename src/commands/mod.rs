//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod capacity;
mod check;
mod decode;
mod encode;

pub use capacity::CapacityCommand;
pub use check::CheckCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use synhide::{Settings, Steganograph, SynonymTable};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Synonym table selection shared by every command.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Path to the JSON synonym file
    /// Falls back to `synonyms` in ~/.synhide/config.toml
    #[arg(short, long)]
    pub synonyms: Option<PathBuf>,

    /// Sentinel byte marking the end of the secret (default: 255)
    /// Must match between encoding and decoding
    #[arg(long)]
    pub sentinel: Option<u8>,
}

impl TableArgs {
    /// Resolves the synonym file and sentinel, then builds the codec.
    pub fn load(&self) -> Result<Steganograph> {
        let settings = Settings::load().context("Failed to load settings")?;

        let path = self
            .synonyms
            .clone()
            .or(settings.synonyms.clone())
            .context("No synonym file given. Use --synonyms or set `synonyms` in ~/.synhide/config.toml")?;

        let table = SynonymTable::from_file(&path)
            .with_context(|| format!("Failed to load synonyms from {}", path.display()))?;

        let sentinel = self.sentinel.unwrap_or(settings.sentinel_or_default());
        Ok(Steganograph::new(table).with_sentinel(sentinel))
    }
}

/// Reads a carrier text file.
pub fn read_carrier(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read carrier from {}", path.display()))
}
