//! A synonym table bundled with its codec settings.

use crate::decoder::{read_with_config, DecodeError, DecoderConfig};
use crate::encoder::{capacity, write_with_config, EncodeError, EncoderConfig};
use crate::synonyms::SynonymTable;
use crate::SENTINEL;

/// Owns a synonym table and the sentinel used to frame secrets.
///
/// The table is never mutated after construction, so a `Steganograph` can be
/// shared between threads behind an `Arc` or a plain reference.
#[derive(Debug, Clone)]
pub struct Steganograph {
    table: SynonymTable,
    sentinel: u8,
}

impl Steganograph {
    /// Creates a codec using the default sentinel.
    pub fn new(table: SynonymTable) -> Self {
        Self {
            table,
            sentinel: SENTINEL,
        }
    }

    /// Replaces the sentinel byte.
    pub fn with_sentinel(mut self, sentinel: u8) -> Self {
        self.sentinel = sentinel;
        self
    }

    pub fn table(&self) -> &SynonymTable {
        &self.table
    }

    pub fn sentinel(&self) -> u8 {
        self.sentinel
    }

    /// Hides `secret` in `carrier`, returning the modified text.
    pub fn write(&self, carrier: &str, secret: &str) -> Result<String, EncodeError> {
        let config = EncoderConfig {
            sentinel: self.sentinel,
        };
        write_with_config(carrier, secret, &self.table, &config)
    }

    /// Extracts the secret hidden in `carrier`.
    pub fn read(&self, carrier: &str) -> Result<String, DecodeError> {
        let config = DecoderConfig {
            sentinel: self.sentinel,
        };
        read_with_config(carrier, &self.table, &config)
    }

    /// Number of bits `carrier` can hold with this table.
    pub fn capacity(&self, carrier: &str) -> usize {
        capacity(carrier, &self.table)
    }
}
