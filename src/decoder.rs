//! Recovering a secret from carrier text.
//!
//! Every word found in the synonym table yields one bit (0 for the primary
//! side, 1 for the alternate side). Bits are packed MSB-first into bytes. The
//! first completed byte equal to the sentinel ends the secret; the raw bytes
//! collected before it are then decoded as UTF-8 in one go, so characters
//! spanning several bytes come back intact.

use thiserror::Error;
use tracing::{debug, trace};

use crate::bits::{bytes_to_text, CodecError, BITS_PER_BYTE};
use crate::synonyms::SynonymTable;
use crate::text::words;
use crate::SENTINEL;

/// Errors that can occur during decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("No secret was found in the text")]
    NoSecretFound,

    #[error("The hidden bytes are not valid text: {0}")]
    InvalidEncoding(#[from] CodecError),
}

/// Configuration for the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Byte that marks the end of the secret.
    pub sentinel: u8,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { sentinel: SENTINEL }
    }
}

/// Reads the secret hidden in `carrier` using the default sentinel.
pub fn read(carrier: &str, table: &SynonymTable) -> Result<String, DecodeError> {
    read_with_config(carrier, table, &DecoderConfig::default())
}

/// Reads the secret hidden in `carrier` with a custom configuration.
///
/// Words after the sentinel are ignored. If the carrier ends before a full
/// sentinel byte is seen, fails with [`DecodeError::NoSecretFound`] and
/// discards whatever bits were collected.
pub fn read_with_config(
    carrier: &str,
    table: &SynonymTable,
    config: &DecoderConfig,
) -> Result<String, DecodeError> {
    let mut secret: Vec<u8> = Vec::new();
    let mut group: u8 = 0;
    let mut filled = 0;

    for word in words(carrier) {
        let Some((_, side)) = table.find(word) else {
            continue;
        };

        group = (group << 1) | side.bit() as u8;
        filled += 1;

        if filled < BITS_PER_BYTE {
            continue;
        }

        if group == config.sentinel {
            debug!(secret_bytes = secret.len(), "sentinel found");
            return Ok(bytes_to_text(secret)?);
        }

        trace!(byte = group, index = secret.len(), "byte recovered");
        secret.push(group);
        group = 0;
        filled = 0;
    }

    debug!(
        complete_bytes = secret.len(),
        pending_bits = filled,
        "carrier exhausted without sentinel"
    );
    Err(DecodeError::NoSecretFound)
}
