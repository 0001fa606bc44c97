//! Hiding a secret inside carrier text.
//!
//! The encoding process:
//! 1. Expand the secret's UTF-8 bytes into bits, then append the sentinel byte
//! 2. Walk the carrier token by token
//! 3. For every word found in the synonym table, write the side selected by the next bit
//! 4. Once the last sentinel bit is written, copy the rest of the carrier verbatim
//!
//! Words outside the table, separators, digits and punctuation are never touched.

use thiserror::Error;
use tracing::{debug, trace};

use crate::bits::{self, byte_to_bits, BITS_PER_BYTE};
use crate::synonyms::{Side, SynonymTable};
use crate::text::{tokenize, words, Token};
use crate::SENTINEL;

/// Errors that can occur during encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error(
        "The provided text is too small to hide your secret: {required} matching words needed, {available} found"
    )]
    CarrierTooSmall { required: usize, available: usize },

    #[error("The secret contains the sentinel byte 0x{0:02X}")]
    SentinelInSecret(u8),
}

/// Configuration for the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Byte written after the secret to mark its end.
    pub sentinel: u8,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { sentinel: SENTINEL }
    }
}

/// Hides `secret` in `carrier` using the default sentinel.
///
/// # Example
/// ```
/// use synhide::{write, read, SynonymTable};
///
/// let table = SynonymTable::build([("big", "large"), ("quick", "fast")]).unwrap();
/// let carrier = "a big quick dog ".repeat(12);
///
/// let stego = write(&carrier, "k", &table).unwrap();
/// assert_eq!(read(&stego, &table).unwrap(), "k");
/// ```
pub fn write(carrier: &str, secret: &str, table: &SynonymTable) -> Result<String, EncodeError> {
    write_with_config(carrier, secret, table, &EncoderConfig::default())
}

/// Hides `secret` in `carrier` with a custom configuration.
///
/// Returns a new string; the carrier and table are left untouched. Fails with
/// [`EncodeError::CarrierTooSmall`] if the carrier runs out of matching words
/// before the secret and sentinel are fully written. No partial output is
/// returned in that case.
pub fn write_with_config(
    carrier: &str,
    secret: &str,
    table: &SynonymTable,
    config: &EncoderConfig,
) -> Result<String, EncodeError> {
    if secret.as_bytes().contains(&config.sentinel) {
        return Err(EncodeError::SentinelInSecret(config.sentinel));
    }

    let mut payload = bits::encode(secret);
    payload.extend_from_slice(&byte_to_bits(config.sentinel));

    debug!(
        secret_bytes = secret.len(),
        bits = payload.len(),
        "encoding secret"
    );

    embed_bits(carrier, &payload, table)
}

/// Writes `payload` into the carrier's matching words, one bit per word.
pub(crate) fn embed_bits(
    carrier: &str,
    payload: &[bool],
    table: &SynonymTable,
) -> Result<String, EncodeError> {
    if payload.is_empty() {
        return Ok(carrier.to_string());
    }

    let mut output = String::with_capacity(carrier.len() + carrier.len() / 4);
    let mut cursor = 0;
    let mut tokens = tokenize(carrier);

    while let Some(token) = tokens.next() {
        let word = match token {
            Token::Word(word) => word,
            Token::Other(text) => {
                output.push_str(text);
                continue;
            }
        };

        let Some((pair, _)) = table.find(word) else {
            output.push_str(word);
            continue;
        };

        let side = Side::from_bit(payload[cursor]);
        trace!(bit = cursor, word, written = pair.word_for(side), "substitute");
        output.push_str(pair.word_for(side));
        cursor += 1;

        if cursor == payload.len() {
            output.push_str(tokens.remainder());
            debug!(words_used = cursor, "secret embedded");
            return Ok(output);
        }
    }

    Err(EncodeError::CarrierTooSmall {
        required: payload.len(),
        available: cursor,
    })
}

/// Number of words in `carrier` that can carry a bit.
pub fn capacity(carrier: &str, table: &SynonymTable) -> usize {
    words(carrier).filter(|word| table.contains(word)).count()
}

/// Number of matching words needed to hide `secret`, sentinel included.
pub fn required_bits(secret: &str) -> usize {
    (secret.len() + 1) * BITS_PER_BYTE
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARRIER: &str = "I am happy today but also sad and joyful. I would be happy if the test runs, sad if it doesn't and joyful if the whole project runs.";

    fn table() -> SynonymTable {
        SynonymTable::build([("happy", "joyful"), ("sad", "unhappy")]).unwrap()
    }

    #[test]
    fn test_embed_bits_substitutes_in_order() {
        // "ok" stand-in bits followed by a two-bit terminator
        let payload = [false, true, true, false, true, true];
        let result = embed_bits(CARRIER, &payload, &table()).unwrap();

        assert_eq!(
            result,
            "I am happy today but also unhappy and joyful. I would be happy if the test runs, unhappy if it doesn't and joyful if the whole project runs."
        );
    }

    #[test]
    fn test_embed_bits_stops_after_last_bit() {
        let carrier = "happy happy happy";
        let result = embed_bits(carrier, &[true], &table()).unwrap();
        assert_eq!(result, "joyful happy happy");
    }

    #[test]
    fn test_carrier_too_small() {
        let result = write("I am happy.", "secret", &table());
        assert_eq!(
            result,
            Err(EncodeError::CarrierTooSmall {
                required: required_bits("secret"),
                available: 1,
            })
        );
    }

    #[test]
    fn test_no_matching_words() {
        let result = write("Nothing to see here.", "", &table());
        assert!(matches!(
            result,
            Err(EncodeError::CarrierTooSmall { available: 0, .. })
        ));
    }

    #[test]
    fn test_empty_secret_needs_sentinel_capacity() {
        let carrier = "happy ".repeat(7);
        assert!(write(&carrier, "", &table()).is_err());

        let carrier = "happy ".repeat(8);
        let result = write(&carrier, "", &table()).unwrap();
        // 0xFF is all ones, so every slot takes the alternate form
        assert_eq!(result, "joyful ".repeat(8));
    }

    #[test]
    fn test_unmatched_words_untouched() {
        let carrier = "The cat was happy, the dog was sad. ".repeat(10);
        let result = write(&carrier, "a", &table()).unwrap();

        let before: Vec<_> = words(&carrier).filter(|w| !table().contains(w)).collect();
        let after: Vec<_> = words(&result).filter(|w| !table().contains(w)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_capacity_counts_matching_words() {
        assert_eq!(capacity(CARRIER, &table()), 6);
        assert_eq!(capacity("Happy days", &table()), 0);
        assert_eq!(capacity("", &table()), 0);
    }

    #[test]
    fn test_required_bits() {
        assert_eq!(required_bits(""), 8);
        assert_eq!(required_bits("ok"), 24);
        assert_eq!(required_bits("é"), 24);
    }

    #[test]
    fn test_sentinel_in_secret() {
        let config = EncoderConfig { sentinel: b'a' };
        let carrier = "happy ".repeat(64);
        assert_eq!(
            write_with_config(&carrier, "banana", &table(), &config),
            Err(EncodeError::SentinelInSecret(b'a'))
        );
        assert!(write_with_config(&carrier, "xyz", &table(), &config).is_ok());
    }

    #[test]
    fn test_carrier_not_mutated_past_payload() {
        let carrier = format!("{} tail sad sad sad", "happy ".repeat(16));
        let result = write(&carrier, "", &table()).unwrap();
        assert!(result.ends_with(" tail sad sad sad"));
    }
}
