//! Bit-level representation of secret text.
//!
//! Secrets are UTF-8 encoded and every byte is expanded into 8 bits,
//! most-significant bit first. `true` is a 1 bit, `false` a 0 bit.

use thiserror::Error;

/// Number of bits in one byte group.
pub const BITS_PER_BYTE: usize = 8;

/// Errors that can occur when turning bits back into text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Bit count {0} is not a multiple of 8")]
    MisalignedBits(usize),

    #[error("Decoded bytes are not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

/// Expands a single byte into its bits, MSB first.
pub fn byte_to_bits(byte: u8) -> [bool; BITS_PER_BYTE] {
    let mut bits = [false; BITS_PER_BYTE];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (byte >> (BITS_PER_BYTE - 1 - i)) & 1 == 1;
    }
    bits
}

/// Packs up to 8 bits (MSB first) into a byte.
pub fn bits_to_byte(bits: &[bool]) -> u8 {
    bits.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8)
}

/// Encodes text as a flat bit sequence.
///
/// Multi-byte characters contribute one 8-bit group per UTF-8 byte, in byte order.
pub fn encode(text: &str) -> Vec<bool> {
    bytes_to_bits(text.as_bytes())
}

/// Expands raw bytes into a flat bit sequence.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * BITS_PER_BYTE);
    for &byte in bytes {
        bits.extend_from_slice(&byte_to_bits(byte));
    }
    bits
}

/// Decodes a bit sequence produced by [`encode`] back into text.
pub fn decode(bits: &[bool]) -> Result<String, CodecError> {
    if bits.len() % BITS_PER_BYTE != 0 {
        return Err(CodecError::MisalignedBits(bits.len()));
    }

    let bytes: Vec<u8> = bits.chunks(BITS_PER_BYTE).map(bits_to_byte).collect();
    bytes_to_text(bytes)
}

/// Interprets collected bytes as UTF-8 text.
pub fn bytes_to_text(bytes: Vec<u8>) -> Result<String, CodecError> {
    String::from_utf8(bytes).map_err(|e| CodecError::InvalidEncoding(e.utf8_error().to_string()))
}
