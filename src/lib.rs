//! # Synhide - hide text in text
//!
//! Synhide hides a secret message inside an ordinary piece of writing by
//! choosing, word by word, between two synonyms.
//!
//! ## Overview
//!
//! - A [`SynonymTable`] lists word pairs such as `happy` / `joyful`
//! - The secret is UTF-8 encoded and expanded into bits (MSB first)
//! - Each carrier word found in the table carries one bit: the primary word
//!   means 0, the alternate word means 1
//! - A sentinel byte ([`SENTINEL`]) follows the secret so the reader knows
//!   where it ends
//! - Everything else in the carrier (other words, spacing, punctuation) is
//!   left exactly as it was
//!
//! This is an encoding, not encryption: anyone holding the same table can read
//! the secret.
//!
//! ## Example Usage
//!
//! ```rust
//! use synhide::{read, write, SynonymTable};
//!
//! let table = SynonymTable::build([("happy", "joyful"), ("sad", "unhappy")]).unwrap();
//! let carrier = "I was happy, then sad, then happy again. ".repeat(8);
//!
//! let stego = write(&carrier, "hi", &table).unwrap();
//! assert_ne!(stego, carrier);
//! assert_eq!(read(&stego, &table).unwrap(), "hi");
//! ```
//!
//! ## Modules
//!
//! - [`bits`]: text to bits and back
//! - [`synonyms`]: validated synonym dictionary and JSON loading
//! - [`text`]: carrier tokenization
//! - [`encoder`]: hiding a secret
//! - [`decoder`]: recovering a secret
//! - [`settings`]: user configuration for the CLI

/// End-of-secret marker.
///
/// `0xFF` is never produced by UTF-8, so it cannot appear inside an encoded
/// secret. Changing it breaks compatibility with text written by other builds.
pub const SENTINEL: u8 = 0xFF;

pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod settings;
pub mod steganograph;
pub mod synonyms;
pub mod text;

// Re-export commonly used types at the crate root
pub use bits::{CodecError, BITS_PER_BYTE};
pub use decoder::{read, read_with_config, DecodeError, DecoderConfig};
pub use encoder::{capacity, required_bits, write, write_with_config, EncodeError, EncoderConfig};
pub use settings::{Settings, SettingsError};
pub use steganograph::Steganograph;
pub use synonyms::{ConfigError, Side, SynonymPair, SynonymTable};
pub use text::{tokenize, Token};
