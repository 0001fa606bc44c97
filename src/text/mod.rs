//! Text processing for carrier scanning.
//!
//! This module provides:
//! - Word / separator tokenization
//! - The shared alphabetic rule used by encoding, decoding and table validation

pub mod tokenize;

pub use tokenize::{is_single_word, is_word_char, tokenize, words, Token, Tokenizer};
