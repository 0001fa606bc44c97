//! Synonym dictionary used to carry bits.
//!
//! Each [`SynonymPair`] holds two interchangeable words. Writing the primary
//! form encodes a 0 bit, writing the alternate form encodes a 1 bit. A table
//! guarantees that every word appears in exactly one pair, so a word found in
//! a carrier always maps back to a single bit.

mod loader;

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::text::is_single_word;

/// Errors that can occur while building a synonym table.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("The synonym source has a wrong format: {0}")]
    MalformedSource(String),

    #[error("The entry with the index {0} is invalid")]
    InvalidEntry(usize),

    #[error("The synonym \"{0}\" exists at least two times")]
    DuplicateSynonym(String),

    #[error("The entry with the index {index} holds \"{value}\", which is not a single word")]
    NotAWord { index: usize, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which side of a pair a word sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The `primary` word, carries bit 0.
    Primary,
    /// The `alternate` word, carries bit 1.
    Alternate,
}

impl Side {
    /// Maps a bit to the side that carries it.
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Side::Alternate
        } else {
            Side::Primary
        }
    }

    /// The bit carried by this side.
    pub fn bit(self) -> bool {
        matches!(self, Side::Alternate)
    }
}

/// Two interchangeable words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymPair {
    pub primary: String,
    pub alternate: String,
}

impl SynonymPair {
    pub fn new(primary: impl Into<String>, alternate: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            alternate: alternate.into(),
        }
    }

    /// Returns the word written for `side`.
    pub fn word_for(&self, side: Side) -> &str {
        match side {
            Side::Primary => &self.primary,
            Side::Alternate => &self.alternate,
        }
    }
}

/// Immutable, validated synonym dictionary.
///
/// Pairs keep their load order. Lookups go through an index built alongside
/// validation, so `find` does not scan the pair list.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    pairs: Vec<SynonymPair>,
    index: HashMap<String, (usize, Side)>,
}

impl SynonymTable {
    /// Builds a table from `(primary, alternate)` pairs.
    ///
    /// Fails on the first string that is already used by an accepted pair
    /// (or by the other side of the same pair), and on strings that would not
    /// scan as a single word. A failed build returns no table at all.
    pub fn build<I, P, A>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (P, A)>,
        P: Into<String>,
        A: Into<String>,
    {
        let mut table = SynonymTable::default();

        for (index, (primary, alternate)) in entries.into_iter().enumerate() {
            table.insert(index, SynonymPair::new(primary, alternate))?;
        }

        debug!(pairs = table.len(), "synonym table built");
        Ok(table)
    }

    fn insert(&mut self, index: usize, pair: SynonymPair) -> Result<(), ConfigError> {
        for value in [&pair.primary, &pair.alternate] {
            if !is_single_word(value) {
                return Err(ConfigError::NotAWord {
                    index,
                    value: value.clone(),
                });
            }
            if self.index.contains_key(value) {
                return Err(ConfigError::DuplicateSynonym(value.clone()));
            }
        }
        if pair.primary == pair.alternate {
            return Err(ConfigError::DuplicateSynonym(pair.primary));
        }

        let slot = self.pairs.len();
        self.index.insert(pair.primary.clone(), (slot, Side::Primary));
        self.index.insert(pair.alternate.clone(), (slot, Side::Alternate));
        self.pairs.push(pair);
        Ok(())
    }

    /// Looks up a word (case-sensitive).
    ///
    /// Returns the pair containing it and the side it matched.
    pub fn find(&self, word: &str) -> Option<(&SynonymPair, Side)> {
        self.index
            .get(word)
            .map(|&(slot, side)| (&self.pairs[slot], side))
    }

    /// Returns true if `word` belongs to any pair.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Pairs in load order.
    pub fn pairs(&self) -> &[SynonymPair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SynonymPair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<'a> IntoIterator for &'a SynonymTable {
    type Item = &'a SynonymPair;
    type IntoIter = std::slice::Iter<'a, SynonymPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
