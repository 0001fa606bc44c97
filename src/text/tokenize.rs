//! Carrier text scanning.
//!
//! The carrier is split into alternating runs: a `Word` is a maximal run of
//! alphabetic characters (Unicode-aware, see [`is_word_char`]) and `Other` is a
//! maximal run of everything else. Joining every token in order reproduces the
//! input exactly.

/// A single run of carrier text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Maximal run of alphabetic characters.
    Word(&'a str),
    /// Maximal run of non-alphabetic characters (whitespace, punctuation, digits).
    Other(&'a str),
}

impl<'a> Token<'a> {
    /// Returns the text covered by this token.
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(s) | Token::Other(s) => *s,
        }
    }

    /// Returns true for word tokens.
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

/// Character classification shared by the encoder and decoder.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Returns true if `s` would be scanned as exactly one word token.
pub fn is_single_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word_char)
}

/// Lazy, single-pass token stream over a carrier.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Byte offset of the next unread token.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The not-yet-scanned tail of the text.
    pub fn remainder(&self) -> &'a str {
        &self.text[self.pos..]
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remainder();
        let first = rest.chars().next()?;
        let word = is_word_char(first);

        let len = rest
            .char_indices()
            .find(|&(_, c)| is_word_char(c) != word)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let span = &rest[..len];
        self.pos += len;

        Some(if word { Token::Word(span) } else { Token::Other(span) })
    }
}

/// Scans `text` into word and separator tokens.
pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer::new(text)
}

/// Iterates only the word tokens of `text`.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    tokenize(text).filter_map(|t| match t {
        Token::Word(w) => Some(w),
        Token::Other(_) => None,
    })
}
