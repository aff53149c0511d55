//! Wordlist provider
//!
//! A [`Wordlist`] is the fixed vocabulary that maps 11-bit indices to words
//! and back. It is validated once on construction (exactly 2048 distinct,
//! non-empty, whitespace-free tokens) and is read-only afterwards, so a
//! single instance can be shared by reference across any number of
//! concurrent encode and decode calls.

use std::collections::HashMap;
use std::path::Path;

pub use bip39::Language;
use tracing::debug;

use crate::error::{Error, Result};

/// Number of entries every wordlist must hold (2^11).
pub const WORDLIST_SIZE: usize = 2048;

/// An ordered, index-addressable list of 2048 unique words
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Build a wordlist from owned words, validating size and uniqueness
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.len() != WORDLIST_SIZE {
            return Err(Error::Wordlist(format!(
                "expected {} words, got {}",
                WORDLIST_SIZE,
                words.len()
            )));
        }

        let mut index = HashMap::with_capacity(WORDLIST_SIZE);
        for (position, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(Error::Wordlist(format!("empty word at index {}", position)));
            }
            if word.chars().any(char::is_whitespace) {
                return Err(Error::Wordlist(format!(
                    "word at index {} contains whitespace",
                    position
                )));
            }
            // position < 2048 always fits in 11 bits
            if index.insert(word.clone(), position as u16).is_some() {
                return Err(Error::Wordlist(format!("duplicate word '{}'", word)));
            }
        }

        Ok(Self { words, index })
    }

    /// The canonical BIP-39 English wordlist
    pub fn english() -> Self {
        Self::from_language(Language::English)
    }

    /// A wordlist shipped with the `bip39` crate
    pub fn from_language(language: Language) -> Self {
        let words = language.word_list();
        let index = words
            .iter()
            .enumerate()
            .map(|(position, word)| (word.to_string(), position as u16))
            .collect();

        debug!(?language, "Loaded built-in wordlist");

        Self {
            words: words.iter().map(|word| word.to_string()).collect(),
            index,
        }
    }

    /// Parse a newline-separated wordlist, skipping blank lines
    pub fn parse(text: &str) -> Result<Self> {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self::new(words)
    }

    /// Load a newline-separated wordlist from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let wordlist = Self::parse(&text)?;

        debug!(path = %path.display(), "Loaded wordlist from file");
        Ok(wordlist)
    }

    /// Look up the index of a word (exact, case-sensitive match)
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Whether the word is part of this list
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// The word at an 11-bit index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 2048 or above.
    pub fn word(&self, index: u16) -> &str {
        &self.words[usize::from(index)]
    }

    /// Number of words (always 2048)
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words starting with the given prefix, in index order
    pub fn words_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().filter(move |word| word.starts_with(prefix))
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Self::english()
    }
}
