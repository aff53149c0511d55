//! Step-by-step view of how entropy becomes a phrase
//!
//! The generator page of the portal walks readers through the encoding:
//! the raw entropy bits, the checksum taken from SHA-256, and each 11-bit
//! group with the word it selects. [`breakdown`] produces that view from
//! the same bit-slicing the codec uses, so the two can never disagree.

use serde::Serialize;

use super::entropy::Entropy;
use super::mnemonic::{checksum, word_indices};
use super::wordlist::Wordlist;

/// One 11-bit group of the encoded bit stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordGroup {
    /// The group rendered as 11 binary digits
    pub bits: String,
    /// Wordlist index (0-2047)
    pub index: u16,
    /// The selected word
    pub word: String,
}

/// Annotated encoding of one entropy value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseBreakdown {
    /// Entropy as lowercase hex
    pub entropy_hex: String,
    /// Entropy rendered as binary digits, MSB first
    pub entropy_bits: String,
    /// Checksum rendered as binary digits
    pub checksum_bits: String,
    /// Word groups in phrase order
    pub groups: Vec<WordGroup>,
}

impl PhraseBreakdown {
    /// The phrase these groups spell out
    pub fn phrase(&self) -> String {
        self.groups
            .iter()
            .map(|group| group.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Build the annotated encoding of `entropy`
pub fn breakdown(entropy: &Entropy, wordlist: &Wordlist) -> PhraseBreakdown {
    let checksum_len = entropy.strength().checksum_bits();
    let checksum_value = checksum(entropy.as_bytes(), checksum_len);

    let groups = word_indices(entropy)
        .into_iter()
        .map(|index| WordGroup {
            bits: format!("{:011b}", index),
            index,
            word: wordlist.word(index).to_string(),
        })
        .collect();

    PhraseBreakdown {
        entropy_hex: entropy.to_hex(),
        entropy_bits: entropy
            .as_bytes()
            .iter()
            .map(|byte| format!("{:08b}", byte))
            .collect(),
        checksum_bits: format!("{:0width$b}", checksum_value, width = checksum_len),
        groups,
    }
}
