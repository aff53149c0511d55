//! Mnemonic phrase encoding and validation
//!
//! Converts between entropy and BIP-39 phrases:
//!
//! 1. **Encode**: entropy bits followed by the first `entropy_bits / 32`
//!    bits of `SHA-256(entropy)`, split MSB-first into 11-bit word indices.
//! 2. **Decode**: map words back to indices, split the bit stream into
//!    entropy and checksum at the fixed 32:1 ratio, recompute the checksum
//!    and compare.
//!
//! The wordlist is always passed in explicitly; nothing here holds state.

use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use super::entropy::{generate_entropy, Entropy, MnemonicStrength};
use super::wordlist::Wordlist;
use crate::error::{Result, ValidationError};

const BITS_PER_WORD: usize = 11;
const WORD_MASK: u32 = (1 << BITS_PER_WORD) - 1;

/// Leading `bits` bits of the first byte of `SHA-256(bytes)`, right-aligned
pub(crate) fn checksum(bytes: &[u8], bits: usize) -> u8 {
    let first = Sha256::digest(bytes)[0];
    first >> (8 - bits)
}

/// Split entropy plus checksum into 11-bit word indices, MSB first
pub(crate) fn word_indices(entropy: &Entropy) -> Vec<u16> {
    let strength = entropy.strength();
    let checksum_bits = strength.checksum_bits();
    let mut indices = Vec::with_capacity(strength.word_count());

    let mut acc: u32 = 0;
    let mut pending = 0usize;
    let mut push = |value: u32, width: usize| {
        acc = (acc << width) | value;
        pending += width;
        while pending >= BITS_PER_WORD {
            pending -= BITS_PER_WORD;
            indices.push(((acc >> pending) & WORD_MASK) as u16);
        }
        acc &= (1u32 << pending) - 1;
    };

    for &byte in entropy.as_bytes() {
        push(u32::from(byte), 8);
    }
    push(
        u32::from(checksum(entropy.as_bytes(), checksum_bits)),
        checksum_bits,
    );

    indices
}

/// Encode entropy as a space-separated mnemonic phrase.
///
/// Deterministic: the same entropy and wordlist always give the same
/// phrase.
pub fn encode(entropy: &Entropy, wordlist: &Wordlist) -> String {
    let phrase = word_indices(entropy)
        .into_iter()
        .map(|index| wordlist.word(index))
        .collect::<Vec<_>>()
        .join(" ");

    trace!(strength = %entropy.strength(), "Encoded mnemonic");
    phrase
}

/// Decode a user-supplied phrase back to its entropy, checking the checksum.
///
/// Checks run in order and stop at the first failure: empty input,
/// unknown words, word count, checksum. Unknown words are reported even
/// when the word count is also wrong.
pub fn decode_and_validate(
    phrase: &str,
    wordlist: &Wordlist,
) -> std::result::Result<Entropy, ValidationError> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.is_empty() {
        debug!("Rejected mnemonic: empty");
        return Err(ValidationError::EmptyMnemonic);
    }

    let mut indices = Vec::with_capacity(words.len());
    let mut unknown = Vec::new();
    for word in &words {
        match wordlist.index_of(word) {
            Some(index) => indices.push(index),
            None => unknown.push(word.to_string()),
        }
    }
    if !unknown.is_empty() {
        debug!(count = unknown.len(), "Rejected mnemonic: unknown words");
        return Err(ValidationError::InvalidWords(unknown));
    }

    let Some(strength) = MnemonicStrength::from_word_count(words.len()) else {
        debug!(words = words.len(), "Rejected mnemonic: invalid length");
        return Err(ValidationError::InvalidLength(words.len()));
    };

    let total_bits = words.len() * BITS_PER_WORD;
    let checksum_bits = total_bits / 33;
    let entropy_bytes = (total_bits - checksum_bits) / 8;

    let mut bytes = Vec::with_capacity(entropy_bytes);
    let mut acc: u32 = 0;
    let mut pending = 0usize;
    for index in indices {
        acc = (acc << BITS_PER_WORD) | u32::from(index);
        pending += BITS_PER_WORD;
        while pending >= 8 && bytes.len() < entropy_bytes {
            pending -= 8;
            bytes.push((acc >> pending) as u8);
        }
        acc &= (1u32 << pending) - 1;
    }

    // Whatever is left after the entropy bytes is the checksum
    debug_assert_eq!(pending, checksum_bits);
    let provided = acc as u8;
    if checksum(&bytes, checksum_bits) != provided {
        debug!(words = words.len(), "Rejected mnemonic: checksum mismatch");
        return Err(ValidationError::InvalidChecksum);
    }

    debug!(%strength, "Validated mnemonic");
    Entropy::new(bytes).map_err(|_| ValidationError::InvalidLength(words.len()))
}

/// Validate a phrase, discarding the recovered entropy
pub fn validate_mnemonic(
    phrase: &str,
    wordlist: &Wordlist,
) -> std::result::Result<(), ValidationError> {
    decode_and_validate(phrase, wordlist).map(|_| ())
}

/// Generate a new random mnemonic phrase with the specified strength
pub fn generate_mnemonic(strength: MnemonicStrength, wordlist: &Wordlist) -> Result<String> {
    let entropy = generate_entropy(strength)?;
    Ok(encode(&entropy, wordlist))
}
