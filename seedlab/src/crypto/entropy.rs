//! Entropy sizes and generation

use std::fmt;

use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Supported mnemonic strengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MnemonicStrength {
    /// 12 words (128 bits)
    Words12,
    /// 15 words (160 bits)
    Words15,
    /// 18 words (192 bits)
    Words18,
    /// 21 words (224 bits)
    Words21,
    /// 24 words (256 bits)
    Words24,
}

impl MnemonicStrength {
    /// Every strength, from weakest to strongest
    pub fn all() -> [MnemonicStrength; 5] {
        [
            Self::Words12,
            Self::Words15,
            Self::Words18,
            Self::Words21,
            Self::Words24,
        ]
    }

    /// Get entropy length in bytes
    pub fn entropy_bytes(&self) -> usize {
        match self {
            Self::Words12 => 16,
            Self::Words15 => 20,
            Self::Words18 => 24,
            Self::Words21 => 28,
            Self::Words24 => 32,
        }
    }

    /// Get entropy length in bits
    pub fn entropy_bits(&self) -> usize {
        self.entropy_bytes() * 8
    }

    /// Checksum length in bits: one bit per 32 bits of entropy
    pub fn checksum_bits(&self) -> usize {
        self.entropy_bits() / 32
    }

    /// Number of words in the encoded phrase
    pub fn word_count(&self) -> usize {
        (self.entropy_bits() + self.checksum_bits()) / 11
    }

    /// Strength for a phrase of `count` words
    pub fn from_word_count(count: usize) -> Option<Self> {
        Self::all().into_iter().find(|s| s.word_count() == count)
    }

    /// Strength for `len` bytes of entropy
    pub fn from_entropy_len(len: usize) -> Option<Self> {
        Self::all().into_iter().find(|s| s.entropy_bytes() == len)
    }
}

impl Default for MnemonicStrength {
    fn default() -> Self {
        Self::Words12
    }
}

impl fmt::Display for MnemonicStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words ({} bits)", self.word_count(), self.entropy_bits())
    }
}

/// Raw secret bytes of one of the five valid lengths.
///
/// The buffer is wiped on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: Vec<u8>,
}

impl Entropy {
    /// Wrap raw bytes, rejecting lengths other than 16, 20, 24, 28 or 32
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        if MnemonicStrength::from_entropy_len(bytes.len()).is_none() {
            return Err(Error::InvalidEntropyLength(bytes.len()));
        }
        Ok(Self { bytes })
    }

    /// Parse hex-encoded entropy
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = hex::decode(input.trim())
            .map_err(|e| Error::InvalidInput(format!("entropy is not valid hex: {}", e)))?;
        Self::new(bytes)
    }

    /// Get the raw entropy bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hex rendering of the bytes
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// The strength implied by the length
    pub fn strength(&self) -> MnemonicStrength {
        // length was checked in `new`
        MnemonicStrength::from_entropy_len(self.bytes.len()).unwrap_or_default()
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("len", &self.bytes.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl TryFrom<&[u8]> for Entropy {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes.to_vec())
    }
}

/// Generate fresh entropy of the given strength from the OS RNG
pub fn generate_entropy(strength: MnemonicStrength) -> Result<Entropy> {
    let mut bytes = vec![0u8; strength.entropy_bytes()];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| Error::EntropySource(e.to_string()))?;

    Entropy::new(bytes)
}
