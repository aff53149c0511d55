//! Error types for the seedlab library

use serde::Serialize;
use thiserror::Error;

/// Reasons a user-supplied mnemonic phrase is rejected.
///
/// These are ordinary outcomes of validating user input. Callers are
/// expected to branch on them and render feedback, never to treat them
/// as fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum ValidationError {
    /// The phrase contains no words
    #[error("Mnemonic is empty")]
    EmptyMnemonic,

    /// One or more tokens are not in the wordlist, in input order
    #[error("Invalid words: {}", .0.join(", "))]
    InvalidWords(Vec<String>),

    /// Word count is not one of 12, 15, 18, 21 or 24
    #[error("Invalid mnemonic length: {0} words")]
    InvalidLength(usize),

    /// Checksum bits do not match the reconstructed entropy
    #[error("Invalid checksum")]
    InvalidChecksum,
}

/// Custom error type for seedlab operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Mnemonic error: {0}")]
    Mnemonic(#[from] ValidationError),

    #[error("Invalid entropy length: {0} bytes")]
    InvalidEntropyLength(usize),

    #[error("Entropy source error: {0}")]
    EntropySource(String),

    #[error("Wordlist error: {0}")]
    Wordlist(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for seedlab operations
pub type Result<T> = std::result::Result<T, Error>;
