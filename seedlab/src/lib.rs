//! SeedLab - BIP-39 mnemonic codec
//!
//! This library provides the one piece of real logic behind the wallet
//! security portal: conversion between raw entropy and BIP-39 mnemonic
//! phrases, including checksum computation and validation. Every call is
//! a pure function of its inputs; the wordlist is passed in explicitly.
//!
//! ```
//! use seedlab::crypto::{decode_and_validate, encode, Entropy, Wordlist};
//!
//! let wordlist = Wordlist::english();
//! let entropy = Entropy::new(vec![0u8; 16]).unwrap();
//! let phrase = encode(&entropy, &wordlist);
//! assert!(phrase.ends_with("abandon about"));
//! assert_eq!(decode_and_validate(&phrase, &wordlist).unwrap(), entropy);
//! ```

pub mod crypto;
pub mod error;

// Re-export commonly used types for convenience
pub use crypto::{decode_and_validate, encode, Entropy, MnemonicStrength, Wordlist};
pub use error::{Error, Result, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
