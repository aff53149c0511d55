//! Mnemonic codec and its collaborators
//!
//! This module provides entropy sizing and generation, the wordlist
//! provider, the mnemonic encoder/validator and the annotated breakdown
//! shown on the generator page.

pub mod breakdown;
pub mod entropy;
pub mod mnemonic;
pub mod wordlist;

pub use breakdown::*;
pub use entropy::*;
pub use mnemonic::*;
pub use wordlist::*;
