//! CLI configuration
//!
//! Settings come from the environment first and are then overridden by
//! command-line flags.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use seedlab::crypto::{Language, Wordlist};

/// Where the wordlist comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// A list bundled with the `bip39` crate
    Builtin(Language),
    /// A newline-separated file
    File(PathBuf),
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub wordlist: WordlistSource,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            wordlist: WordlistSource::Builtin(Language::English),
        }
    }
}

impl CliConfig {
    /// Read `SEEDLAB_LANGUAGE` and `SEEDLAB_WORDLIST`
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("SEEDLAB_LANGUAGE").ok(),
            std::env::var("SEEDLAB_WORDLIST").ok(),
        )
    }

    fn from_vars(language: Option<String>, wordlist: Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(code) = language.filter(|code| !code.trim().is_empty()) {
            config.wordlist = WordlistSource::Builtin(parse_language(&code)?);
        }
        if let Some(path) = wordlist.filter(|path| !path.trim().is_empty()) {
            config.wordlist = WordlistSource::File(PathBuf::from(path));
        }
        Ok(config)
    }

    /// Apply command-line overrides. A wordlist file wins over a language.
    pub fn with_overrides(mut self, language: Option<&str>, wordlist: Option<PathBuf>) -> Result<Self> {
        if let Some(code) = language {
            self.wordlist = WordlistSource::Builtin(parse_language(code)?);
        }
        if let Some(path) = wordlist {
            self.wordlist = WordlistSource::File(path);
        }
        Ok(self)
    }

    /// Load the configured wordlist
    pub fn load_wordlist(&self) -> Result<Wordlist> {
        match &self.wordlist {
            WordlistSource::Builtin(language) => Ok(Wordlist::from_language(*language)),
            WordlistSource::File(path) => Wordlist::from_file(path)
                .with_context(|| format!("Failed to load wordlist from {}", path.display())),
        }
    }
}

/// Map a language code to a bundled wordlist
pub fn parse_language(code: &str) -> Result<Language> {
    let language = match code.trim().to_ascii_lowercase().as_str() {
        "en" | "english" => Language::English,
        "es" | "spanish" => Language::Spanish,
        "fr" | "french" => Language::French,
        "it" | "italian" => Language::Italian,
        "cs" | "czech" => Language::Czech,
        "pt" | "portuguese" => Language::Portuguese,
        other => bail!("Unsupported wordlist language: {}", other),
    };
    Ok(language)
}
