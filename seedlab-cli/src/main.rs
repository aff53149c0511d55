//! SeedLab CLI
//!
//! Generator and validator front end for the mnemonic codec. Every command
//! calls through `seedlab::crypto`; no bit manipulation happens here.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seedlab::crypto::{
    breakdown, decode_and_validate, encode, generate_mnemonic, Entropy, MnemonicStrength,
    Wordlist,
};
use seedlab::ValidationError;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "seedlab")]
#[command(about = "Generate, inspect and validate BIP-39 mnemonic phrases")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Wordlist language code (en, es, fr, it, cs, pt)
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Newline-separated wordlist file, overrides --language
    #[arg(short, long, global = true)]
    wordlist: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random mnemonic phrase
    Generate {
        /// Number of words (12, 15, 18, 21 or 24)
        #[arg(long, default_value_t = 12)]
        words: usize,
    },
    /// Encode hex entropy as a phrase
    Encode { entropy: String },
    /// Validate a phrase and recover its entropy
    Validate {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Show how hex entropy is turned into words
    Explain { entropy: String },
    /// List wordlist entries starting with a prefix
    Lookup { prefix: String },
}

#[derive(Serialize)]
struct PhraseOutput {
    phrase: String,
    words: usize,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ValidationOutput {
    Valid { valid: bool, entropy: String, words: usize },
    Invalid { valid: bool, error: ValidationError },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}

fn print_phrase(phrase: String, json: bool) -> Result<()> {
    if json {
        let words = phrase.split(' ').count();
        print_json(&PhraseOutput { phrase, words })
    } else {
        println!("{}", phrase);
        Ok(())
    }
}

/// Execute one command, returning whether it succeeded
fn run(cli: Cli, wordlist: &Wordlist) -> Result<bool> {
    match cli.command {
        Commands::Generate { words } => {
            let strength = MnemonicStrength::from_word_count(words).with_context(|| {
                format!("Unsupported word count {}; use 12, 15, 18, 21 or 24", words)
            })?;
            info!(%strength, "Generating mnemonic");
            print_phrase(generate_mnemonic(strength, wordlist)?, cli.json)?;
        }
        Commands::Encode { entropy } => {
            let entropy = Entropy::from_hex(&entropy)?;
            print_phrase(encode(&entropy, wordlist), cli.json)?;
        }
        Commands::Validate { words } => {
            let phrase = words.join(" ");
            let outcome = decode_and_validate(&phrase, wordlist);
            let ok = outcome.is_ok();

            if cli.json {
                let output = match outcome {
                    Ok(entropy) => ValidationOutput::Valid {
                        valid: true,
                        entropy: entropy.to_hex(),
                        words: entropy.strength().word_count(),
                    },
                    Err(error) => ValidationOutput::Invalid { valid: false, error },
                };
                print_json(&output)?;
            } else {
                match outcome {
                    Ok(entropy) => println!("valid ({})\nentropy: {}", entropy.strength(), entropy.to_hex()),
                    Err(error) => println!("invalid: {}", error),
                }
            }

            return Ok(ok);
        }
        Commands::Explain { entropy } => {
            let entropy = Entropy::from_hex(&entropy)?;
            let view = breakdown(&entropy, wordlist);

            if cli.json {
                print_json(&view)?;
            } else {
                println!("entropy  {}", view.entropy_hex);
                println!("bits     {}", view.entropy_bits);
                println!("checksum {}", view.checksum_bits);
                for (position, group) in view.groups.iter().enumerate() {
                    println!("{:>2}  {}  {:>4}  {}", position + 1, group.bits, group.index, group.word);
                }
                println!("phrase   {}", view.phrase());
            }
        }
        Commands::Lookup { prefix } => {
            let matches: Vec<&str> = wordlist.words_with_prefix(&prefix).collect();
            debug!(prefix = %prefix, count = matches.len(), "Prefix lookup");

            if cli.json {
                print_json(&matches)?;
            } else {
                for word in matches {
                    println!("{}", word);
                }
            }
        }
    }

    Ok(true)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CliConfig::from_env()?.with_overrides(cli.language.as_deref(), cli.wordlist.clone())?;
    debug!(source = ?config.wordlist, "Resolved wordlist source");
    let wordlist = config.load_wordlist()?;

    if run(cli, &wordlist)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
