//! CLI command definitions and handlers.

mod mnemonic;
mod seed;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use mnemonic::{DecodeCommand, EncodeCommand, ExpandCommand, GenerateCommand, ValidateCommand};
pub use seed::SeedCommand;

/// wordseed - BIP-39 mnemonic encoding, validation and seed derivation.
#[derive(Parser)]
#[command(name = "wordseed")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Newline-separated 2048-word list to use instead of English.
    #[arg(long, global = true, env = "WORDSEED_WORDLIST", value_name = "PATH")]
    pub wordlist: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new random mnemonic.
    #[command(alias = "new")]
    Generate(GenerateCommand),

    /// Encode hex entropy as a mnemonic.
    Encode(EncodeCommand),

    /// Decode a mnemonic back to its entropy.
    Decode(DecodeCommand),

    /// Check that a mnemonic is valid.
    #[command(alias = "check")]
    Validate(ValidateCommand),

    /// Expand four-letter abbreviations to full words.
    Expand(ExpandCommand),

    /// Derive the 64-byte seed from a mnemonic.
    Seed(SeedCommand),
}
