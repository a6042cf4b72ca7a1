//! Seed derivation command.

use clap::Args;
use colored::Colorize;
use wordseed::{seed, validator, Vocabulary};

/// Derive the 64-byte seed from a mnemonic.
#[derive(Args)]
pub struct SeedCommand {
    /// BIP39 mnemonic phrase.
    #[arg(short, long)]
    mnemonic: String,

    /// BIP39 passphrase (if used when creating).
    #[arg(short, long)]
    passphrase: Option<String>,

    /// Derive from the phrase as given, without validating it.
    #[arg(long)]
    unchecked: bool,
}

impl SeedCommand {
    /// Execute the seed command.
    pub fn execute(self, vocabulary: &Vocabulary) -> Result<(), Box<dyn std::error::Error>> {
        let passphrase = self.passphrase.as_deref().unwrap_or_default();
        let seed = if self.unchecked {
            if !validator::is_valid(vocabulary, &self.mnemonic) {
                tracing::warn!("deriving seed from a phrase that is not a valid mnemonic");
            }
            seed::derive_seed(&self.mnemonic, passphrase)
        } else {
            seed::derive_seed_checked(vocabulary, &self.mnemonic, passphrase)?
        };

        println!();
        if self.passphrase.is_some() {
            println!("      {}  {}", "Passphrase".cyan().bold(), "(set)".dimmed());
        }
        println!("      {}        {}", "Seed".cyan().bold(), seed.to_hex().as_str().green());
        println!();
        Ok(())
    }
}
