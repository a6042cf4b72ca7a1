//! Mnemonic CLI commands: generate, encode, decode, validate and expand.

use clap::Args;
use colored::Colorize;
use wordseed::rand_core::OsRng;
use wordseed::{codec, expand, validator, EntropySize, Mnemonic, Seed, Vocabulary};

use crate::qr;

/// Generate a new random mnemonic.
#[derive(Args)]
pub struct GenerateCommand {
    /// Number of mnemonic words (12, 15, 18, 21, or 24).
    #[arg(short, long, default_value = "12", value_parser = parse_word_count)]
    words: EntropySize,

    /// BIP39 passphrase, applied when printing the seed.
    #[arg(short, long)]
    passphrase: Option<String>,

    /// Also derive and print the seed.
    #[arg(long)]
    seed: bool,

    /// Display the mnemonic as a QR code.
    #[arg(long)]
    qr: bool,
}

/// Encode hex entropy as a mnemonic.
#[derive(Args)]
pub struct EncodeCommand {
    /// Entropy as hex (16, 20, 24, 28 or 32 bytes), optionally 0x-prefixed.
    #[arg(short, long)]
    entropy: String,
}

/// Decode a mnemonic back to its entropy.
#[derive(Args)]
pub struct DecodeCommand {
    /// BIP39 mnemonic phrase.
    #[arg(short, long)]
    mnemonic: String,
}

/// Check that a mnemonic is valid.
#[derive(Args)]
pub struct ValidateCommand {
    /// BIP39 mnemonic phrase.
    #[arg(short, long)]
    mnemonic: String,

    /// Only check word count and membership, not the checksum.
    #[arg(long)]
    lenient: bool,
}

/// Expand abbreviated words to full words.
#[derive(Args)]
pub struct ExpandCommand {
    /// Mnemonic with words abbreviated to at least four letters.
    #[arg(short, long)]
    mnemonic: String,
}

fn parse_word_count(s: &str) -> Result<EntropySize, String> {
    s.parse::<usize>()
        .ok()
        .and_then(EntropySize::from_word_count)
        .ok_or_else(|| format!("expected 12, 15, 18, 21 or 24 words, got {s}"))
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self, vocabulary: &Vocabulary) -> Result<(), Box<dyn std::error::Error>> {
        let mnemonic = Mnemonic::generate_in(vocabulary, &mut OsRng, self.words)?;
        let passphrase = self.passphrase.as_deref().unwrap_or_default();
        let seed = self.seed.then(|| mnemonic.to_seed(passphrase));

        print_generated(&mnemonic, self.passphrase.is_some(), seed.as_ref());
        if self.qr {
            qr::render_to_terminal(mnemonic.phrase())?;
        }
        Ok(())
    }
}

impl EncodeCommand {
    /// Execute the encode command.
    pub fn execute(self, vocabulary: &Vocabulary) -> Result<(), Box<dyn std::error::Error>> {
        let hex_str = self.entropy.trim();
        let bytes = hex::decode(hex_str.strip_prefix("0x").unwrap_or(hex_str))?;
        let mnemonic = Mnemonic::from_entropy_in(vocabulary, &bytes)?;
        print_mnemonic(&mnemonic);
        Ok(())
    }
}

impl DecodeCommand {
    /// Execute the decode command.
    pub fn execute(self, vocabulary: &Vocabulary) -> Result<(), Box<dyn std::error::Error>> {
        let entropy = codec::decode(vocabulary, &self.mnemonic)?;
        let size = entropy.size();

        println!();
        println!("      {}     {}", "Words".cyan().bold(), size.word_count());
        println!("      {}      {}", "Size".cyan().bold(), size);
        println!("      {}   {}", "Entropy".cyan().bold(), entropy.to_hex().as_str().green());
        println!();
        Ok(())
    }
}

impl ValidateCommand {
    /// Execute the validate command.
    ///
    /// An invalid mnemonic is returned as an error so the process exits
    /// non-zero.
    pub fn execute(self, vocabulary: &Vocabulary) -> Result<(), Box<dyn std::error::Error>> {
        let profile = validator::check_words(vocabulary, &self.mnemonic)?;
        if !self.lenient {
            validator::validate(vocabulary, &self.mnemonic)?;
        }
        let checksum = if self.lenient { "skipped" } else { "verified" };

        println!();
        println!("      {}     {}", "Valid".cyan().bold(), "yes".green());
        println!("      {}     {}", "Words".cyan().bold(), profile.word_count);
        println!("      {}   {} bits", "Entropy".cyan().bold(), profile.entropy_bits);
        println!("      {}  {}", "Checksum".cyan().bold(), checksum.dimmed());
        println!();
        Ok(())
    }
}

impl ExpandCommand {
    /// Execute the expand command.
    pub fn execute(self, vocabulary: &Vocabulary) -> Result<(), Box<dyn std::error::Error>> {
        let expanded = expand::expand_in(vocabulary, &self.mnemonic)?;
        let valid = if validator::is_valid(vocabulary, &expanded) {
            "yes".green()
        } else {
            "no".red()
        };

        println!();
        println!("      {}  {}", "Expanded".cyan().bold(), expanded.green());
        println!("      {}     {}", "Valid".cyan().bold(), valid);
        println!();
        Ok(())
    }
}

#[rustfmt::skip]
fn print_generated(mnemonic: &Mnemonic, has_passphrase: bool, seed: Option<&Seed>) {
    println!();
    println!("      {}       {}", "Words".cyan().bold(), mnemonic.word_count());
    println!("      {}        {}", "Size".cyan().bold(), mnemonic.size());
    println!("      {}    {}", "Mnemonic".cyan().bold(), mnemonic.phrase().green());
    if has_passphrase {
        println!("      {}  {}", "Passphrase".cyan().bold(), "(set)".dimmed());
    }
    if let Some(seed) = seed {
        println!("      {}        {}", "Seed".cyan().bold(), seed.to_hex().as_str());
    }
    println!();
}

#[rustfmt::skip]
fn print_mnemonic(mnemonic: &Mnemonic) {
    println!();
    println!("      {}     {}", "Words".cyan().bold(), mnemonic.word_count());
    println!("      {}      {}", "Size".cyan().bold(), mnemonic.size());
    println!("      {}  {}", "Mnemonic".cyan().bold(), mnemonic.phrase().green());
    println!();
}
