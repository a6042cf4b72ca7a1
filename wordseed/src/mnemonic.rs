//! BIP-39 mnemonic value type.
//!
//! [`Mnemonic`] keeps the entropy together with the phrase rendered from it,
//! so a phrase that has been parsed once never needs to be re-validated.

use core::fmt;

use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::codec;
use crate::entropy::Entropy;
use crate::error::Result;
use crate::profile::EntropySize;
use crate::seed::{self, Seed};
use crate::traits::Wordlist;
use crate::wordlist::Vocabulary;

/// A validated mnemonic phrase and the entropy it encodes.
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic {
    entropy: Entropy,
    phrase: Zeroizing<String>,
}

impl Mnemonic {
    /// Encode entropy bytes as an English mnemonic.
    pub fn from_entropy(entropy: &[u8]) -> Result<Self> {
        Self::from_entropy_in(Vocabulary::english(), entropy)
    }

    /// Encode entropy bytes with the given wordlist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EntropySize`] if the entropy length is invalid.
    pub fn from_entropy_in<W: Wordlist + ?Sized>(wordlist: &W, entropy: &[u8]) -> Result<Self> {
        let entropy = Entropy::from_bytes(entropy)?;
        Self::encode_in(wordlist, entropy)
    }

    /// Parse an English mnemonic phrase.
    pub fn parse(phrase: &str) -> Result<Self> {
        Self::parse_in(Vocabulary::english(), phrase)
    }

    /// Parse a mnemonic phrase with the given wordlist.
    ///
    /// The stored phrase is normalised to single spaces.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Mnemonic`] if the phrase is not valid.
    pub fn parse_in<W: Wordlist + ?Sized>(wordlist: &W, phrase: &str) -> Result<Self> {
        let entropy = codec::decode(wordlist, phrase)?;
        let words: Vec<&str> = phrase.split_whitespace().collect();
        Ok(Self {
            entropy,
            phrase: Zeroizing::new(words.join(" ")),
        })
    }

    /// Generate a new English mnemonic from a secure RNG.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, size: EntropySize) -> Result<Self> {
        Self::generate_in(Vocabulary::english(), rng, size)
    }

    /// Generate a new mnemonic with the given wordlist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Wordlist`] if `wordlist` cannot resolve an
    /// index.
    pub fn generate_in<W, R>(wordlist: &W, rng: &mut R, size: EntropySize) -> Result<Self>
    where
        W: Wordlist + ?Sized,
        R: RngCore + CryptoRng,
    {
        Self::encode_in(wordlist, Entropy::generate(rng, size))
    }

    /// Generate a new English mnemonic from the operating system RNG.
    #[cfg(feature = "rand")]
    pub fn random(size: EntropySize) -> Result<Self> {
        Self::encode_in(Vocabulary::english(), Entropy::random(size))
    }

    fn encode_in<W: Wordlist + ?Sized>(wordlist: &W, entropy: Entropy) -> Result<Self> {
        let phrase = Zeroizing::new(codec::encode(wordlist, entropy.as_bytes())?);
        Ok(Self { entropy, phrase })
    }

    /// The phrase, words separated by single spaces.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Iterate over the words of the phrase.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(' ')
    }

    /// The encoded entropy.
    #[inline]
    pub const fn entropy(&self) -> &Entropy {
        &self.entropy
    }

    /// The entropy size.
    #[inline]
    pub const fn size(&self) -> EntropySize {
        self.entropy.size()
    }

    /// Number of words in the phrase.
    #[inline]
    pub const fn word_count(&self) -> usize {
        self.entropy.size().word_count()
    }

    /// Derive the 64-byte seed with an optional passphrase.
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        seed::derive_seed(&self.phrase, passphrase)
    }
}

impl Zeroize for Mnemonic {
    fn zeroize(&mut self) {
        self.entropy.zeroize();
        self.phrase.zeroize();
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase)
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic({} words)", self.word_count())
    }
}

impl core::str::FromStr for Mnemonic {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
