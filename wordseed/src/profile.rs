//! Entropy sizes and the mnemonic profile each one implies.

use core::fmt;
use core::str::FromStr;

/// Number of bits encoded by one mnemonic word.
pub const BITS_PER_WORD: usize = 11;

/// Supported entropy sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum EntropySize {
    /// 128 bits, 12 words.
    #[default]
    Bits128,
    /// 160 bits, 15 words.
    Bits160,
    /// 192 bits, 18 words.
    Bits192,
    /// 224 bits, 21 words.
    Bits224,
    /// 256 bits, 24 words.
    Bits256,
}

/// The fixed bit layout of a mnemonic for one [`EntropySize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MnemonicProfile {
    /// Entropy length in bits.
    pub entropy_bits: usize,
    /// Checksum length in bits (`entropy_bits / 32`).
    pub checksum_bits: usize,
    /// Number of words (`(entropy_bits + checksum_bits) / 11`).
    pub word_count: usize,
}

impl MnemonicProfile {
    /// Entropy length in bytes.
    #[inline]
    pub const fn entropy_bytes(&self) -> usize {
        self.entropy_bits / 8
    }

    /// Total encoded width: entropy plus checksum.
    #[inline]
    pub const fn total_bits(&self) -> usize {
        self.entropy_bits + self.checksum_bits
    }
}

impl EntropySize {
    /// All sizes in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Bits128,
        Self::Bits160,
        Self::Bits192,
        Self::Bits224,
        Self::Bits256,
    ];

    /// Entropy length in bits.
    #[inline]
    pub const fn bits(self) -> usize {
        match self {
            Self::Bits128 => 128,
            Self::Bits160 => 160,
            Self::Bits192 => 192,
            Self::Bits224 => 224,
            Self::Bits256 => 256,
        }
    }

    /// Entropy length in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// Checksum length in bits.
    #[inline]
    pub const fn checksum_bits(self) -> usize {
        self.bits() / 32
    }

    /// Number of words in a mnemonic of this size.
    #[inline]
    pub const fn word_count(self) -> usize {
        (self.bits() + self.checksum_bits()) / BITS_PER_WORD
    }

    /// The full bit layout for this size.
    pub const fn profile(self) -> MnemonicProfile {
        MnemonicProfile {
            entropy_bits: self.bits(),
            checksum_bits: self.checksum_bits(),
            word_count: self.word_count(),
        }
    }

    /// Look up a size by its bit length.
    pub const fn from_bits(bits: usize) -> Option<Self> {
        match bits {
            128 => Some(Self::Bits128),
            160 => Some(Self::Bits160),
            192 => Some(Self::Bits192),
            224 => Some(Self::Bits224),
            256 => Some(Self::Bits256),
            _ => None,
        }
    }

    /// Look up a size by its byte length.
    pub const fn from_byte_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Bits128),
            20 => Some(Self::Bits160),
            24 => Some(Self::Bits192),
            28 => Some(Self::Bits224),
            32 => Some(Self::Bits256),
            _ => None,
        }
    }

    /// Look up a size by the number of mnemonic words it produces.
    pub const fn from_word_count(words: usize) -> Option<Self> {
        match words {
            12 => Some(Self::Bits128),
            15 => Some(Self::Bits160),
            18 => Some(Self::Bits192),
            21 => Some(Self::Bits224),
            24 => Some(Self::Bits256),
            _ => None,
        }
    }
}

impl fmt::Display for EntropySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

/// Error returned when parsing an invalid entropy size string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseEntropySizeError;

impl fmt::Display for ParseEntropySizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid entropy size, expected bits (128, 160, 192, 224, 256) or words (12, 15, 18, 21, 24)"
        )
    }
}

impl std::error::Error for ParseEntropySizeError {}

impl FromStr for EntropySize {
    type Err = ParseEntropySizeError;

    /// Accepts a bit count ("256"), a word count ("24"), or either with a
    /// "bits"/"words" suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        let digits = s
            .trim_end_matches("bits")
            .trim_end_matches("words")
            .trim();
        let n: usize = digits.parse().map_err(|_| ParseEntropySizeError)?;
        Self::from_bits(n)
            .or_else(|| Self::from_word_count(n))
            .ok_or(ParseEntropySizeError)
    }
}
