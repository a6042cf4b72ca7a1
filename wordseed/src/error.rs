//! Error types for mnemonic operations.

use std::fmt;

use crate::traits::WordlistError;

/// A convenient Result type alias for wordseed operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while encoding, decoding or deriving.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Entropy is not 128, 160, 192, 224 or 256 bits long.
    EntropySize {
        /// Length of the rejected entropy, in bits.
        len_bits: usize,
    },
    /// The phrase is not a valid mnemonic.
    ///
    /// Word-count, unknown-word and checksum failures all surface through
    /// this one variant and share one message. The precise cause is kept in
    /// the [`MnemonicFault`] for callers that want it.
    Mnemonic(MnemonicFault),
    /// The word list is malformed or could not resolve a lookup.
    Wordlist(WordlistError),
    /// Mnemonic prefix is too short for unambiguous expansion.
    PrefixTooShort {
        /// The prefix that was too short.
        prefix: String,
        /// Minimum required prefix length.
        min_len: usize,
    },
    /// Mnemonic prefix does not match any word in the wordlist.
    UnknownPrefix(String),
    /// Mnemonic prefix matches multiple words in the wordlist.
    AmbiguousPrefix {
        /// The ambiguous prefix.
        prefix: String,
        /// Words that match the prefix.
        candidates: Vec<String>,
    },
}

impl Error {
    /// The underlying cause when this is a [`Error::Mnemonic`] failure.
    pub const fn mnemonic_fault(&self) -> Option<MnemonicFault> {
        match self {
            Self::Mnemonic(fault) => Some(*fault),
            _ => None,
        }
    }

    /// Whether this error rejects a mnemonic phrase.
    pub const fn is_mnemonic(&self) -> bool {
        matches!(self, Self::Mnemonic(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntropySize { len_bits } => write!(
                f,
                "invalid entropy size {len_bits} bits, must be 128, 160, 192, 224, or 256"
            ),
            Self::Mnemonic(_) => write!(f, "invalid mnemonic"),
            Self::Wordlist(e) => write!(f, "wordlist error: {e}"),
            Self::PrefixTooShort { prefix, min_len } => {
                write!(f, "prefix \"{prefix}\" is too short (minimum {min_len} characters)")
            }
            Self::UnknownPrefix(prefix) => {
                write!(f, "prefix \"{prefix}\" does not match any word")
            }
            Self::AmbiguousPrefix { prefix, candidates } => {
                write!(f, "prefix \"{prefix}\" is ambiguous, matches: {}", candidates.join(", "))
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mnemonic(fault) => Some(fault),
            Self::Wordlist(e) => Some(e),
            Self::EntropySize { .. }
            | Self::PrefixTooShort { .. }
            | Self::UnknownPrefix(_)
            | Self::AmbiguousPrefix { .. } => None,
        }
    }
}

impl From<WordlistError> for Error {
    fn from(err: WordlistError) -> Self {
        Self::Wordlist(err)
    }
}

impl From<MnemonicFault> for Error {
    fn from(fault: MnemonicFault) -> Self {
        Self::Mnemonic(fault)
    }
}

/// Why a phrase was rejected as a mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnemonicFault {
    /// Word count is not 12, 15, 18, 21 or 24.
    WordCount(usize),
    /// The word at this 0-based position is not in the wordlist.
    UnknownWord {
        /// Position of the offending word.
        position: usize,
    },
    /// All words are known but the embedded checksum does not match.
    Checksum,
}

impl MnemonicFault {
    /// Short machine-friendly name, used in log events.
    pub const fn kind(self) -> &'static str {
        match self {
            Self::WordCount(_) => "word_count",
            Self::UnknownWord { .. } => "unknown_word",
            Self::Checksum => "checksum",
        }
    }
}

impl fmt::Display for MnemonicFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordCount(n) => {
                write!(f, "invalid word count {n}, must be 12, 15, 18, 21, or 24")
            }
            Self::UnknownWord { position } => write!(f, "word {} is not in the wordlist", position + 1),
            Self::Checksum => write!(f, "checksum mismatch"),
        }
    }
}

impl std::error::Error for MnemonicFault {}
