//! Core traits shared by the codec, validator and expander.

use core::fmt::{self, Debug, Display};

/// Number of words in a BIP-39 wordlist (2^11).
pub const WORDLIST_LEN: usize = 2048;

/// The interface for a BIP-39 wordlist.
///
/// Encoding and decoding are only interoperable when both sides use a list
/// with the same words in the same order.
///
/// # Thread Safety
/// This trait requires `Send + Sync` so a single list can serve concurrent
/// readers.
pub trait Wordlist: Debug + Send + Sync {
    /// Get the word at the given 0-based index.
    fn word(&self, index: u16) -> Option<&str>;

    /// Get the index of the given word.
    fn index_of(&self, word: &str) -> Option<u16>;

    /// Number of words in the list.
    fn len(&self) -> usize;

    /// Whether the list holds no words.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `word` is a member of the list.
    fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }
}

impl<W: Wordlist + ?Sized> Wordlist for &W {
    fn word(&self, index: u16) -> Option<&str> {
        (**self).word(index)
    }

    fn index_of(&self, word: &str) -> Option<u16> {
        (**self).index_of(word)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Errors related to wordlist operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistError {
    /// Invalid index in wordlist.
    InvalidIndex(usize),
    /// The list does not hold exactly 2048 words.
    InvalidLength(usize),
    /// A word is empty or contains whitespace.
    InvalidWord(String),
    /// The same word appears more than once.
    DuplicateWord(String),
}

impl Display for WordlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex(i) => write!(f, "invalid wordlist index: {}", i),
            Self::InvalidLength(n) => {
                write!(f, "wordlist has {} words, expected {}", n, WORDLIST_LEN)
            }
            Self::InvalidWord(w) => write!(f, "invalid word: {:?}", w),
            Self::DuplicateWord(w) => write!(f, "duplicate word: {}", w),
        }
    }
}

impl std::error::Error for WordlistError {}
