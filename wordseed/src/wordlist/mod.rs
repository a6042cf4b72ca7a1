//! Vocabularies for mnemonic encoding.
//!
//! A [`Vocabulary`] is an ordered list of exactly 2048 distinct words plus a
//! reverse index from word to position. The canonical BIP-39 English list is
//! always available through [`Vocabulary::english`]; other lists are built
//! with [`Vocabulary::from_words`] or [`Vocabulary::parse`] and passed
//! explicitly to each operation.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::traits::{Wordlist, WordlistError, WORDLIST_LEN};

/// BIP-39 English wordlist, one word per line.
pub const ENGLISH: &str = include_str!("./english.txt");

static ENGLISH_VOCABULARY: Lazy<Vocabulary> =
    Lazy::new(|| Vocabulary::parse(ENGLISH).expect("bundled English wordlist is valid"));

/// An ordered 2048-word list with a word-to-index lookup.
#[derive(Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Vocabulary {
    /// The canonical BIP-39 English vocabulary.
    pub fn english() -> &'static Self {
        &ENGLISH_VOCABULARY
    }

    /// Build a vocabulary from words in canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`WordlistError::InvalidLength`] unless exactly 2048 words are
    /// given, [`WordlistError::InvalidWord`] for an empty word or one that
    /// contains whitespace, and [`WordlistError::DuplicateWord`] when a word
    /// repeats.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != WORDLIST_LEN {
            return Err(WordlistError::InvalidLength(words.len()).into());
        }

        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(WordlistError::InvalidWord(word.clone()).into());
            }
            if index.insert(word.clone(), i as u16).is_some() {
                return Err(WordlistError::DuplicateWord(word.clone()).into());
            }
        }

        tracing::debug!(words = words.len(), first = %words[0], "built vocabulary");
        Ok(Self { words, index })
    }

    /// Build a vocabulary from newline-separated text.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped, so
    /// files with trailing newlines or CRLF endings load unchanged.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_words(text.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// Replace every word and rebuild the reverse index.
    ///
    /// On error the vocabulary is left untouched.
    pub fn replace<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self = Self::from_words(words)?;
        tracing::debug!("vocabulary replaced");
        Ok(())
    }

    /// The words in canonical order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words in canonical order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Wordlist for Vocabulary {
    #[inline]
    fn word(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    #[inline]
    fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    #[inline]
    fn len(&self) -> usize {
        self.words.len()
    }
}

impl core::fmt::Debug for Vocabulary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Vocabulary")
            .field("len", &self.words.len())
            .field("first", &self.words.first())
            .field("last", &self.words.last())
            .finish()
    }
}
