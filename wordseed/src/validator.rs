//! Mnemonic validation without handing back the entropy.
//!
//! [`is_valid`] is the supported check: a phrase is valid only when its word
//! count is allowed, every word is known, and the checksum matches.
//! [`check_words`] stops after the first two conditions and accepts phrases
//! with a wrong checksum.

use crate::codec;
use crate::error::{Error, MnemonicFault, Result};
use crate::profile::{EntropySize, MnemonicProfile};
use crate::traits::Wordlist;

/// Whether `phrase` is a valid mnemonic under `wordlist`, checksum included.
pub fn is_valid<W: Wordlist + ?Sized>(wordlist: &W, phrase: &str) -> bool {
    validate(wordlist, phrase).is_ok()
}

/// Like [`is_valid`] but reports why the phrase was rejected.
///
/// # Errors
///
/// Returns [`Error::Mnemonic`] on any failure.
pub fn validate<W: Wordlist + ?Sized>(wordlist: &W, phrase: &str) -> Result<()> {
    codec::decode(wordlist, phrase).map(drop)
}

/// Check word count and membership only, skipping the checksum.
///
/// Returns the profile implied by the word count.
///
/// # Errors
///
/// Returns [`Error::Mnemonic`] if the word count is not allowed or a word is
/// not in `wordlist`.
pub fn check_words<W: Wordlist + ?Sized>(wordlist: &W, phrase: &str) -> Result<MnemonicProfile> {
    let indices = codec::word_indices(wordlist, phrase).map_err(Error::Mnemonic)?;
    EntropySize::from_word_count(indices.len())
        .map(EntropySize::profile)
        .ok_or(Error::Mnemonic(MnemonicFault::WordCount(indices.len())))
}
