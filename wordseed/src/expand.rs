//! Prefix expansion for abbreviated mnemonics.
//!
//! Words of the BIP-39 English list are uniquely identified by their first
//! four letters, so many backup cards only record those. [`expand`] turns
//! such a transcription back into full words.
//!
//! # Example
//!
//! ```
//! use wordseed::expand;
//!
//! let expanded = expand::expand("aban aban aban aban aban aban aban aban aban aban aban abou")?;
//! assert_eq!(
//!     expanded,
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
//! );
//! # Ok::<(), wordseed::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::traits::{Wordlist, WORDLIST_LEN};
use crate::wordlist::Vocabulary;

/// Minimum prefix length accepted for expansion.
pub const MIN_PREFIX_LEN: usize = 4;

/// Expand abbreviated words using the English wordlist.
///
/// See [`expand_in`] for details.
pub fn expand(phrase: &str) -> Result<String> {
    expand_in(Vocabulary::english(), phrase)
}

/// Expand abbreviated words using the given wordlist.
///
/// Each whitespace-separated token is resolved on its own:
/// - an exact word is kept as-is;
/// - a token of at least 4 characters that starts exactly one word is
///   replaced by that word;
/// - anything else is an error.
///
/// The result is not checksum-validated.
///
/// # Errors
///
/// Returns [`Error::PrefixTooShort`] for a non-word shorter than 4
/// characters, [`Error::UnknownPrefix`] when no word matches, and
/// [`Error::AmbiguousPrefix`] when several words match.
pub fn expand_in<W: Wordlist + ?Sized>(wordlist: &W, phrase: &str) -> Result<String> {
    let mut result = String::new();
    for (i, token) in phrase.split_whitespace().enumerate() {
        let word = resolve_token(wordlist, token)?;
        if i > 0 {
            result.push(' ');
        }
        result.push_str(word);
    }
    Ok(result)
}

/// Resolve a single token to a full word.
fn resolve_token<'a, W: Wordlist + ?Sized>(wordlist: &'a W, token: &str) -> Result<&'a str> {
    if let Some(word) = wordlist.index_of(token).and_then(|i| wordlist.word(i)) {
        return Ok(word);
    }

    if token.chars().count() < MIN_PREFIX_LEN {
        return Err(Error::PrefixTooShort {
            prefix: token.to_owned(),
            min_len: MIN_PREFIX_LEN,
        });
    }

    let matches: Vec<&str> = (0..WORDLIST_LEN.min(wordlist.len()))
        .filter_map(|i| wordlist.word(i as u16))
        .filter(|word| word.starts_with(token))
        .collect();

    match matches.as_slice() {
        [] => Err(Error::UnknownPrefix(token.to_owned())),
        [word] => Ok(*word),
        _ => Err(Error::AmbiguousPrefix {
            prefix: token.to_owned(),
            candidates: matches.iter().map(|w| (*w).to_owned()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn full_words_unchanged() {
        assert_eq!(expand(FULL_12).unwrap(), FULL_12);
    }

    #[test]
    fn four_letter_prefix_expansion() {
        let abbreviated = "aban aban aban aban aban aban aban aban aban aban aban abou";
        assert_eq!(expand(abbreviated).unwrap(), FULL_12);
    }

    #[test]
    fn mixed_full_and_abbreviated() {
        let input = "abandon aban abandon aban abandon aban abandon aban abandon aban abandon about";
        assert_eq!(expand(input).unwrap(), FULL_12);
    }

    #[test]
    fn longer_prefix_works() {
        let input = "abando abando abando abando abando abando abando abando abando abando abando about";
        assert_eq!(expand(input).unwrap(), FULL_12);
    }

    #[test]
    fn prefix_too_short_rejected() {
        let result = expand("aba aba aba aba aba aba aba aba aba aba aba aba");
        assert!(matches!(result, Err(Error::PrefixTooShort { min_len: 4, .. })));
    }

    #[test]
    fn unknown_prefix_rejected() {
        let result = expand("aban aban aban aban aban aban aban aban aban aban aban zzzz");
        assert_eq!(result, Err(Error::UnknownPrefix("zzzz".into())));
    }

    #[test]
    fn ambiguous_prefix_rejected() {
        // Four-letter prefixes are unique in English, so use a custom list.
        let mut words: Vec<String> = (0..2048).map(|i| format!("x{i:04}")).collect();
        words[0] = "carbon".into();
        words[1] = "carbonate".into();
        let vocab = Vocabulary::from_words(words).unwrap();

        match expand_in(&vocab, "carbo") {
            Err(Error::AmbiguousPrefix { prefix, candidates }) => {
                assert_eq!(prefix, "carbo");
                assert_eq!(candidates, ["carbon", "carbonate"]);
            }
            other => panic!("expected AmbiguousPrefix, got {other:?}"),
        }
        assert_eq!(expand_in(&vocab, "carbon").unwrap(), "carbon");
        assert_eq!(expand_in(&vocab, "carbona").unwrap(), "carbonate");
    }

    #[test]
    fn preserves_word_count() {
        let abbreviated = "aban aban aban aban aban aban aban aban aban aban aban aban aban aban aban aban aban aban aban aban aban aban aban art";
        assert_eq!(expand(abbreviated).unwrap().split_whitespace().count(), 24);
    }

    #[test]
    fn different_words_expand_correctly() {
        let input = "abil acti addr admi wall wris";
        assert_eq!(expand(input).unwrap(), "ability action address admit wall wrist");
    }

    #[test]
    fn exact_short_words_accepted() {
        // Words shorter than 4 characters must pass as exact matches.
        assert_eq!(expand("zoo art ice").unwrap(), "zoo art ice");
    }
}
