//! Entropy to mnemonic encoding and back.
//!
//! Encoding appends the checksum to the entropy and splits the resulting
//! bit string into 11-bit groups, most significant group first; each group
//! indexes one word. Decoding reverses this and rejects the phrase unless
//! the recomputed checksum matches.

use zeroize::Zeroizing;

use crate::bits::{BitReader, BitWriter};
use crate::checksum;
use crate::entropy::Entropy;
use crate::error::{Error, MnemonicFault, Result};
use crate::profile::{EntropySize, BITS_PER_WORD};
use crate::traits::{Wordlist, WordlistError};

/// Encode entropy as a space-separated mnemonic phrase.
///
/// # Errors
///
/// Returns [`Error::EntropySize`] unless `entropy` is 16, 20, 24, 28 or 32
/// bytes long, and [`Error::Wordlist`] if `wordlist` cannot resolve an
/// index.
pub fn encode<W: Wordlist + ?Sized>(wordlist: &W, entropy: &[u8]) -> Result<String> {
    let size = EntropySize::from_byte_len(entropy.len()).ok_or(Error::EntropySize {
        len_bits: entropy.len() * 8,
    })?;
    let profile = size.profile();

    let mut packed = BitWriter::new();
    packed.write_bytes(entropy);
    packed.write_bits(
        u16::from(checksum::checksum(entropy, profile.checksum_bits)),
        profile.checksum_bits,
    );
    debug_assert_eq!(packed.len(), profile.total_bits());

    let mut reader = BitReader::new(packed.as_bytes());
    let mut phrase = String::with_capacity(profile.word_count * 9);
    for i in 0..profile.word_count {
        let index = reader
            .read_bits(BITS_PER_WORD)
            .ok_or(WordlistError::InvalidIndex(i))?;
        let word = wordlist
            .word(index)
            .ok_or(WordlistError::InvalidIndex(usize::from(index)))?;
        if i > 0 {
            phrase.push(' ');
        }
        phrase.push_str(word);
    }
    Ok(phrase)
}

/// Decode a mnemonic phrase back into its entropy.
///
/// Words may be separated by any run of whitespace.
///
/// # Errors
///
/// Returns [`Error::Mnemonic`] if the word count is not 12, 15, 18, 21 or
/// 24, if a word is not in `wordlist`, or if the checksum does not match.
pub fn decode<W: Wordlist + ?Sized>(wordlist: &W, phrase: &str) -> Result<Entropy> {
    decode_words(wordlist, phrase).map_err(|fault| {
        tracing::debug!(fault = fault.kind(), "rejected mnemonic");
        Error::Mnemonic(fault)
    })
}

fn decode_words<W: Wordlist + ?Sized>(
    wordlist: &W,
    phrase: &str,
) -> core::result::Result<Entropy, MnemonicFault> {
    let indices = word_indices(wordlist, phrase)?;
    let size = EntropySize::from_word_count(indices.len())
        .ok_or(MnemonicFault::WordCount(indices.len()))?;
    let profile = size.profile();

    let mut packed = BitWriter::new();
    for &index in indices.iter() {
        packed.write_bits(index, BITS_PER_WORD);
    }

    let mut reader = BitReader::new(packed.as_bytes());
    let mut entropy = Zeroizing::new(vec![0u8; profile.entropy_bytes()]);
    let checksum = reader
        .read_bytes(&mut entropy)
        .and_then(|()| reader.read_bits(profile.checksum_bits))
        .ok_or(MnemonicFault::Checksum)?;

    if !checksum::verify(&entropy, profile.checksum_bits, checksum as u8) {
        return Err(MnemonicFault::Checksum);
    }
    Ok(Entropy::from_parts(entropy, size))
}

/// Map each word of `phrase` to its wordlist index.
///
/// The word-count gate runs before any lookup, so an overlong phrase is
/// rejected without touching the wordlist.
pub(crate) fn word_indices<W: Wordlist + ?Sized>(
    wordlist: &W,
    phrase: &str,
) -> core::result::Result<Zeroizing<Vec<u16>>, MnemonicFault> {
    let count = phrase.split_whitespace().count();
    if EntropySize::from_word_count(count).is_none() {
        return Err(MnemonicFault::WordCount(count));
    }

    let mut indices = Zeroizing::new(Vec::with_capacity(count));
    for (position, word) in phrase.split_whitespace().enumerate() {
        let index = wordlist
            .index_of(word)
            .ok_or(MnemonicFault::UnknownWord { position })?;
        indices.push(index);
    }
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::Vocabulary;
    use hex_literal::hex;

    const ZERO_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const ZERO_24: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";

    fn english() -> &'static Vocabulary {
        Vocabulary::english()
    }

    #[test]
    fn test_encode_zero_256() {
        assert_eq!(encode(english(), &[0u8; 32]).unwrap(), ZERO_24);
    }

    #[test]
    fn test_encode_zero_128() {
        assert_eq!(encode(english(), &[0u8; 16]).unwrap(), ZERO_12);
    }

    #[test]
    fn test_decode_zero_256() {
        let entropy = decode(english(), ZERO_24).unwrap();
        assert_eq!(entropy.as_bytes(), &[0u8; 32]);
        assert_eq!(entropy.size(), EntropySize::Bits256);
    }

    #[test]
    fn test_encode_each_size() {
        let cases: [(&[u8], &str); 3] = [
            (
                &hex!("0000000000000000000000000000000000000000"),
                "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon address",
            ),
            (
                &hex!("000000000000000000000000000000000000000000000000"),
                "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon agent",
            ),
            (
                &hex!("00000000000000000000000000000000000000000000000000000000"),
                "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon admit",
            ),
        ];
        for (entropy, phrase) in cases {
            assert_eq!(encode(english(), entropy).unwrap(), phrase);
            assert_eq!(decode(english(), phrase).unwrap().as_bytes(), entropy);
        }
    }

    #[test]
    fn test_leading_zero_bytes_survive_decode() {
        let entropy = hex!("0000000000000000000000000000000000000001");
        let phrase = encode(english(), &entropy).unwrap();
        assert_eq!(
            phrase,
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon amateur"
        );
        assert_eq!(decode(english(), &phrase).unwrap().as_bytes(), &entropy);
    }

    #[test]
    fn test_encode_rejects_bad_length() {
        for len in [0, 15, 17, 33] {
            let err = encode(english(), &vec![0u8; len]).unwrap_err();
            assert_eq!(err, Error::EntropySize { len_bits: len * 8 });
        }
    }

    #[test]
    fn test_decode_unknown_word() {
        let phrase = ZERO_12.replacen("abandon", "bitcoin", 1);
        let err = decode(english(), &phrase).unwrap_err();
        assert_eq!(err.to_string(), "invalid mnemonic");
        assert_eq!(
            err.mnemonic_fault(),
            Some(MnemonicFault::UnknownWord { position: 0 })
        );
    }

    #[test]
    fn test_decode_bad_word_count() {
        let eleven = ZERO_12.rsplit_once(' ').unwrap().0;
        let err = decode(english(), eleven).unwrap_err();
        assert_eq!(err.mnemonic_fault(), Some(MnemonicFault::WordCount(11)));

        let err = decode(english(), "").unwrap_err();
        assert_eq!(err.mnemonic_fault(), Some(MnemonicFault::WordCount(0)));
    }

    #[test]
    fn test_decode_bad_checksum() {
        // "abandon" x12 carries checksum 0 where 3 is required.
        let phrase = ["abandon"; 12].join(" ");
        let err = decode(english(), &phrase).unwrap_err();
        assert_eq!(err.mnemonic_fault(), Some(MnemonicFault::Checksum));
    }

    #[test]
    fn test_decode_is_case_sensitive() {
        let err = decode(english(), &ZERO_12.to_uppercase()).unwrap_err();
        assert!(err.is_mnemonic());
    }

    #[test]
    fn test_decode_tolerates_irregular_whitespace() {
        let messy = format!("  {}\n", ZERO_12.replace(' ', " \t "));
        assert_eq!(decode(english(), &messy).unwrap().as_bytes(), &[0u8; 16]);
    }

    #[test]
    fn test_custom_vocabulary_changes_encoding() {
        let reversed: Vec<&str> = english().iter().rev().collect();
        let vocab = Vocabulary::from_words(reversed).unwrap();

        let phrase = encode(&vocab, &[0u8; 16]).unwrap();
        assert!(phrase.starts_with("zoo zoo"));
        assert_eq!(decode(&vocab, &phrase).unwrap().as_bytes(), &[0u8; 16]);
        assert!(decode(english(), &phrase).is_err());
    }

    /// A wordlist missing its upper half.
    #[derive(Debug)]
    struct Truncated;

    impl Wordlist for Truncated {
        fn word(&self, index: u16) -> Option<&str> {
            english().word(index).filter(|_| index < 1024)
        }

        fn index_of(&self, word: &str) -> Option<u16> {
            english().index_of(word).filter(|&i| i < 1024)
        }

        fn len(&self) -> usize {
            1024
        }
    }

    #[test]
    fn test_encode_reports_unresolvable_index() {
        let err = encode(&Truncated, &[0xff; 16]).unwrap_err();
        assert_eq!(err, Error::Wordlist(WordlistError::InvalidIndex(2047)));
    }
}
