//! Checksum bits embedded at the end of every mnemonic.
//!
//! The checksum is the leading `ENT / 32` bits of `SHA-256(entropy)`. It is
//! returned right-aligned in a byte: for 128-bit entropy only the low four
//! bits of the result are meaningful.

use sha2::{Digest, Sha256};

/// Largest checksum width, reached by 256-bit entropy.
pub const MAX_CHECKSUM_BITS: usize = 8;

/// Compute the checksum of `entropy`, keeping `checksum_bits` bits.
///
/// `checksum_bits` must be between 1 and 8.
#[inline]
pub fn checksum(entropy: &[u8], checksum_bits: usize) -> u8 {
    debug_assert!((1..=MAX_CHECKSUM_BITS).contains(&checksum_bits));
    let digest = Sha256::digest(entropy);
    digest[0] >> (MAX_CHECKSUM_BITS - checksum_bits)
}

/// Check that `expected` is the checksum of `entropy`.
#[inline]
pub fn verify(entropy: &[u8], checksum_bits: usize, expected: u8) -> bool {
    checksum(entropy, checksum_bits) == expected
}
