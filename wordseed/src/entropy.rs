//! Validated entropy, the raw input of every mnemonic.

use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};
use crate::profile::EntropySize;

/// Entropy bytes whose length is one of the five supported sizes.
///
/// The bytes are zeroized on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Entropy {
    bytes: Zeroizing<Vec<u8>>,
    size: EntropySize,
}

impl Entropy {
    /// Copy `bytes` into a new entropy value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropySize`] unless `bytes` is 16, 20, 24, 28 or
    /// 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let size = EntropySize::from_byte_len(bytes.len()).ok_or(Error::EntropySize {
            len_bits: bytes.len() * 8,
        })?;
        Ok(Self {
            bytes: Zeroizing::new(bytes.to_vec()),
            size,
        })
    }

    /// Fill new entropy of `size` from a cryptographically secure RNG.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, size: EntropySize) -> Self {
        let mut bytes = Zeroizing::new(vec![0u8; size.bytes()]);
        rng.fill_bytes(&mut bytes);
        Self { bytes, size }
    }

    /// Like [`Entropy::generate`] but takes the size as a bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropySize`] unless `bits` is 128, 160, 192, 224
    /// or 256.
    pub fn generate_bits<R: RngCore + CryptoRng>(rng: &mut R, bits: usize) -> Result<Self> {
        let size = EntropySize::from_bits(bits).ok_or(Error::EntropySize { len_bits: bits })?;
        Ok(Self::generate(rng, size))
    }

    /// Fill new entropy of `size` from the operating system RNG.
    #[cfg(feature = "rand")]
    pub fn random(size: EntropySize) -> Self {
        Self::generate(&mut rand_core::OsRng, size)
    }

    /// Wrap bytes already known to have a valid length.
    pub(crate) fn from_parts(bytes: Zeroizing<Vec<u8>>, size: EntropySize) -> Self {
        debug_assert_eq!(bytes.len(), size.bytes());
        Self { bytes, size }
    }

    /// The raw entropy bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The entropy size.
    #[inline]
    pub const fn size(&self) -> EntropySize {
        self.size
    }

    /// Lowercase hex encoding of the entropy.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.bytes.as_slice()))
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Zeroize for Entropy {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl core::fmt::Debug for Entropy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Entropy({})", self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for a secure RNG.
    struct CountingRng(u8);

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            u32::from(self.next_byte())
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_byte())
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for b in dest {
                *b = self.next_byte();
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for CountingRng {}

    impl CountingRng {
        fn next_byte(&mut self) -> u8 {
            self.0 = self.0.wrapping_add(1);
            self.0
        }
    }

    #[test]
    fn test_from_bytes_valid_sizes() {
        for size in EntropySize::ALL {
            let entropy = Entropy::from_bytes(&vec![7u8; size.bytes()]).unwrap();
            assert_eq!(entropy.size(), size);
            assert_eq!(entropy.as_bytes().len(), size.bytes());
        }
    }

    #[test]
    fn test_from_bytes_invalid_sizes() {
        for len in [0, 1, 15, 17, 31, 33, 64] {
            let err = Entropy::from_bytes(&vec![0u8; len]).unwrap_err();
            assert_eq!(err, Error::EntropySize { len_bits: len * 8 });
        }
    }

    #[test]
    fn test_generate_uses_rng() {
        let entropy = Entropy::generate(&mut CountingRng(0), EntropySize::Bits160);
        assert_eq!(entropy.as_bytes(), (1..=20).collect::<Vec<u8>>().as_slice());
    }

    #[test]
    fn test_generate_bits() {
        let entropy = Entropy::generate_bits(&mut CountingRng(0), 256).unwrap();
        assert_eq!(entropy.size(), EntropySize::Bits256);

        let err = Entropy::generate_bits(&mut CountingRng(0), 100).unwrap_err();
        assert_eq!(err, Error::EntropySize { len_bits: 100 });
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_random_differs() {
        let a = Entropy::random(EntropySize::Bits256);
        let b = Entropy::random(EntropySize::Bits256);
        assert_eq!(a.as_bytes().len(), 32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_hex_and_debug() {
        let entropy = Entropy::from_bytes(&[0xab; 16]).unwrap();
        assert_eq!(entropy.to_hex().as_str(), "ab".repeat(16));
        assert_eq!(format!("{entropy:?}"), "Entropy(128 bits)");
    }
}
