//! Mnemonic to seed stretching.
//!
//! The seed is `PBKDF2-HMAC-SHA512(password = phrase, salt = "mnemonic" ||
//! passphrase, 2048 rounds, 64 bytes)`. The phrase and passphrase are used
//! as raw UTF-8; no Unicode normalisation is applied.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::codec;
use crate::error::Result;
use crate::traits::Wordlist;

/// Number of PBKDF2 rounds for seed derivation.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Seed length in bytes.
pub const SEED_LEN: usize = 64;

/// Salt prefix prepended to the passphrase.
const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte seed, zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(Zeroizing<[u8; SEED_LEN]>);

impl Seed {
    /// The raw seed bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Lowercase hex encoding of the seed.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.0.as_slice()))
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl core::fmt::Debug for Seed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// Derive a seed from any phrase, valid or not.
///
/// Use [`derive_seed_checked`] unless the caller has already validated the
/// phrase or deliberately accepts non-standard phrases.
pub fn derive_seed(phrase: &str, passphrase: &str) -> Seed {
    let salt = Zeroizing::new(format!("{SALT_PREFIX}{passphrase}"));
    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    pbkdf2_hmac::<Sha512>(phrase.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, seed.as_mut_slice());
    tracing::trace!(rounds = PBKDF2_ROUNDS, "derived seed");
    Seed(seed)
}

/// Validate `phrase` against `wordlist`, then derive its seed.
///
/// # Errors
///
/// Returns [`crate::Error::Mnemonic`] if the phrase is not a valid mnemonic.
pub fn derive_seed_checked<W: Wordlist + ?Sized>(
    wordlist: &W,
    phrase: &str,
    passphrase: &str,
) -> Result<Seed> {
    codec::decode(wordlist, phrase)?;
    Ok(derive_seed(phrase, passphrase))
}
