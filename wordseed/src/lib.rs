//! # wordseed - BIP-39 mnemonic codec
//!
//! Converts entropy into checksummed, human-transcribable mnemonic phrases,
//! validates such phrases, and stretches them into 64-byte seeds.
//!
//! ## Features
//!
//! - **Injectable vocabulary**: every operation takes a [`Wordlist`], so
//!   tests and embedders can run with distinct word lists side by side
//! - **Fixed-width bit packing**: no big-integer arithmetic, every width is
//!   known up front
//! - **Secrets are zeroized**: entropy and seeds are wiped on drop
//!
//! ## Example
//!
//! ```
//! use wordseed::{codec, seed, Vocabulary};
//!
//! let english = Vocabulary::english();
//! let phrase = codec::encode(english, &[0u8; 16])?;
//! assert_eq!(
//!     phrase,
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
//! );
//!
//! let entropy = codec::decode(english, &phrase)?;
//! assert_eq!(entropy.as_bytes(), &[0u8; 16]);
//!
//! let seed = seed::derive_seed_checked(english, &phrase, "TREZOR")?;
//! assert_eq!(seed.as_bytes().len(), 64);
//! # Ok::<(), wordseed::Error>(())
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::cast_possible_truncation
)]
#![forbid(unsafe_code)]

pub mod bits;
pub mod checksum;
pub mod codec;
pub mod entropy;
pub mod error;
pub mod expand;
pub mod mnemonic;
pub mod profile;
pub mod seed;
pub mod traits;
pub mod validator;
pub mod wordlist;

pub use entropy::Entropy;
pub use error::{Error, MnemonicFault, Result};
pub use mnemonic::Mnemonic;
pub use profile::{EntropySize, MnemonicProfile, ParseEntropySizeError};
pub use seed::Seed;
pub use traits::{Wordlist, WordlistError};
pub use wordlist::Vocabulary;

// Re-export rand_core so callers can supply an RNG with matching trait versions.
pub use rand_core;
