//! Wordlist selection.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use wordseed::Vocabulary;

/// Failure to load a wordlist file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not a usable vocabulary.
    Wordlist {
        path: PathBuf,
        source: wordseed::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read wordlist {}: {source}", path.display())
            }
            Self::Wordlist { path, source } => {
                write!(f, "bad wordlist {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Wordlist { source, .. } => Some(source),
        }
    }
}

/// Load the vocabulary at `path`, or the English list when no path is given.
///
/// The file holds one word per line; blank lines are ignored.
pub fn load_vocabulary(path: Option<&Path>) -> Result<Cow<'static, Vocabulary>, ConfigError> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(Vocabulary::english()));
    };

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    let vocabulary = Vocabulary::parse(&text).map_err(|source| ConfigError::Wordlist {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded custom wordlist");
    Ok(Cow::Owned(vocabulary))
}
