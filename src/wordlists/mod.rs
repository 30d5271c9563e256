//! Dictionaries for the game
//!
//! Words come either from a text file on disk or from the lists embedded at build time.

mod embedded;
pub mod loader;

use log::{info, warn};
use std::fmt;
use std::path::PathBuf;

pub use embedded::{BASIC, BASIC_COUNT, EXTENDED, EXTENDED_COUNT};
pub use loader::{MAX_WORDS, WordList};

/// Keyword selecting an embedded dictionary instead of a file
pub const BUILTIN_KEYWORD: &str = "builtin";

/// Where a batch of words comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// A dictionary compiled into the binary
    Builtin(&'static [&'static str]),
    /// A whitespace-separated text file
    File(PathBuf),
}

impl WordSource {
    /// Parse a `--wordlist` style argument
    ///
    /// `"builtin"` selects `builtin`; anything else is treated as a path.
    #[must_use]
    pub fn from_arg(arg: &str, builtin: &'static [&'static str]) -> Self {
        if arg == BUILTIN_KEYWORD {
            Self::Builtin(builtin)
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Append this source's words to `list`, returning how many were added
    ///
    /// A file that cannot be opened adds nothing; the failure is logged.
    pub fn load_into(&self, list: &mut WordList) -> usize {
        let added = match self {
            Self::Builtin(words) => list.extend_from_slice(words),
            Self::File(path) => loader::load_from_file(list, path).unwrap_or_else(|e| {
                warn!("Failed to load dictionary {}: {e}", path.display());
                0
            }),
        };
        info!("Loaded {added} words from {self} ({} total)", list.len());
        added
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(_) => write!(f, "built-in dictionary"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
