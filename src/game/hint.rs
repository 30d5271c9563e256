//! Hints the player can buy during a round

use rand::Rng;
use std::fmt;

/// Literal guess that opens the hint menu instead of spending an attempt
pub const HINT_KEYWORD: &str = "hint";

/// Which kind of hint the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    /// Show the first letter of the word
    FirstLetter,
    /// Show how many letters the word has
    Length,
    /// Show one letter at a random position
    RandomLetter,
}

impl HintKind {
    /// All hint kinds in menu order
    pub const ALL: [Self; 3] = [Self::FirstLetter, Self::Length, Self::RandomLetter];

    /// Map a hint menu selection (1/2/3) to a hint kind
    #[must_use]
    pub const fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::FirstLetter),
            2 => Some(Self::Length),
            3 => Some(Self::RandomLetter),
            _ => None,
        }
    }

    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::FirstLetter => "Reveal the first letter",
            Self::Length => "Show word length",
            Self::RandomLetter => "Reveal a random letter",
        }
    }
}

/// A revealed piece of the target word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    FirstLetter(char),
    Length(usize),
    /// `position` is 1-based
    Letter { position: usize, letter: char },
}

impl Hint {
    /// Reveal `kind` for a word given as its letters
    ///
    /// Returns `None` only for an empty word.
    pub fn reveal<R: Rng + ?Sized>(kind: HintKind, letters: &[char], rng: &mut R) -> Option<Self> {
        let first = *letters.first()?;
        let hint = match kind {
            HintKind::FirstLetter => Self::FirstLetter(first),
            HintKind::Length => Self::Length(letters.len()),
            HintKind::RandomLetter => {
                let index = rng.random_range(0..letters.len());
                Self::Letter {
                    position: index + 1,
                    letter: letters[index],
                }
            }
        };
        Some(hint)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstLetter(letter) => write!(f, "First letter: {letter}"),
            Self::Length(len) => write!(f, "Word length: {len} letters."),
            Self::Letter { position, letter } => {
                write!(f, "Revealed letter at position {position}: {letter}")
            }
        }
    }
}

/// Result of asking for a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// The hint was shown and paid for; `score` is the score after the deduction
    Revealed { hint: Hint, score: i32 },
    /// The per-word hint allowance is used up; nothing changed
    Refused,
}
