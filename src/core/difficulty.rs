//! Difficulty tiers
//!
//! Maps a word's length to the Easy/Medium/Hard buckets used to pick words for a round.

use std::fmt;

/// Shortest word that belongs to any tier
pub const EASY_MIN_LENGTH: usize = 3;
/// Longest Easy word
pub const EASY_MAX_LENGTH: usize = 5;
/// Shortest Medium word
pub const MEDIUM_MIN_LENGTH: usize = 6;
/// Longest Medium word
pub const MEDIUM_MAX_LENGTH: usize = 8;
/// Shortest Hard word (no upper bound)
pub const HARD_MIN_LENGTH: usize = 9;

/// Difficulty tier derived from word length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 3-5 letters
    Easy,
    /// 6-8 letters
    Medium,
    /// 9+ letters
    Hard,
}

impl Difficulty {
    /// All tiers in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Map a difficulty menu selection (1/2/3) to a tier
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_choice(2), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_choice(4), None);
    /// ```
    #[must_use]
    pub const fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Menu number for this tier
    #[must_use]
    pub const fn choice(self) -> i64 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Inclusive length range; `None` as the upper bound means unbounded
    #[must_use]
    pub const fn length_range(self) -> (usize, Option<usize>) {
        match self {
            Self::Easy => (EASY_MIN_LENGTH, Some(EASY_MAX_LENGTH)),
            Self::Medium => (MEDIUM_MIN_LENGTH, Some(MEDIUM_MAX_LENGTH)),
            Self::Hard => (HARD_MIN_LENGTH, None),
        }
    }

    /// Check whether a length falls inside this tier
    #[inline]
    #[must_use]
    pub const fn contains_length(self, len: usize) -> bool {
        match self.length_range() {
            (min, Some(max)) => len >= min && len <= max,
            (min, None) => len >= min,
        }
    }

    /// Menu label, e.g. "Easy (3-5 letters)"
    #[must_use]
    pub fn menu_label(self) -> String {
        match self.length_range() {
            (min, Some(max)) => format!("{self} ({min}-{max} letters)"),
            (min, None) => format!("{self} ({min}+ letters)"),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };
        f.write_str(name)
    }
}

/// Number of characters in a word, the unit every tier is measured in
#[inline]
#[must_use]
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// Classify a word by its length
///
/// Words shorter than three characters belong to no tier.
///
/// # Examples
/// ```
/// use unscramble::core::{classify, Difficulty};
///
/// assert_eq!(classify("cat"), Some(Difficulty::Easy));
/// assert_eq!(classify("elephant"), Some(Difficulty::Medium));
/// assert_eq!(classify("adventure"), Some(Difficulty::Hard));
/// assert_eq!(classify("ox"), None);
/// ```
#[must_use]
pub fn classify(word: &str) -> Option<Difficulty> {
    let len = word_length(word);
    Difficulty::ALL
        .into_iter()
        .find(|tier| tier.contains_length(len))
}

/// Keep only the words of the given tier, preserving their order
#[must_use]
pub fn filter_by_difficulty<S: AsRef<str>>(words: &[S], tier: Difficulty) -> Vec<&str> {
    words
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|word| classify(word) == Some(tier))
        .collect()
}
