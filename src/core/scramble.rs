//! Word scrambling
//!
//! Produces the anagram shown to the player and compares letter multisets.

use rand::Rng;
use rustc_hash::FxHashMap;

/// Scramble a word by swapping every position with a random one
///
/// For each index `i`, a partner index is drawn from the whole word (not the
/// shrinking tail a Fisher-Yates shuffle would use) and the two are swapped.
/// The result is not uniform over permutations and may equal the input.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use unscramble::core::{is_anagram, scramble};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let anagram = scramble("planet", &mut rng);
/// assert!(is_anagram(&anagram, "planet"));
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    let len = letters.len();

    if len <= 1 {
        return word.to_string();
    }

    for i in 0..len {
        let k = rng.random_range(0..len);
        letters.swap(i, k);
    }

    letters.into_iter().collect()
}

/// Count each character in a word
#[must_use]
pub fn letter_counts(word: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in word.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Check whether two words use exactly the same letters
#[must_use]
pub fn is_anagram(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count() && letter_counts(a) == letter_counts(b)
}
