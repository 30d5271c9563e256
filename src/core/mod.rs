//! Core word handling
//!
//! Pure functions with no I/O: difficulty classification and scrambling.

mod difficulty;
mod scramble;

pub use difficulty::{
    Difficulty, EASY_MAX_LENGTH, EASY_MIN_LENGTH, HARD_MIN_LENGTH, MEDIUM_MAX_LENGTH,
    MEDIUM_MIN_LENGTH, classify, filter_by_difficulty, word_length,
};
pub use scramble::{is_anagram, letter_counts, scramble};
