//! Game tuning constants

use super::achievements::{HIGH_SCORE_THRESHOLD, QUICK_WIN_SECS};
use crate::wordlists::MAX_WORDS;

/// Rules that shape every round of a session
///
/// The defaults are the classic rules: three attempts, two hints at one point
/// each, two bonus points per streak level, High Scorer at 50 points and
/// Quick Thinker within 30 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Maximum number of dictionary words held at once
    pub max_words: usize,
    /// Wrong guesses allowed before the round is lost
    pub attempts_per_round: u32,
    /// Hints available for a single word
    pub max_hints_per_word: u32,
    /// Points deducted for each hint
    pub hint_cost: i32,
    /// Extra points per consecutive correct guess already on the streak
    pub combo_bonus_per_streak: i32,
    /// Score that unlocks High Scorer
    pub high_score_threshold: i32,
    /// Longest winning round, in whole seconds, that unlocks Quick Thinker
    pub quick_win_secs: u64,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_words: MAX_WORDS,
            attempts_per_round: 3,
            max_hints_per_word: 2,
            hint_cost: 1,
            combo_bonus_per_streak: 2,
            high_score_threshold: HIGH_SCORE_THRESHOLD,
            quick_win_secs: QUICK_WIN_SECS,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
