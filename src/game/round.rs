//! Round engine
//!
//! A round picks one word of the chosen tier, shows it scrambled, and then
//! accepts guesses and hint requests until the word is solved or the attempts
//! run out:
//!
//! ```text
//! Selecting -> Scrambling -> Guessing -> { Solved, Exhausted }
//! ```
//!
//! Scoring lives on [`SessionStats`], which the caller passes into every
//! mutating call so the streak and score carry over between rounds.

use super::achievements::RoundOutcome;
use super::config::GameConfig;
use super::error::{GameError, GameResult};
use super::hint::{Hint, HintKind, HintOutcome};
use super::session::SessionStats;
use crate::core::{Difficulty, filter_by_difficulty, scramble};
use log::debug;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::time::Instant;

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Guessing,
    Solved,
    Exhausted,
}

/// What a single guess did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The word was solved; `points` already includes `combo_bonus`
    Correct {
        points: i32,
        combo_bonus: i32,
        streak: u32,
        max_streak: u32,
    },
    /// Wrong guess with attempts remaining
    Incorrect { attempts_left: u32 },
    /// Wrong guess that used the last attempt; the score has been reset to zero
    Exhausted { answer: String },
}

/// One word to unscramble
#[derive(Debug, Clone)]
pub struct Round {
    target: String,
    letters: Vec<char>,
    scrambled: String,
    attempts_left: u32,
    hints_used: u32,
    status: RoundStatus,
    config: GameConfig,
    started_at: Instant,
    finished_at: Option<Instant>,
}

impl Round {
    /// Pick a random word of `difficulty` from `words` and scramble it
    ///
    /// # Errors
    ///
    /// - [`GameError::NoWordsLoaded`] if `words` is empty
    /// - [`GameError::EmptyFilteredSet`] if no word belongs to `difficulty`
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use unscramble::core::Difficulty;
    /// use unscramble::game::{GameConfig, GameError, Round};
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let words = ["cat", "dog", "elephant"];
    ///
    /// let round = Round::start(&words, Difficulty::Medium, GameConfig::default(), &mut rng).unwrap();
    /// assert_eq!(round.target(), "elephant");
    ///
    /// let err = Round::start(&words, Difficulty::Hard, GameConfig::default(), &mut rng).unwrap_err();
    /// assert_eq!(err, GameError::EmptyFilteredSet(Difficulty::Hard));
    /// ```
    pub fn start<S, R>(
        words: &[S],
        difficulty: Difficulty,
        config: GameConfig,
        rng: &mut R,
    ) -> GameResult<Self>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if words.is_empty() {
            return Err(GameError::NoWordsLoaded);
        }

        let eligible = filter_by_difficulty(words, difficulty);
        let target = *eligible
            .choose(rng)
            .ok_or(GameError::EmptyFilteredSet(difficulty))?;

        debug!(
            "Selected a {difficulty} word from {} candidates",
            eligible.len()
        );

        Ok(Self::with_target(target, config, rng))
    }

    /// Start a round on a known word
    pub fn with_target<R: Rng + ?Sized>(target: &str, config: GameConfig, rng: &mut R) -> Self {
        let scrambled = scramble(target, rng);
        Self {
            target: target.to_string(),
            letters: target.chars().collect(),
            scrambled,
            attempts_left: config.attempts_per_round,
            hints_used: 0,
            status: RoundStatus::Guessing,
            config,
            started_at: Instant::now(),
            finished_at: None,
        }
    }

    /// Submit a guess
    ///
    /// Matching is exact and case-sensitive. A correct guess scores the word
    /// length plus the combo bonus for the streak held before this guess. A
    /// wrong guess costs an attempt and breaks the streak; losing the last
    /// attempt wipes the score.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundOver`] if the round already ended.
    pub fn guess(&mut self, guess: &str, stats: &mut SessionStats) -> GameResult<GuessOutcome> {
        if self.is_over() {
            return Err(GameError::RoundOver);
        }

        if guess == self.target {
            let award = stats.award_correct(self.letters.len(), self.config.combo_bonus_per_streak);
            self.finish(RoundStatus::Solved);
            return Ok(GuessOutcome::Correct {
                points: award.points,
                combo_bonus: award.combo_bonus,
                streak: stats.streak,
                max_streak: stats.max_streak,
            });
        }

        self.attempts_left = self.attempts_left.saturating_sub(1);
        stats.break_streak();

        if self.attempts_left == 0 {
            stats.reset_score();
            self.finish(RoundStatus::Exhausted);
            return Ok(GuessOutcome::Exhausted {
                answer: self.target.clone(),
            });
        }

        Ok(GuessOutcome::Incorrect {
            attempts_left: self.attempts_left,
        })
    }

    /// Buy a hint
    ///
    /// Costs `hint_cost` points whatever the current score is, and never uses
    /// an attempt. Once the per-word allowance is spent the request is refused
    /// without touching the score.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundOver`] if the round already ended.
    pub fn use_hint<R: Rng + ?Sized>(
        &mut self,
        kind: HintKind,
        stats: &mut SessionStats,
        rng: &mut R,
    ) -> GameResult<HintOutcome> {
        if self.is_over() {
            return Err(GameError::RoundOver);
        }

        if self.hints_exhausted() {
            debug!("Hint refused after {} hints", self.hints_used);
            return Ok(HintOutcome::Refused);
        }

        let Some(hint) = Hint::reveal(kind, &self.letters, rng) else {
            return Ok(HintOutcome::Refused);
        };

        self.hints_used += 1;
        stats.deduct(self.config.hint_cost);

        Ok(HintOutcome::Revealed {
            hint,
            score: stats.score,
        })
    }

    fn finish(&mut self, status: RoundStatus) {
        debug!("Round finished: {status:?} after {} hints", self.hints_used);
        self.status = status;
        self.finished_at = Some(Instant::now());
    }

    /// Summary for the achievement evaluator, once the round has ended
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        let finished_at = self.finished_at?;
        Some(RoundOutcome {
            won: self.status == RoundStatus::Solved,
            hints_used: self.hints_used,
            time_taken: finished_at.duration_since(self.started_at),
        })
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The anagram shown to the player
    #[inline]
    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    #[inline]
    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[inline]
    #[must_use]
    pub const fn hints_exhausted(&self) -> bool {
        self.hints_used >= self.config.max_hints_per_word
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::Guessing
    }
}
