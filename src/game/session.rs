//! Session state
//!
//! Everything that outlives a single round: the dictionary, the running score
//! and streak, the achievement board and the random number generator.

use super::achievements::{AchievementId, Achievements};
use super::config::GameConfig;
use super::error::GameResult;
use super::hint::{HintKind, HintOutcome};
use super::round::{GuessOutcome, Round};
use crate::core::Difficulty;
use crate::wordlists::{WordList, WordSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Score and streak counters for the current run
///
/// `highest_score` and `max_streak` only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// May go negative through hint costs
    pub score: i32,
    pub highest_score: i32,
    /// Consecutive correct guesses
    pub streak: u32,
    pub max_streak: u32,
}

/// Points from one correct guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    /// Total added to the score, bonus included
    pub points: i32,
    pub combo_bonus: i32,
}

impl SessionStats {
    /// Credit a solved word of `word_len` letters
    ///
    /// The combo bonus is computed from the streak before this guess, then the
    /// streak grows by one.
    pub fn award_correct(&mut self, word_len: usize, bonus_per_streak: i32) -> Award {
        let combo_bonus = self.streak as i32 * bonus_per_streak;
        let points = word_len as i32 + combo_bonus;

        self.streak += 1;
        self.max_streak = self.max_streak.max(self.streak);

        self.score += points;
        self.highest_score = self.highest_score.max(self.score);

        Award {
            points,
            combo_bonus,
        }
    }

    /// Reset the streak after a wrong guess
    pub fn break_streak(&mut self) {
        self.streak = 0;
    }

    /// Subtract a cost from the score; no floor
    pub fn deduct(&mut self, cost: i32) {
        self.score -= cost;
    }

    /// Lose the whole score after an exhausted round
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

/// A player's game from launch to exit
///
/// Rounds borrow the session's RNG and stats through the methods here, so the
/// same session can be driven by the console shell or by tests.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    pub config: GameConfig,
    pub words: WordList,
    pub stats: SessionStats,
    pub achievements: Achievements,
    rng: R,
}

impl Session<StdRng> {
    /// Session seeded from the operating system
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Session with a reproducible sequence of words, scrambles and hints
    #[must_use]
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            words: WordList::with_capacity(config.max_words),
            stats: SessionStats::default(),
            achievements: Achievements::with_thresholds(
                config.high_score_threshold,
                config.quick_win_secs,
            ),
            rng,
        }
    }

    /// Add words from `source`, returning how many fit
    pub fn load_words(&mut self, source: &WordSource) -> usize {
        source.load_into(&mut self.words)
    }

    /// Select and scramble a word of `difficulty`
    ///
    /// # Errors
    ///
    /// See [`Round::start`].
    pub fn start_round(&mut self, difficulty: Difficulty) -> GameResult<Round> {
        Round::start(self.words.words(), difficulty, self.config, &mut self.rng)
    }

    /// Submit a guess for `round`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundOver`](super::GameError::RoundOver) if `round` already ended.
    pub fn guess(&mut self, round: &mut Round, guess: &str) -> GameResult<GuessOutcome> {
        round.guess(guess, &mut self.stats)
    }

    /// Buy a hint for `round`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundOver`](super::GameError::RoundOver) if `round` already ended.
    pub fn use_hint(&mut self, round: &mut Round, kind: HintKind) -> GameResult<HintOutcome> {
        round.use_hint(kind, &mut self.stats, &mut self.rng)
    }

    /// Evaluate achievements for a finished round
    ///
    /// Uses the round's real outcome and the score after the round. A round
    /// still in progress unlocks nothing.
    pub fn finish_round(&mut self, round: &Round) -> Vec<AchievementId> {
        round
            .outcome()
            .map(|outcome| {
                self.achievements
                    .evaluate_round(&outcome, self.stats.score)
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameError;
    use crate::game::round::RoundStatus;

    fn session_with(words: &str) -> Session {
        let mut session = Session::seeded(GameConfig::default(), 7);
        session.words.extend_from_str(words);
        session
    }

    #[test]
    fn award_tracks_highest_score_and_max_streak() {
        let mut stats = SessionStats::default();

        assert_eq!(
            stats.award_correct(3, 2),
            Award {
                points: 3,
                combo_bonus: 0
            }
        );
        assert_eq!(
            stats.award_correct(5, 2),
            Award {
                points: 7,
                combo_bonus: 2
            }
        );
        assert_eq!(stats.score, 10);
        assert_eq!(stats.highest_score, 10);
        assert_eq!(stats.max_streak, 2);

        stats.break_streak();
        stats.reset_score();
        assert_eq!(stats.award_correct(4, 2).points, 4);
        assert_eq!(stats.highest_score, 10);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn deduct_can_go_negative() {
        let mut stats = SessionStats::default();
        stats.deduct(1);
        stats.deduct(1);
        assert_eq!(stats.score, -2);
        assert_eq!(stats.highest_score, 0);
    }

    #[test]
    fn cat_dog_scenario() {
        let mut session = session_with("cat dog");
        let mut round = session.start_round(Difficulty::Easy).unwrap();
        let target = round.target().to_string();

        let outcome = session.guess(&mut round, &target).unwrap();

        assert!(matches!(outcome, GuessOutcome::Correct { points: 3, .. }));
        assert_eq!(session.stats.score, 3);
        assert_eq!(session.stats.streak, 1);
    }

    #[test]
    fn empty_session_cannot_start_a_round() {
        let mut session = session_with("");
        assert_eq!(
            session.start_round(Difficulty::Easy).unwrap_err(),
            GameError::NoWordsLoaded
        );
    }

    #[test]
    fn highest_score_is_max_over_rounds() {
        let mut session = session_with("cat dog sun");
        let mut observed = vec![0];

        for round_no in 0..12 {
            let mut round = session.start_round(Difficulty::Easy).unwrap();
            if round_no % 4 == 3 {
                while !round.is_over() {
                    session.guess(&mut round, "nope").unwrap();
                    observed.push(session.stats.score);
                }
            } else {
                let target = round.target().to_string();
                session.guess(&mut round, &target).unwrap();
                observed.push(session.stats.score);
            }
            assert_eq!(
                session.stats.highest_score,
                *observed.iter().max().unwrap()
            );
        }
    }

    #[test]
    fn streak_carries_between_rounds() {
        let mut session = session_with("cat");
        for expected_points in [3, 5, 7] {
            let mut round = session.start_round(Difficulty::Easy).unwrap();
            let outcome = session.guess(&mut round, "cat").unwrap();
            assert!(matches!(
                outcome,
                GuessOutcome::Correct { points, .. } if points == expected_points
            ));
        }
        assert_eq!(session.stats.score, 15);
        assert_eq!(session.stats.max_streak, 3);
    }

    #[test]
    fn finish_round_uses_real_outcome() {
        let mut session = session_with("cat");

        let mut lost = session.start_round(Difficulty::Easy).unwrap();
        for _ in 0..3 {
            session.guess(&mut lost, "dog").unwrap();
        }
        assert_eq!(lost.status(), RoundStatus::Exhausted);
        assert!(session.finish_round(&lost).is_empty());

        let mut won = session.start_round(Difficulty::Easy).unwrap();
        session.use_hint(&mut won, HintKind::Length).unwrap();
        session.guess(&mut won, "cat").unwrap();
        let unlocked = session.finish_round(&won);
        assert_eq!(
            unlocked,
            vec![AchievementId::FirstWin, AchievementId::QuickThinker]
        );
    }

    #[test]
    fn unfinished_round_unlocks_nothing() {
        let mut session = session_with("cat");
        let round = session.start_round(Difficulty::Easy).unwrap();
        assert!(session.finish_round(&round).is_empty());
    }

    #[test]
    fn achievement_thresholds_follow_config() {
        let config = GameConfig {
            high_score_threshold: 3,
            ..GameConfig::default()
        };
        let mut session = Session::seeded(config, 3);
        session.words.extend_from_str("cat");

        let mut round = session.start_round(Difficulty::Easy).unwrap();
        session.guess(&mut round, "cat").unwrap();
        let unlocked = session.finish_round(&round);

        assert!(unlocked.contains(&AchievementId::HighScorer));
        assert_eq!(
            session.achievements.description(AchievementId::HighScorer),
            "Reach a score of 3 or more"
        );
    }

    #[test]
    fn word_capacity_follows_config() {
        let config = GameConfig {
            max_words: 2,
            ..GameConfig::default()
        };
        let mut session = Session::seeded(config, 1);
        let added = session.load_words(&WordSource::Builtin(&["cat", "dog", "sun"]));
        assert_eq!(added, 2);
    }
}
