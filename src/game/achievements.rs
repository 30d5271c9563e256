//! Achievements
//!
//! Four one-shot awards checked after every round. Once unlocked, an
//! achievement stays unlocked for the rest of the session.

use std::time::Duration;

/// Default score needed for [`AchievementId::HighScorer`]
pub const HIGH_SCORE_THRESHOLD: i32 = 50;

/// Default longest winning round that still counts for [`AchievementId::QuickThinker`]
pub const QUICK_WIN_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    FirstWin,
    HintMaster,
    HighScorer,
    QuickThinker,
}

impl AchievementId {
    /// All achievements in display order
    pub const ALL: [Self; 4] = [
        Self::FirstWin,
        Self::HintMaster,
        Self::HighScorer,
        Self::QuickThinker,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstWin => "First Win",
            Self::HintMaster => "Hint Master",
            Self::HighScorer => "High Scorer",
            Self::QuickThinker => "Quick Thinker",
        }
    }

    /// Exclamation printed when the achievement unlocks
    #[must_use]
    pub const fn cheer(self) -> &'static str {
        match self {
            Self::FirstWin => "Congratulations!",
            Self::HintMaster => "Amazing!",
            Self::HighScorer => "Impressive!",
            Self::QuickThinker => "Fast thinking!",
        }
    }

}

/// Everything the evaluator needs to know about a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub won: bool,
    pub hints_used: u32,
    pub time_taken: Duration,
}

/// Achievement with its unlock state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: AchievementId,
    pub achieved: bool,
}

impl Achievement {
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.id.name()
    }
}

/// The session's achievement board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievements {
    entries: [Achievement; 4],
    high_score_threshold: i32,
    quick_win_secs: u64,
}

impl Default for Achievements {
    fn default() -> Self {
        Self::new()
    }
}

impl Achievements {
    /// A board with nothing unlocked and the default thresholds
    #[must_use]
    pub const fn new() -> Self {
        Self::with_thresholds(HIGH_SCORE_THRESHOLD, QUICK_WIN_SECS)
    }

    /// A board with nothing unlocked and custom High Scorer and Quick Thinker limits
    #[must_use]
    pub const fn with_thresholds(high_score_threshold: i32, quick_win_secs: u64) -> Self {
        const fn locked(id: AchievementId) -> Achievement {
            Achievement {
                id,
                achieved: false,
            }
        }

        Self {
            entries: [
                locked(AchievementId::FirstWin),
                locked(AchievementId::HintMaster),
                locked(AchievementId::HighScorer),
                locked(AchievementId::QuickThinker),
            ],
            high_score_threshold,
            quick_win_secs,
        }
    }

    /// Whether a round result satisfies the condition for `id`
    #[must_use]
    pub const fn is_earned(
        &self,
        id: AchievementId,
        won: bool,
        score: i32,
        hints_used: u32,
        time_taken_secs: u64,
    ) -> bool {
        match id {
            AchievementId::FirstWin => won,
            AchievementId::HintMaster => won && hints_used == 0,
            AchievementId::HighScorer => score >= self.high_score_threshold,
            AchievementId::QuickThinker => won && time_taken_secs <= self.quick_win_secs,
        }
    }

    /// Unlock condition for `id`, e.g. "Win within 30 seconds"
    #[must_use]
    pub fn description(&self, id: AchievementId) -> String {
        match id {
            AchievementId::FirstWin => "Win your first game".to_string(),
            AchievementId::HintMaster => "Win without using a hint".to_string(),
            AchievementId::HighScorer => {
                format!("Reach a score of {} or more", self.high_score_threshold)
            }
            AchievementId::QuickThinker => format!("Win within {} seconds", self.quick_win_secs),
        }
    }

    /// Unlock every achievement the round earned and return the ones that are new
    ///
    /// Achievements that were already unlocked are never reported again.
    ///
    /// # Examples
    /// ```
    /// use unscramble::game::{AchievementId, Achievements};
    ///
    /// let mut board = Achievements::new();
    /// let unlocked = board.evaluate(true, 3, 1, 45);
    /// assert_eq!(unlocked, vec![AchievementId::FirstWin]);
    ///
    /// // Winning again does not re-fire First Win
    /// assert!(board.evaluate(true, 6, 1, 45).is_empty());
    /// ```
    pub fn evaluate(
        &mut self,
        won: bool,
        score: i32,
        hints_used: u32,
        time_taken_secs: u64,
    ) -> Vec<AchievementId> {
        let earned: Vec<AchievementId> = self
            .entries
            .iter()
            .filter(|entry| !entry.achieved)
            .map(|entry| entry.id)
            .filter(|&id| self.is_earned(id, won, score, hints_used, time_taken_secs))
            .collect();

        for entry in &mut self.entries {
            if earned.contains(&entry.id) {
                entry.achieved = true;
            }
        }
        earned
    }

    /// [`Self::evaluate`] for a finished round
    pub fn evaluate_round(&mut self, outcome: &RoundOutcome, score: i32) -> Vec<AchievementId> {
        self.evaluate(
            outcome.won,
            score,
            outcome.hints_used,
            outcome.time_taken.as_secs(),
        )
    }

    #[must_use]
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.entries.iter().any(|entry| entry.id == id && entry.achieved)
    }

    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.achieved).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.entries.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
