//! Game error types

use crate::core::Difficulty;
use thiserror::Error;

/// Conditions that stop a round from starting or continuing
///
/// None of these end the session; the shell reports them and returns to the menu.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The dictionary is empty or could not be read
    #[error("Error: No words loaded from the dictionary files.")]
    NoWordsLoaded,

    /// No loaded word matches the chosen tier
    #[error("No words available for the selected difficulty level ({0}).")]
    EmptyFilteredSet(Difficulty),

    /// A guess or hint arrived after the round was solved or exhausted
    #[error("This round is already over.")]
    RoundOver,
}

/// Result alias for game operations
pub type GameResult<T> = Result<T, GameError>;
