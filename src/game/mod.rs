//! Game rules
//!
//! Rounds, hints, scoring and achievements. Nothing here reads from or writes
//! to the terminal.

pub mod achievements;
mod config;
mod error;
pub mod hint;
pub mod round;
pub mod session;

pub use achievements::{Achievement, AchievementId, Achievements, RoundOutcome};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use hint::{HINT_KEYWORD, Hint, HintKind, HintOutcome};
pub use round::{GuessOutcome, Round, RoundStatus};
pub use session::{Award, Session, SessionStats};
