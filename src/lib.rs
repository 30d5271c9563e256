//! Unscramble
//!
//! A console word-unscrambling game: pick a difficulty, unscramble the word in
//! three tries, chain correct answers for combo points, buy hints, and unlock
//! achievements.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::core::Difficulty;
//! use unscramble::game::{GameConfig, GuessOutcome, Session};
//!
//! let mut session = Session::seeded(GameConfig::default(), 42);
//! session.words.extend_from_str("cat dog");
//!
//! let mut round = session.start_round(Difficulty::Easy).unwrap();
//! println!("Unscramble: {}", round.scrambled());
//!
//! let answer = round.target().to_string();
//! let outcome = session.guess(&mut round, &answer).unwrap();
//! assert!(matches!(outcome, GuessOutcome::Correct { points: 3, .. }));
//! ```

// Word classification and scrambling
pub mod core;

// Rounds, scoring, hints and achievements
pub mod game;

// Dictionaries
pub mod wordlists;

// Console front end
pub mod commands;

// Terminal output formatting
pub mod output;
