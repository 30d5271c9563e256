//! Interactive console game
//!
//! The menu loop: play a round, visit the shop, or exit.

use super::console::Console;
use crate::core::{Difficulty, is_anagram};
use crate::game::{GuessOutcome, HINT_KEYWORD, HintKind, HintOutcome, Round, Session};
use crate::output::{
    print_achievements, print_correct, print_difficulty_menu, print_game_over, print_hint_menu,
    print_menu, print_shop_menu, print_unlocked,
};
use crate::wordlists::WordSource;
use colored::Colorize;
use log::{debug, info};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Whether the menu loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the menu loop until the player exits or input ends
///
/// `shop_source` is the dictionary the shop sells.
///
/// # Errors
///
/// Returns an error only if reading from or writing to the console fails.
pub fn run_game<R, W, G>(
    console: &mut Console<R, W>,
    session: &mut Session<G>,
    shop_source: &WordSource,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    loop {
        print_achievements(console.out(), &session.achievements)?;
        print_menu(console.out(), &session.stats)?;

        let Some(option) = console.read_number("Enter your selection: ")? else {
            break;
        };

        let flow = match option {
            1 => play_round(console, session)?,
            2 => visit_shop(console, session, shop_source)?,
            3 => Flow::Quit,
            _ => {
                writeln!(
                    console.out(),
                    "Invalid selection. Please enter a number between 1 and 3."
                )?;
                Flow::Continue
            }
        };

        if flow == Flow::Quit {
            break;
        }
    }

    info!(
        "Session over: highest score {}, max streak {}",
        session.stats.highest_score, session.stats.max_streak
    );
    writeln!(console.out(), "Exiting the game.")
}

fn play_round<R, W, G>(console: &mut Console<R, W>, session: &mut Session<G>) -> io::Result<Flow>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    print_difficulty_menu(console.out())?;
    let Some(choice) = console.read_number("Enter your choice: ")? else {
        return Ok(Flow::Quit);
    };

    let Some(difficulty) = Difficulty::from_choice(choice) else {
        writeln!(
            console.out(),
            "Invalid difficulty. Please choose 1, 2 or 3."
        )?;
        return Ok(Flow::Continue);
    };

    let mut round = match session.start_round(difficulty) {
        Ok(round) => round,
        Err(e) => {
            writeln!(console.out(), "{}", e.to_string().red())?;
            return Ok(Flow::Continue);
        }
    };

    writeln!(
        console.out(),
        "Anagram of the word is: {}",
        round.scrambled().bright_yellow().bold()
    )?;

    while !round.is_over() {
        let Some(guess) =
            console.read_token("Guess the word (or type 'hint' for a hint): ")?
        else {
            return Ok(Flow::Quit);
        };

        if guess == HINT_KEYWORD {
            if request_hint(console, session, &mut round)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
            continue;
        }

        let outcome = match session.guess(&mut round, &guess) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(console.out(), "{e}")?;
                break;
            }
        };

        match outcome {
            GuessOutcome::Correct {
                points,
                combo_bonus,
                streak,
                max_streak,
            } => print_correct(console.out(), points, combo_bonus, streak, max_streak)?,
            GuessOutcome::Incorrect { attempts_left } => {
                writeln!(
                    console.out(),
                    "{}",
                    format!("Incorrect guess. Attempts left: {attempts_left}").yellow()
                )?;
                if !is_anagram(&guess, round.scrambled()) {
                    writeln!(
                        console.out(),
                        "(\"{guess}\" doesn't use the letters of \"{}\")",
                        round.scrambled()
                    )?;
                }
            }
            GuessOutcome::Exhausted { answer } => {
                writeln!(
                    console.out(),
                    "{}",
                    "Incorrect guess. Attempts left: 0".yellow()
                )?;
                print_game_over(console.out(), &answer)?;
            }
        }
    }

    let unlocked = session.finish_round(&round);
    debug!("Round unlocked {} achievements", unlocked.len());
    print_unlocked(console.out(), &unlocked)?;

    console.wait_for_enter()?;
    Ok(Flow::Continue)
}

fn request_hint<R, W, G>(
    console: &mut Console<R, W>,
    session: &mut Session<G>,
    round: &mut Round,
) -> io::Result<Flow>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    if round.hints_exhausted() {
        writeln!(
            console.out(),
            "You have used all available hints for this word."
        )?;
        return Ok(Flow::Continue);
    }

    print_hint_menu(console.out())?;
    let Some(choice) = console.read_number("Enter your choice: ")? else {
        return Ok(Flow::Quit);
    };

    let Some(kind) = HintKind::from_choice(choice) else {
        writeln!(console.out(), "Invalid hint choice.")?;
        return Ok(Flow::Continue);
    };

    match session.use_hint(round, kind) {
        Ok(HintOutcome::Revealed { hint, score }) => {
            writeln!(console.out(), "{}", hint.to_string().bright_cyan())?;
            writeln!(console.out(), "Hint cost deducted. Current score: {score}")?;
        }
        Ok(HintOutcome::Refused) => {
            writeln!(
                console.out(),
                "You have used all available hints for this word."
            )?;
        }
        Err(e) => writeln!(console.out(), "{e}")?,
    }

    Ok(Flow::Continue)
}

fn visit_shop<R, W, G>(
    console: &mut Console<R, W>,
    session: &mut Session<G>,
    shop_source: &WordSource,
) -> io::Result<Flow>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    print_shop_menu(console.out())?;
    let Some(choice) = console.read_number("Enter your choice: ")? else {
        return Ok(Flow::Quit);
    };

    if choice == 1 {
        let added = session.load_words(shop_source);
        writeln!(
            console.out(),
            "{}",
            format!("{added} new words added!").green()
        )?;
    } else {
        writeln!(console.out(), "Exiting the shop.")?;
    }

    console.wait_for_enter()?;
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{AchievementId, GameConfig};
    use std::io::Cursor;

    fn play(session: &mut Session, input: &str, shop: &WordSource) -> String {
        colored::control::set_override(false);
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_game(&mut console, session, shop).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    fn session_with(words: &'static [&'static str]) -> Session {
        let mut session = Session::seeded(GameConfig::default(), 11);
        session.load_words(&WordSource::Builtin(words));
        session
    }

    fn no_shop() -> WordSource {
        WordSource::Builtin(&[])
    }

    #[test]
    fn exit_immediately() {
        let mut session = session_with(&["cat"]);
        let out = play(&mut session, "3\n", &no_shop());
        assert!(out.contains("1. Play the game"));
        assert!(out.contains("Current Score: 0"));
        assert!(out.ends_with("Exiting the game.\n"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut session = session_with(&["cat"]);
        let out = play(&mut session, "", &no_shop());
        assert!(out.ends_with("Exiting the game.\n"));
    }

    #[test]
    fn invalid_menu_input_is_retried() {
        let mut session = session_with(&["cat"]);
        let out = play(&mut session, "play\n9\n3\n", &no_shop());
        assert!(out.contains("Invalid selection. Please enter a number: "));
        assert!(out.contains("Invalid selection. Please enter a number between 1 and 3."));
        assert!(out.ends_with("Exiting the game.\n"));
    }

    #[test]
    fn solving_a_word_scores_and_unlocks() {
        let mut session = session_with(&["cat"]);
        let out = play(&mut session, "1\n1\ncat\n\n3\n", &no_shop());

        assert!(out.contains("Anagram of the word is: "));
        assert!(out.contains("Correct! You earned 3 points (including 0 combo points)!"));
        assert!(out.contains("Current streak: 1 | Max streak: 1"));
        assert!(out.contains("Congratulations! You earned the achievement: First Win!"));
        assert!(out.contains("Amazing! You earned the achievement: Hint Master!"));
        assert!(out.contains("Current Score: 3"));
        assert_eq!(session.stats.score, 3);
        assert!(session.achievements.is_unlocked(AchievementId::FirstWin));
    }

    #[test]
    fn three_misses_reveal_answer_and_wipe_score() {
        let mut session = session_with(&["elephant"]);
        session.stats.score = 20;
        session.stats.highest_score = 20;

        let out = play(
            &mut session,
            "1\n2\nwrong\nworse\nworst\n\n3\n",
            &no_shop(),
        );

        assert!(out.contains("Incorrect guess. Attempts left: 2"));
        assert!(out.contains("Incorrect guess. Attempts left: 1"));
        assert!(out.contains("Game Over! The correct answer was \"elephant\""));
        assert_eq!(session.stats.score, 0);
        assert_eq!(session.stats.highest_score, 20);
        assert!(!session.achievements.is_unlocked(AchievementId::FirstWin));
    }

    #[test]
    fn hints_cost_points_and_third_is_refused() {
        let mut session = session_with(&["garden"]);
        let out = play(
            &mut session,
            "1\n2\nhint\n1\nhint\n2\nhint\ngarden\n\n3\n",
            &no_shop(),
        );

        assert!(out.contains("First letter: g"));
        assert!(out.contains("Word length: 6 letters."));
        assert!(out.contains("Hint cost deducted. Current score: -1"));
        assert!(out.contains("Hint cost deducted. Current score: -2"));
        assert!(out.contains("You have used all available hints for this word."));
        // -2 for hints, +6 for the word
        assert_eq!(session.stats.score, 4);
        assert!(!session.achievements.is_unlocked(AchievementId::HintMaster));
    }

    #[test]
    fn invalid_hint_choice_is_free() {
        let mut session = session_with(&["cat"]);
        let out = play(&mut session, "1\n1\nhint\n7\ncat\n\n3\n", &no_shop());
        assert!(out.contains("Invalid hint choice."));
        assert_eq!(session.stats.score, 3);
    }

    #[test]
    fn empty_tier_returns_to_menu() {
        let mut session = session_with(&["cat", "dog"]);
        let out = play(&mut session, "1\n3\n3\n", &no_shop());
        assert!(out.contains("No words available for the selected difficulty level (Hard)."));
        assert!(out.ends_with("Exiting the game.\n"));
    }

    #[test]
    fn no_words_loaded_returns_to_menu() {
        let mut session = Session::seeded(GameConfig::default(), 3);
        let out = play(&mut session, "1\n1\n3\n", &no_shop());
        assert!(out.contains("Error: No words loaded from the dictionary files."));
    }

    #[test]
    fn invalid_difficulty_returns_to_menu() {
        let mut session = session_with(&["cat"]);
        let out = play(&mut session, "1\n5\n3\n", &no_shop());
        assert!(out.contains("Invalid difficulty. Please choose 1, 2 or 3."));
        assert_eq!(session.stats.score, 0);
    }

    #[test]
    fn shop_adds_words() {
        let mut session = session_with(&["cat"]);
        let shop = WordSource::Builtin(&["adventure"]);
        let out = play(&mut session, "2\n1\n\n1\n3\nadventure\n\n3\n", &shop);

        assert!(out.contains("Welcome to the shop."));
        assert!(out.contains("1 new words added!"));
        assert_eq!(session.words.len(), 2);
        assert!(out.contains("Correct! You earned 9 points"));
    }

    #[test]
    fn leaving_the_shop_adds_nothing() {
        let mut session = session_with(&["cat"]);
        let shop = WordSource::Builtin(&["adventure"]);
        let out = play(&mut session, "2\n2\n\n3\n", &shop);
        assert!(out.contains("Exiting the shop."));
        assert_eq!(session.words.len(), 1);
    }

    #[test]
    fn wrong_letters_get_a_note() {
        let mut session = session_with(&["cat"]);
        let out = play(&mut session, "1\n1\nzzz\ncat\n\n3\n", &no_shop());
        assert!(out.contains("doesn't use the letters of"));
    }

    #[test]
    fn achievement_board_shows_every_menu_cycle() {
        let mut session = session_with(&["cat"]);
        let out = play(&mut session, "9\n3\n", &no_shop());
        assert_eq!(out.matches("Achievements:").count(), 2);
        assert!(out.contains("- First Win: (Win your first game)"));
    }
}
