//! Display functions for menus and round results
//!
//! Every function writes to the given sink so the shell can be driven against
//! an in-memory buffer.

use super::formatters::{achievement_bar, banner_edge, banner_line, banner_title};
use crate::core::Difficulty;
use crate::game::{AchievementId, Achievements, GameConfig, HintKind, SessionStats};
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
pub fn print_intro<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n")?;
    writeln!(out, "{}", banner_edge().bright_cyan())?;
    writeln!(out, "{}", banner_title("UNSCRAMBLE").bright_cyan().bold())?;
    writeln!(out, "{}", banner_edge().bright_cyan())?;
    for line in [
        "Welcome to Unscramble!",
        "You are shown scrambled words and",
        "must guess the original word.",
        "Pick a difficulty, chain correct",
        "answers for combo points, buy hints,",
        "unlock achievements, and visit the",
        "shop for more words.",
    ] {
        writeln!(out, "{}", banner_line(line))?;
    }
    writeln!(out, "{}", banner_edge().bright_cyan())
}

/// Print the rules banner
pub fn print_rules<W: Write>(out: &mut W, config: &GameConfig) -> io::Result<()> {
    writeln!(out, "{}", banner_edge().bright_cyan())?;
    writeln!(out, "{}", banner_title("RULES").bright_cyan().bold())?;
    writeln!(out, "{}", banner_edge().bright_cyan())?;
    let attempts = format!("and must solve it within {} tries.", config.attempts_per_round);
    let combo = format!("plus {} per word on your streak.", config.combo_bonus_per_streak);
    let hints = format!("Up to {} hints per word,", config.max_hints_per_word);
    let cost = format!("{} point(s) each.", config.hint_cost);
    for line in [
        "You'll be given a word to unscramble",
        attempts.as_str(),
        "Points equal the word's length,",
        combo.as_str(),
        hints.as_str(),
        cost.as_str(),
        "Run out of tries and your score",
        "drops back to zero!",
    ] {
        writeln!(out, "{}", banner_line(line))?;
    }
    writeln!(out, "{}", banner_edge().bright_cyan())?;
    writeln!(out, "Press \"Enter\" to continue.")
}

/// Print the main menu with the running scores
pub fn print_menu<W: Write>(out: &mut W, stats: &SessionStats) -> io::Result<()> {
    writeln!(out, "\n{}", banner_edge().cyan())?;
    writeln!(
        out,
        "{}",
        banner_line(&format!("Current Score: {}", stats.score))
    )?;
    writeln!(
        out,
        "{}",
        banner_line(&format!("Highest Score: {}", stats.highest_score))
    )?;
    writeln!(
        out,
        "{}",
        banner_line(&format!(
            "Streak: {} | Max streak: {}",
            stats.streak, stats.max_streak
        ))
    )?;
    writeln!(out, "{}", banner_edge().cyan())?;
    writeln!(out, "Choose an option from the menu")?;
    writeln!(out, "1. Play the game")?;
    writeln!(out, "2. Shop")?;
    writeln!(out, "3. Exit the game")
}

pub fn print_difficulty_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nSelect Difficulty Level:")?;
    for tier in Difficulty::ALL {
        writeln!(out, "{}. {}", tier.choice(), tier.menu_label())?;
    }
    Ok(())
}

pub fn print_hint_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nAvailable Hints:")?;
    for (i, kind) in HintKind::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, kind.menu_label())?;
    }
    Ok(())
}

pub fn print_shop_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "Welcome to the shop.".bright_yellow().bold())?;
    writeln!(out, "1. Load more difficult words")?;
    writeln!(out, "2. Exit shop")
}

/// Print the achievement board with unlock status
pub fn print_achievements<W: Write>(out: &mut W, achievements: &Achievements) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {}",
        "Achievements:".bright_cyan().bold(),
        achievement_bar(achievements.unlocked_count(), achievements.len(), 12)
    )?;

    for achievement in achievements.iter() {
        if achievement.achieved {
            writeln!(
                out,
                "- {}: {} ({})",
                achievement.name().bright_white().bold(),
                "Achieved!".green(),
                achievements.description(achievement.id)
            )?;
        } else {
            writeln!(
                out,
                "- {}: ({})",
                achievement.name(),
                achievements.description(achievement.id).bright_black()
            )?;
        }
    }
    Ok(())
}

/// Announce achievements unlocked by the last round
pub fn print_unlocked<W: Write>(out: &mut W, unlocked: &[AchievementId]) -> io::Result<()> {
    for id in unlocked {
        writeln!(
            out,
            "{} You earned the achievement: {}!",
            id.cheer().bright_yellow().bold(),
            id.name().bright_white().bold()
        )?;
    }
    Ok(())
}

/// Summary for a solved word
pub fn print_correct<W: Write>(
    out: &mut W,
    points: i32,
    combo_bonus: i32,
    streak: u32,
    max_streak: u32,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Correct! You earned {points} points (including {combo_bonus} combo points)!")
            .green()
            .bold()
    )?;
    writeln!(out, "Current streak: {streak} | Max streak: {max_streak}")
}

/// Reveal the answer after the last attempt is lost
pub fn print_game_over<W: Write>(out: &mut W, answer: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Game Over! The correct answer was \"{answer}\"")
            .red()
            .bold()
    )?;
    writeln!(out, "Your score has been reset to 0.")
}
