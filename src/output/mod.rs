//! Terminal output formatting
//!
//! Menus, banners and round summaries for the console game.

pub mod display;
pub mod formatters;

pub use display::{
    print_achievements, print_correct, print_difficulty_menu, print_game_over, print_hint_menu,
    print_intro, print_menu, print_rules, print_shop_menu, print_unlocked,
};
