//! Command implementations

pub mod console;
pub mod play;

pub use console::Console;
pub use play::run_game;
