//! Unscramble - CLI
//!
//! Console word-unscrambling game with difficulty tiers, streaks, hints and achievements.

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use unscramble::{
    commands::{Console, run_game},
    game::{GameConfig, Session},
    output::{print_intro, print_rules},
    wordlists::{BASIC, EXTENDED, WordSource},
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Unscramble words against the clock, with streaks, hints and achievements",
    version,
    author
)]
struct Cli {
    /// Dictionary to start with: path to a file, or 'builtin'
    #[arg(short = 'w', long, default_value = "dictionary.txt")]
    wordlist: String,

    /// Dictionary sold in the shop: path to a file, or 'builtin'
    #[arg(short = 'x', long, default_value = "dictionary2.txt")]
    extra_wordlist: String,

    /// Seed for reproducible word picks, scrambles and hints
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the intro and rules screens
    #[arg(long)]
    skip_intro: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = GameConfig::default();

    let mut session = match cli.seed {
        Some(seed) => {
            info!("Using fixed seed {seed}");
            Session::seeded(config, seed)
        }
        None => Session::new(config),
    };

    let main_source = WordSource::from_arg(&cli.wordlist, BASIC);
    let shop_source = WordSource::from_arg(&cli.extra_wordlist, EXTENDED);

    let mut console = Console::stdio();

    if !cli.skip_intro {
        print_intro(console.out())?;
        print_rules(console.out(), &config)?;
        console.read_line()?;
    }

    if session.load_words(&main_source) == 0 {
        warn!("No words loaded from {main_source}");
    }

    run_game(&mut console, &mut session, &shop_source)?;
    Ok(())
}
