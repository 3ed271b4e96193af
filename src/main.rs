//! Wordle - CLI
//!
//! Play Wordle in a TUI or on the plain command line, view statistics, or grade
//! a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{check_guess, run_simple},
    config::GameConfig,
    output::{print_check_result, print_statistics},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file, one word per line (default: embedded list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Allowed guess list file, one word per line (default: embedded list)
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Statistics file (default: platform data directory)
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,

    /// Keep statistics in memory only
    #[arg(long, global = true)]
    no_save: bool,

    /// Seed for choosing secret words
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line game without TUI)
    Simple,

    /// Show completion statistics
    Stats {
        /// Zero all counts first
        #[arg(long)]
        reset: bool,
    },

    /// Grade a guess against a given secret word
    Check {
        /// The secret word
        secret: String,

        /// The guess to grade
        guess: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            answers: self.answers.clone(),
            allowed: self.allowed.clone(),
            stats_file: self.stats_file.clone(),
            no_save: self.no_save,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    // Quiet by default so log output does not tear the TUI; RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Stats { reset } => run_stats_command(&config, reset),
        Commands::Check { secret, guess } => run_check_command(&config, &secret, &guess),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(config.session()?);
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut session = config.session()?;
    let stdin = std::io::stdin();
    run_simple(&mut session, stdin.lock(), std::io::stdout())
}

fn run_stats_command(config: &GameConfig, reset: bool) -> Result<()> {
    let mut session = config.session()?;
    let path = config.stats_path();

    if reset {
        session
            .reset_statistics()
            .with_context(|| format!("failed to reset statistics in {}", path.display()))?;
        println!("Statistics reset.");
    }

    let source = (!config.no_save).then_some(path.as_path());
    print_statistics(session.statistics(), source);
    Ok(())
}

fn run_check_command(config: &GameConfig, secret: &str, guess: &str) -> Result<()> {
    let words = config.word_list()?;
    let result = check_guess(secret, guess, &words).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}
