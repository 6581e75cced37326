//! Wordle Game - CLI
//!
//! Interactive play, or scripted turns for programs and tests.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_machine, run_play},
    game::SessionConfig,
    logging::init_logging,
    output::write_turn_line,
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file, one word per line (default: embedded list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Extra allowed-guess list file (default: embedded list)
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Play against this word instead of a random one
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Seed for choosing the random word
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Debug logging (otherwise controlled by WORDLE_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game in the terminal (default)
    Play,

    /// Submit guesses in order and print one result line per guess
    Machine {
        /// Guesses to submit
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lists = WordLists::load(cli.answers.as_deref(), cli.allowed.as_deref())
        .context("failed to load word lists")?;
    let config = SessionConfig {
        target: cli.target,
        seed: cli.seed,
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let stdin = io::stdin();
            run_play(&lists, config, &mut stdin.lock(), &mut io::stdout())
        }
        Commands::Machine { guesses } => run_machine_command(&lists, config, &guesses),
    }
}

fn run_machine_command(lists: &WordLists, config: SessionConfig, guesses: &[String]) -> Result<()> {
    let mut session = lists.session(config).context("failed to start a game")?;
    let mut out = io::stdout().lock();

    for record in run_machine(&mut session, guesses) {
        write_turn_line(&mut out, &record.guess, record.status, record.feedback)?;
    }
    Ok(())
}
