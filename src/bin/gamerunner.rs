//! gamerunner - Play and analyze two-player games with adversarial search
//!
//! This CLI provides:
//! - Games between humans, minimax, alpha-beta and random bots
//! - Side-by-side analysis of the search algorithms on a position

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gamerunner")]
#[command(version, about = "Adversarial search game runner", long_about = None)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play tic-tac-toe or connect four
    Play(adversarial_search::cli::commands::play::PlayArgs),

    /// Compare the search algorithms on a position
    Analyze(adversarial_search::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    adversarial_search::logging::init(cli.verbose)?;

    match cli.command {
        Commands::Play(args) => adversarial_search::cli::commands::play::execute(args),
        Commands::Analyze(args) => adversarial_search::cli::commands::analyze::execute(args),
    }
}
