//! Analyze command - Compare the search algorithms on one position

use std::{num::NonZeroUsize, time::Instant};

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    AdversarialSearchProblem, GameState,
    cli::{
        config::GameKind,
        output::{format_number, print_kv, print_section, print_subsection, score_line},
    },
    games::{ConnectFour, TicTacToe, connect4::ConnectFourState, tictactoe::TicTacToeState},
    runner::TextGame,
    search::{Algorithm, SearchReport},
};

#[derive(Parser, Debug)]
#[command(about = "Run every search algorithm on a position")]
pub struct AnalyzeArgs {
    /// Game the position belongs to
    #[arg(long, value_enum, default_value_t = GameKind::Ttt)]
    pub game: GameKind,

    /// Position to analyze (tic-tac-toe: `X.O/.X./...`, connect four: top
    /// row first, e.g. `......./.......`); defaults to the empty board
    #[arg(long)]
    pub board: Option<String>,

    /// Depth in plies for the cutoff search
    #[arg(long, default_value_t = 4)]
    pub cutoff: usize,

    /// Only run the cutoff search
    #[arg(long)]
    pub cutoff_only: bool,

    /// Also run minimax and alpha-beta on connect four, which can take
    /// practically forever on an open board
    #[arg(long, conflicts_with = "cutoff_only")]
    pub exhaustive: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let cutoff_ply =
        NonZeroUsize::new(args.cutoff).ok_or_else(|| anyhow!("--cutoff must be at least 1"))?;
    let full_search = match args.game {
        GameKind::Ttt => !args.cutoff_only,
        GameKind::Connect4 => args.exhaustive,
    };
    let mut algorithms = Vec::new();
    if full_search {
        algorithms.extend([Algorithm::Minimax, Algorithm::AlphaBeta]);
    }
    algorithms.push(Algorithm::AlphaBetaCutoff { cutoff_ply });

    match args.game {
        GameKind::Ttt => {
            let (game, state) = match &args.board {
                Some(board) => {
                    let state = TicTacToeState::from_string(board)?;
                    (TicTacToe::new(state.board.dim())?, state)
                }
                None => {
                    let game = TicTacToe::default();
                    let state = game.initial_state();
                    (game, state)
                }
            };
            analyze_position(&game, &state, &algorithms)
        }
        GameKind::Connect4 => {
            let (game, state) = match &args.board {
                Some(board) => {
                    let state = ConnectFourState::from_string(board)?;
                    (ConnectFour::new(state.grid.rows(), state.grid.cols())?, state)
                }
                None => {
                    let game = ConnectFour::default();
                    let state = game.initial_state();
                    (game, state)
                }
            };
            analyze_position(&game, &state, &algorithms)
        }
    }
}

/// Run `algorithms` on `state` for its player to move and print what each
/// one found
pub fn analyze_position<P: TextGame>(
    problem: &P,
    state: &P::State,
    algorithms: &[Algorithm],
) -> Result<()> {
    print_section("Position");
    println!("{}", problem.render_state(state));

    if problem.is_terminal(state) {
        println!("\nGame over. {}", score_line(&problem.evaluate_terminal(state)?));
        return Ok(());
    }

    let player = state.player_to_move();
    print_kv("To move", player);
    print_kv("Actions", &format!("{:?}", problem.available_actions(state)));

    for algorithm in algorithms {
        let started = Instant::now();
        let report =
            algorithm.report(problem, state, |s: &P::State| problem.heuristic(s, player))?;
        print_subsection(&algorithm.to_string());
        print_report(&report);
        print_kv("Elapsed", &format!("{:.2?}", started.elapsed()));
    }
    Ok(())
}

fn print_report<A: std::fmt::Debug>(report: &SearchReport<A>) {
    let stats = &report.stats;
    print_kv("Action", &format!("{:?}", report.outcome.action));
    print_kv("Value", report.outcome.value);
    print_kv("Nodes", &format_number(stats.nodes));
    print_kv("Terminal leaves", &format_number(stats.terminal_leaves));
    print_kv("Heuristic leaves", &format_number(stats.heuristic_leaves));
    print_kv("Cutoffs", &format_number(stats.cutoffs));
    print_kv("Deepest ply", stats.max_ply);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(game: GameKind, board: &str, cutoff: usize) -> AnalyzeArgs {
        AnalyzeArgs {
            game,
            board: Some(board.to_string()),
            cutoff,
            cutoff_only: false,
            exhaustive: false,
        }
    }

    #[test]
    fn test_analyzes_a_tictactoe_position() {
        assert!(execute(args(GameKind::Ttt, "XX./OO./...", 2)).is_ok());
    }

    #[test]
    fn test_analyzes_a_finished_game() {
        assert!(execute(args(GameKind::Ttt, "XXX/OO./...", 2)).is_ok());
    }

    #[test]
    fn test_cutoff_only_on_connect_four() {
        let mut args = args(GameKind::Connect4, "..../..../..../X.O.", 3);
        args.cutoff_only = true;
        assert!(execute(args).is_ok());
    }

    #[test]
    fn test_default_connect_four_analysis_finishes() {
        let args = AnalyzeArgs {
            game: GameKind::Connect4,
            board: None,
            cutoff: 4,
            cutoff_only: false,
            exhaustive: false,
        };
        assert!(execute(args).is_ok());
    }

    #[test]
    fn test_exhaustive_connect_four_on_a_small_grid() {
        // Only the top row is open
        let mut args = args(GameKind::Connect4, "..../XOXO/OXOX/XOXO", 2);
        args.exhaustive = true;
        assert!(execute(args).is_ok());
    }

    #[test]
    fn test_rejects_zero_cutoff_and_bad_boards() {
        assert!(execute(args(GameKind::Ttt, "XX./OO./...", 0)).is_err());
        assert!(execute(args(GameKind::Ttt, "XXQ/OO./...", 2)).is_err());
        assert!(execute(args(GameKind::Connect4, "X.../..../..../....", 2)).is_err());
    }
}
