//! Adversarial game-tree search
//!
//! This crate provides:
//! - The [`AdversarialSearchProblem`] capability any two-player,
//!   constant-sum game implements to be searchable
//! - Minimax, alpha-beta and depth-cutoff alpha-beta search ([`search`])
//! - Game adapters: a synthetic DAG for testing, n x n tic-tac-toe and
//!   connect four ([`games`])
//! - A game runner pitting search bots, random bots and humans against each
//!   other ([`runner`]) and the `gamerunner` command line ([`cli`])

pub mod cli;
pub mod error;
pub mod games;
pub mod logging;
pub mod problem;
pub mod runner;
pub mod search;

pub use error::{Error, Result};
pub use problem::{AdversarialSearchProblem, Evaluation, GameState, Player};
pub use search::{
    Algorithm, SearchOutcome, SearchReport, SearchStats, alpha_beta, alpha_beta_cutoff, minimax,
};
