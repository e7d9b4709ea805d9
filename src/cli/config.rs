//! Shared configuration types for CLI commands

use std::num::NonZeroUsize;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Player, Result,
    games::{connect4, tictactoe},
    runner::MatchSummary,
    search::Algorithm,
};

/// Game selectable with `--game`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    #[value(name = "ttt")]
    Ttt,
    #[value(name = "connect4")]
    Connect4,
}

impl GameKind {
    /// Smallest accepted `--dimension`
    pub fn min_dimension(self) -> usize {
        match self {
            GameKind::Ttt => tictactoe::MIN_DIMENSION,
            GameKind::Connect4 => connect4::RUN,
        }
    }

    /// Reject a `--dimension` below the game's floor
    pub fn check_dimension(self, dimension: Option<usize>) -> Result<()> {
        match dimension {
            Some(got) if got < self.min_dimension() => Err(Error::InvalidConfiguration {
                message: format!(
                    "--dimension must be at least {} for {}",
                    self.min_dimension(),
                    self
                ),
            }),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameKind::Ttt => f.write_str("tic-tac-toe"),
            GameKind::Connect4 => f.write_str("connect four"),
        }
    }
}

/// Controller selectable with `--player1` / `--player2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    /// Moves typed at the terminal
    #[value(name = "self")]
    Human,
    #[value(name = "minimax")]
    Minimax,
    #[value(name = "ab")]
    AlphaBeta,
    #[value(name = "ab-cutoff")]
    AlphaBetaCutoff,
    #[value(name = "random")]
    Random,
}

impl PlayerKind {
    /// Search algorithm behind this controller, `None` for humans and random
    /// bots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for `ab-cutoff` without a
    /// positive cutoff.
    pub fn algorithm(self, cutoff: Option<usize>) -> Result<Option<Algorithm>> {
        match self {
            PlayerKind::Minimax => Ok(Some(Algorithm::Minimax)),
            PlayerKind::AlphaBeta => Ok(Some(Algorithm::AlphaBeta)),
            PlayerKind::AlphaBetaCutoff => {
                let cutoff_ply = cutoff.and_then(NonZeroUsize::new).ok_or_else(|| {
                    Error::InvalidConfiguration {
                        message: "cannot run ab-cutoff without a cutoff set; use --cutoff <plies>"
                            .to_string(),
                    }
                })?;
                Ok(Some(Algorithm::AlphaBetaCutoff { cutoff_ply }))
            }
            PlayerKind::Human | PlayerKind::Random => Ok(None),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerKind::Human => "self",
            PlayerKind::Minimax => "minimax",
            PlayerKind::AlphaBeta => "ab",
            PlayerKind::AlphaBetaCutoff => "ab-cutoff",
            PlayerKind::Random => "random",
        }
    }
}

/// Settings of a `play` run, stored alongside the results on export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayConfig {
    pub game: GameKind,
    pub dimension: Option<usize>,
    pub player1: PlayerKind,
    pub player2: PlayerKind,
    pub cutoff: Option<usize>,
    pub games: usize,
    pub seed: Option<u64>,
}

impl PlayConfig {
    /// Controller for `player`
    pub fn player(&self, player: Player) -> PlayerKind {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    /// Check option combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        self.game.check_dimension(self.dimension)?;
        for player in Player::BOTH {
            self.player(player).algorithm(self.cutoff)?;
        }
        if self.games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "--games must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn has_human(&self) -> bool {
        Player::BOTH
            .into_iter()
            .any(|player| self.player(player) == PlayerKind::Human)
    }
}

/// Contents of a `play --export` file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayExport {
    pub config: PlayConfig,
    pub summary: MatchSummary,
}
