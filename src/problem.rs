//! The game-problem capability consumed by the search engine
//!
//! A game is put into searchable form by implementing
//! [`AdversarialSearchProblem`] for it. States implement [`GameState`], whose
//! only requirement is reporting which [`Player`] moves next.
//!
//! Every game is two-player and constant-sum: the two values of an
//! [`Evaluation`] sum to the same constant across all terminal states of a
//! problem. Player one's value is the maximizing signal; player two minimizes
//! that same scalar.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Player index 0, the maximizer
    One,
    /// Player index 1, the minimizer
    Two,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// 0-based index of the player
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.index() + 1)
    }
}

/// A single configuration of a game
pub trait GameState: Clone + fmt::Debug {
    /// The player who will move next
    fn player_to_move(&self) -> Player;
}

/// Per-player values of a terminal state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation([f64; 2]);

impl Evaluation {
    pub fn new(first: f64, second: f64) -> Self {
        Evaluation([first, second])
    }

    /// Value of the state for the given player
    pub fn value(&self, player: Player) -> f64 {
        self.0[player.index()]
    }

    /// Sum of both values; constant across the terminal states of a problem
    pub fn total(&self) -> f64 {
        self.0[0] + self.0[1]
    }

    /// Winning player, if one value is strictly greater than the other
    pub fn leader(&self) -> Option<Player> {
        if self.0[0] > self.0[1] {
            Some(Player::One)
        } else if self.0[1] > self.0[0] {
            Some(Player::Two)
        } else {
            None
        }
    }
}

impl From<(f64, f64)> for Evaluation {
    fn from((first, second): (f64, f64)) -> Self {
        Evaluation::new(first, second)
    }
}

/// A game in the form the search algorithms consume
///
/// Implementations must be deterministic. Actions are only ever compared for
/// equality; their meaning is private to the game.
pub trait AdversarialSearchProblem {
    type State: GameState;
    type Action: Clone + Eq + fmt::Debug;

    /// The state a fresh game starts from
    fn initial_state(&self) -> Self::State;

    /// Actions available to the player to move, without duplicates and in a
    /// fixed order
    ///
    /// The order is the search's iteration order and therefore decides ties.
    fn available_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state that results from taking `action` in `state`
    ///
    /// # Panics
    ///
    /// Panics if `state` is terminal or `action` is not one of
    /// [`available_actions`](Self::available_actions).
    fn transition(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether the game is over in `state`
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Per-player values of a terminal state
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTerminal`](crate::Error::NotTerminal) if `state`
    /// is not terminal.
    fn evaluate_terminal(&self, state: &Self::State) -> Result<Evaluation>;

    /// Estimate of how good `state` is, judged from `player`'s point of view
    ///
    /// The value is expressed on player one's scale, the same range and
    /// orientation as `evaluate_terminal(state)?.value(Player::One)`, so that
    /// values backed up from a cutoff compare against true terminal values.
    fn heuristic(&self, state: &Self::State, player: Player) -> f64;
}
