//! Search results and bookkeeping

use serde::{Deserialize, Serialize};

use super::MAX_SEARCH_DEPTH;
use crate::{Error, Player, Result};

/// Backed-up value of a searched state and the action achieving it
///
/// `action` is `None` at terminal and cutoff leaves, and at the root when the
/// root itself is terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<A> {
    /// Value on player one's scale
    pub value: f64,
    pub action: Option<A>,
}

impl<A> SearchOutcome<A> {
    /// A leaf value with no action attached
    pub fn leaf(value: f64) -> Self {
        SearchOutcome {
            value,
            action: None,
        }
    }
}

/// Counters collected during one search call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States evaluated, root included
    pub nodes: u64,
    /// Terminal states scored with `evaluate_terminal`
    pub terminal_leaves: u64,
    /// Cutoff states scored with the heuristic
    pub heuristic_leaves: u64,
    /// Alpha or beta cutoffs taken
    pub cutoffs: u64,
    /// Deepest ply reached below the root
    pub max_ply: usize,
}

impl SearchStats {
    /// Record a visit at `ply` below the root, enforcing the depth ceiling
    pub(super) fn enter(&mut self, ply: usize) -> Result<()> {
        if ply > MAX_SEARCH_DEPTH {
            return Err(Error::SearchDepthExceeded {
                limit: MAX_SEARCH_DEPTH,
            });
        }
        self.nodes += 1;
        self.max_ply = self.max_ply.max(ply);
        Ok(())
    }
}

/// Outcome of a search together with its statistics
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport<A> {
    pub outcome: SearchOutcome<A>,
    pub stats: SearchStats,
}

/// Running best child of a node
///
/// The first explored action is always taken; after that only a strictly
/// better value replaces it, so ties keep the earliest action.
pub(super) struct Best<A> {
    player: Player,
    value: f64,
    action: Option<A>,
}

impl<A> Best<A> {
    pub(super) fn new(player: Player) -> Self {
        let value = match player {
            Player::One => f64::NEG_INFINITY,
            Player::Two => f64::INFINITY,
        };
        Best {
            player,
            value,
            action: None,
        }
    }

    pub(super) fn value(&self) -> f64 {
        self.value
    }

    pub(super) fn offer(&mut self, value: f64, action: A) {
        let improves = match self.player {
            Player::One => value > self.value,
            Player::Two => value < self.value,
        };
        if improves || self.action.is_none() {
            self.value = value;
            self.action = Some(action);
        }
    }

    pub(super) fn into_outcome(self) -> SearchOutcome<A> {
        SearchOutcome {
            value: self.value,
            action: self.action,
        }
    }
}
