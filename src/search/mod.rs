//! Adversarial search algorithms
//!
//! Three evaluators over any [`AdversarialSearchProblem`]:
//! - [`minimax`]: exhaustive game-tree search
//! - [`alpha_beta`]: minimax with alpha-beta pruning
//! - [`alpha_beta_cutoff`]: alpha-beta that scores states `cutoff_ply` plies
//!   below the root with a heuristic
//!
//! All three back up player one's value: player one maximizes it and player
//! two minimizes it. Actions are explored in `available_actions` order and a
//! later action replaces the current best only when strictly better, so with
//! the same enumeration order minimax and alpha-beta pick the same action.
//!
//! The state is passed in explicitly and never mutated. Each call is
//! independent; nothing is cached between calls.
//!
//! Recursion depth is capped at [`MAX_SEARCH_DEPTH`] plies. Deeper searches
//! fail with [`Error::SearchDepthExceeded`](crate::Error::SearchDepthExceeded).

mod alpha_beta;
mod minimax;
mod outcome;

use std::{fmt, num::NonZeroUsize};

use serde::{Deserialize, Serialize};

use self::{alpha_beta::AlphaBeta, minimax::Minimax};
pub use outcome::{SearchOutcome, SearchReport, SearchStats};
use crate::{AdversarialSearchProblem, Result};

/// Deepest ply below the root any search will visit
pub const MAX_SEARCH_DEPTH: usize = 1024;

/// Choose an action for the player to move in `state` by full minimax.
///
/// Returns `None` when `state` is terminal.
pub fn minimax<P: AdversarialSearchProblem>(
    problem: &P,
    state: &P::State,
) -> Result<Option<P::Action>> {
    Ok(minimax_report(problem, state)?.outcome.action)
}

/// [`minimax`] with the backed-up value and search statistics
pub fn minimax_report<P: AdversarialSearchProblem>(
    problem: &P,
    state: &P::State,
) -> Result<SearchReport<P::Action>> {
    Minimax::new(problem).run(state)
}

/// Choose an action by minimax with alpha-beta pruning.
///
/// Returns `None` when `state` is terminal.
pub fn alpha_beta<P: AdversarialSearchProblem>(
    problem: &P,
    state: &P::State,
) -> Result<Option<P::Action>> {
    Ok(alpha_beta_report(problem, state)?.outcome.action)
}

/// [`alpha_beta`] with the backed-up value and search statistics
pub fn alpha_beta_report<P: AdversarialSearchProblem>(
    problem: &P,
    state: &P::State,
) -> Result<SearchReport<P::Action>> {
    let unused: fn(&P::State) -> f64 = |_| 0.0;
    AlphaBeta::new(problem, unused, None).run(state)
}

/// Choose an action by alpha-beta search cut off `cutoff_ply` plies below
/// `state`.
///
/// Non-terminal states at the cutoff are scored with `heuristic`, which must
/// be on player one's scale and is expected to be bound to the invoking
/// player's perspective. With `cutoff_ply = 1` the heuristic scores the
/// states reached by the first move, with `2` the states after the
/// opponent's reply, and so on.
///
/// Returns `None` when `state` is terminal.
pub fn alpha_beta_cutoff<P, H>(
    problem: &P,
    state: &P::State,
    cutoff_ply: NonZeroUsize,
    heuristic: H,
) -> Result<Option<P::Action>>
where
    P: AdversarialSearchProblem,
    H: Fn(&P::State) -> f64,
{
    Ok(alpha_beta_cutoff_report(problem, state, cutoff_ply, heuristic)?
        .outcome
        .action)
}

/// [`alpha_beta_cutoff`] with the backed-up value and search statistics
pub fn alpha_beta_cutoff_report<P, H>(
    problem: &P,
    state: &P::State,
    cutoff_ply: NonZeroUsize,
    heuristic: H,
) -> Result<SearchReport<P::Action>>
where
    P: AdversarialSearchProblem,
    H: Fn(&P::State) -> f64,
{
    AlphaBeta::new(problem, heuristic, Some(cutoff_ply.get())).run(state)
}

/// A search algorithm selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
    AlphaBetaCutoff { cutoff_ply: NonZeroUsize },
}

impl Algorithm {
    /// Short name as used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "ab",
            Algorithm::AlphaBetaCutoff { .. } => "ab-cutoff",
        }
    }

    /// Run the algorithm from `state`.
    ///
    /// `heuristic` is only consulted by [`Algorithm::AlphaBetaCutoff`].
    pub fn report<P, H>(
        &self,
        problem: &P,
        state: &P::State,
        heuristic: H,
    ) -> Result<SearchReport<P::Action>>
    where
        P: AdversarialSearchProblem,
        H: Fn(&P::State) -> f64,
    {
        match *self {
            Algorithm::Minimax => minimax_report(problem, state),
            Algorithm::AlphaBeta => alpha_beta_report(problem, state),
            Algorithm::AlphaBetaCutoff { cutoff_ply } => {
                alpha_beta_cutoff_report(problem, state, cutoff_ply, heuristic)
            }
        }
    }

    /// Run the algorithm and return only the chosen action
    pub fn decide<P, H>(
        &self,
        problem: &P,
        state: &P::State,
        heuristic: H,
    ) -> Result<Option<P::Action>>
    where
        P: AdversarialSearchProblem,
        H: Fn(&P::State) -> f64,
    {
        Ok(self.report(problem, state, heuristic)?.outcome.action)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::AlphaBetaCutoff { cutoff_ply } => write!(f, "ab-cutoff({cutoff_ply})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::Minimax.to_string(), "minimax");
        assert_eq!(Algorithm::AlphaBeta.to_string(), "ab");
        let cutoff = Algorithm::AlphaBetaCutoff {
            cutoff_ply: NonZeroUsize::new(3).unwrap(),
        };
        assert_eq!(cutoff.name(), "ab-cutoff");
        assert_eq!(cutoff.to_string(), "ab-cutoff(3)");
    }
}
