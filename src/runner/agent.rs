//! Agent port - anything that picks moves for one seat
//!
//! Bots implement [`Agent`]; the runner asks the agent of the player to move
//! for an action each turn.

use log::{debug, info};
use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    AdversarialSearchProblem, Player, Result,
    search::{Algorithm, SearchStats},
};

/// Move selection for one player
pub trait Agent<P: AdversarialSearchProblem> {
    /// Name used in logs and summaries
    fn name(&self) -> &str;

    /// Pick an action for the player to move in `state`.
    ///
    /// `None` or an action outside `available_actions` is tolerated by the
    /// runner, which substitutes a legal action.
    ///
    /// # Errors
    ///
    /// Propagates errors raised by the game or the search.
    fn select_action(&mut self, problem: &P, state: &P::State) -> Result<Option<P::Action>>;
}

/// Agent driven by one of the search algorithms
///
/// For [`Algorithm::AlphaBetaCutoff`] the game's heuristic is bound to the
/// seat this agent plays.
#[derive(Debug, Clone)]
pub struct SearchAgent {
    name: String,
    algorithm: Algorithm,
    seat: Player,
    last_stats: Option<SearchStats>,
}

impl SearchAgent {
    pub fn new(algorithm: Algorithm, seat: Player) -> Self {
        SearchAgent {
            name: format!("{algorithm} ({seat})"),
            algorithm,
            seat,
            last_stats: None,
        }
    }

    /// Statistics of the most recent search, if any
    pub fn last_stats(&self) -> Option<SearchStats> {
        self.last_stats
    }
}

impl<P: AdversarialSearchProblem> Agent<P> for SearchAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_action(&mut self, problem: &P, state: &P::State) -> Result<Option<P::Action>> {
        let seat = self.seat;
        let report = self
            .algorithm
            .report(problem, state, |s: &P::State| problem.heuristic(s, seat))?;
        info!(
            "{} chose {:?} (value {}, {} nodes, {} cutoffs)",
            self.name,
            report.outcome.action,
            report.outcome.value,
            report.stats.nodes,
            report.stats.cutoffs
        );
        self.last_stats = Some(report.stats);
        Ok(report.outcome.action)
    }
}

/// Agent choosing uniformly among the available actions
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        RandomAgent {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<P: AdversarialSearchProblem> Agent<P> for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_action(&mut self, problem: &P, state: &P::State) -> Result<Option<P::Action>> {
        let mut actions = problem.available_actions(state);
        if actions.is_empty() {
            return Ok(None);
        }
        let index = self.rng.random_range(0..actions.len());
        let action = actions.swap_remove(index);
        debug!("{} picked {action:?}", self.name);
        Ok(Some(action))
    }
}
