//! Alpha-beta pruning, optionally bounded by a ply horizon

use log::debug;

use super::outcome::{Best, SearchOutcome, SearchReport, SearchStats};
use crate::{AdversarialSearchProblem, GameState, Player, Result};

/// Alpha-beta searcher
///
/// With `horizon` set, states that many plies below the root are scored by
/// `heuristic` instead of being expanded. Without it the heuristic is never
/// called.
pub(super) struct AlphaBeta<'p, P, H> {
    problem: &'p P,
    heuristic: H,
    horizon: Option<usize>,
    stats: SearchStats,
}

impl<'p, P, H> AlphaBeta<'p, P, H>
where
    P: AdversarialSearchProblem,
    H: Fn(&P::State) -> f64,
{
    pub(super) fn new(problem: &'p P, heuristic: H, horizon: Option<usize>) -> Self {
        AlphaBeta {
            problem,
            heuristic,
            horizon,
            stats: SearchStats::default(),
        }
    }

    pub(super) fn run(mut self, root: &P::State) -> Result<SearchReport<P::Action>> {
        let outcome = self.value(root, f64::NEG_INFINITY, f64::INFINITY, self.horizon, 0)?;
        Ok(SearchReport {
            outcome,
            stats: self.stats,
        })
    }

    fn value(
        &mut self,
        state: &P::State,
        mut alpha: f64,
        mut beta: f64,
        remaining: Option<usize>,
        ply: usize,
    ) -> Result<SearchOutcome<P::Action>> {
        self.stats.enter(ply)?;

        // Terminal states are scored exactly even at the horizon.
        if self.problem.is_terminal(state) {
            self.stats.terminal_leaves += 1;
            let eval = self.problem.evaluate_terminal(state)?;
            return Ok(SearchOutcome::leaf(eval.value(Player::One)));
        }

        if remaining == Some(0) {
            self.stats.heuristic_leaves += 1;
            return Ok(SearchOutcome::leaf((self.heuristic)(state)));
        }

        let player = state.player_to_move();
        let mut best = Best::new(player);
        for action in self.problem.available_actions(state) {
            let child = self.problem.transition(state, &action);
            let score = self
                .value(&child, alpha, beta, remaining.map(|r| r - 1), ply + 1)?
                .value;
            if ply == 0 {
                debug!("alpha-beta root child score: {score} action: {action:?}");
            }
            best.offer(score, action);

            match player {
                Player::One => {
                    if best.value() >= beta {
                        self.stats.cutoffs += 1;
                        return Ok(best.into_outcome());
                    }
                    alpha = alpha.max(best.value());
                }
                Player::Two => {
                    if best.value() <= alpha {
                        self.stats.cutoffs += 1;
                        return Ok(best.into_outcome());
                    }
                    beta = beta.min(best.value());
                }
            }
        }

        Ok(best.into_outcome())
    }
}
