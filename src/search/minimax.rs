//! Full-tree minimax

use log::debug;

use super::outcome::{Best, SearchOutcome, SearchReport, SearchStats};
use crate::{AdversarialSearchProblem, GameState, Player, Result};

pub(super) struct Minimax<'p, P> {
    problem: &'p P,
    stats: SearchStats,
}

impl<'p, P: AdversarialSearchProblem> Minimax<'p, P> {
    pub(super) fn new(problem: &'p P) -> Self {
        Minimax {
            problem,
            stats: SearchStats::default(),
        }
    }

    pub(super) fn run(mut self, root: &P::State) -> Result<SearchReport<P::Action>> {
        let outcome = self.value(root, 0)?;
        Ok(SearchReport {
            outcome,
            stats: self.stats,
        })
    }

    fn value(&mut self, state: &P::State, ply: usize) -> Result<SearchOutcome<P::Action>> {
        self.stats.enter(ply)?;

        if self.problem.is_terminal(state) {
            self.stats.terminal_leaves += 1;
            let eval = self.problem.evaluate_terminal(state)?;
            return Ok(SearchOutcome::leaf(eval.value(Player::One)));
        }

        let player = state.player_to_move();
        let mut best = Best::new(player);
        for action in self.problem.available_actions(state) {
            let child = self.problem.transition(state, &action);
            let score = self.value(&child, ply + 1)?.value;
            if ply == 0 {
                debug!("minimax root child score: {score} action: {action:?}");
            }
            best.offer(score, action);
        }

        Ok(best.into_outcome())
    }
}
