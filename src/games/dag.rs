//! Synthetic game over a directed acyclic graph, for testing searches
//!
//! Each node is a state; an edge `i -> j` lets the player to move in `i` go
//! to `j`, and the action is the target index. Leaves carry explicit
//! terminal evaluations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{AdversarialSearchProblem, Error, Evaluation, GameState, Player, Result};

/// A node of the DAG together with the player to move there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DagState {
    pub index: usize,
    pub to_move: Player,
}

impl DagState {
    pub fn new(index: usize, to_move: Player) -> Self {
        DagState { index, to_move }
    }
}

impl GameState for DagState {
    fn player_to_move(&self) -> Player {
        self.to_move
    }
}

/// A validated DAG game
#[derive(Debug, Clone)]
pub struct GameDag {
    matrix: Vec<Vec<bool>>,
    start: DagState,
    terminal_evaluations: BTreeMap<usize, Evaluation>,
}

impl GameDag {
    /// Build a DAG game.
    ///
    /// `matrix[i][j]` states that the game can move from node `i` to node
    /// `j`. `terminal_evaluations` maps each terminal node to its per-player
    /// values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the matrix is not square
    /// - any edge goes from a node to itself or to a lower index
    /// - `terminal_evaluations` is empty, or names a node out of range
    /// - the terminal evaluations do not all share the same finite sum
    /// - the start node is out of range
    /// - a non-terminal node has no outgoing edges
    pub fn new(
        matrix: Vec<Vec<bool>>,
        start: DagState,
        terminal_evaluations: BTreeMap<usize, Evaluation>,
    ) -> Result<Self> {
        let states = matrix.len();
        for (row, edges) in matrix.iter().enumerate() {
            if edges.len() != states {
                return Err(Error::NonSquareMatrix {
                    row,
                    got: edges.len(),
                    expected: states,
                });
            }
        }

        for (from, edges) in matrix.iter().enumerate() {
            if let Some(to) = edges.iter().take(from + 1).position(|&edge| edge) {
                return Err(Error::CyclicEdge { from, to });
            }
        }

        let Some(expected) = terminal_evaluations.values().next().map(Evaluation::total) else {
            return Err(Error::NoTerminalStates);
        };
        for (&index, eval) in &terminal_evaluations {
            let got = eval.total();
            // NaN and infinite sums never match, `inf + -inf` included
            let matches = got.is_finite() && (got - expected).abs() <= 1e-9;
            if !matches {
                return Err(Error::NotConstantSum {
                    index,
                    got,
                    expected,
                });
            }
        }

        if let Some(&index) = terminal_evaluations.keys().find(|&&index| index >= states) {
            return Err(Error::StateOutOfRange { index, states });
        }
        if start.index >= states {
            return Err(Error::StateOutOfRange {
                index: start.index,
                states,
            });
        }

        for (index, edges) in matrix.iter().enumerate() {
            if !terminal_evaluations.contains_key(&index) && !edges.contains(&true) {
                return Err(Error::DeadEnd { index });
            }
        }

        Ok(GameDag {
            matrix,
            start,
            terminal_evaluations,
        })
    }

    /// Number of nodes in the graph
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}

impl AdversarialSearchProblem for GameDag {
    type State = DagState;
    type Action = usize;

    fn initial_state(&self) -> DagState {
        self.start
    }

    /// Target indices in ascending order; empty for terminal nodes
    fn available_actions(&self, state: &DagState) -> Vec<usize> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        self.matrix[state.index]
            .iter()
            .enumerate()
            .filter(|&(_, &edge)| edge)
            .map(|(target, _)| target)
            .collect()
    }

    fn transition(&self, state: &DagState, action: &usize) -> DagState {
        assert!(
            !self.is_terminal(state),
            "transition from terminal DAG state {}",
            state.index
        );
        assert!(
            self.available_actions(state).contains(action),
            "edge {} -> {action} is not in the DAG",
            state.index
        );
        DagState::new(*action, state.to_move.opponent())
    }

    fn is_terminal(&self, state: &DagState) -> bool {
        self.terminal_evaluations.contains_key(&state.index)
    }

    fn evaluate_terminal(&self, state: &DagState) -> Result<Evaluation> {
        self.terminal_evaluations
            .get(&state.index)
            .copied()
            .ok_or_else(|| Error::NotTerminal {
                state: format!("DAG node {}", state.index),
            })
    }

    fn heuristic(&self, _state: &DagState, _player: Player) -> f64 {
        0.0
    }
}
