//! Connect four
//!
//! An action is a 0-based column to drop a piece into. Four in a row in any
//! direction wins; a full grid without a winner is a draw. Terminal values
//! are `(+inf, -inf)` when player one wins, `(-inf, +inf)` when player two
//! wins and `(0, 0)` for a draw.

pub mod board;

pub use board::{ConnectFourState, Grid, RUN};

use crate::{AdversarialSearchProblem, Error, Evaluation, Player, Result, runner::TextGame};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Connect four as a search problem
#[derive(Debug, Clone)]
pub struct ConnectFour {
    rows: usize,
    cols: usize,
    windows: Vec<[(usize, usize); RUN]>,
}

impl ConnectFour {
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either side is below 4.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        for side in [rows, cols] {
            if side < RUN {
                return Err(Error::InvalidDimension {
                    game: "connect-four",
                    got: side,
                    min: RUN,
                });
            }
        }
        Ok(ConnectFour {
            rows,
            cols,
            windows: Grid::empty(rows, cols).windows(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Player owning a complete run of four, player one checked first
    pub fn winner(&self, grid: &Grid) -> Option<Player> {
        Player::BOTH.into_iter().find(|&player| {
            self.windows.iter().any(|window| {
                window
                    .iter()
                    .all(|&(row, col)| grid.get(row, col) == Some(player))
            })
        })
    }

    /// Positional score of `grid` for `player`
    ///
    /// Three points per piece in the center column, plus per window:
    /// 100 for four own pieces, 5 for three own and one empty, 2 for two own
    /// and two empty, and -4 for three opposing pieces and one empty.
    pub fn position_score(&self, grid: &Grid, player: Player) -> f64 {
        let center = self.cols / 2;
        let center_count = (0..self.rows)
            .filter(|&row| grid.get(row, center) == Some(player))
            .count();
        let mut score = 3 * center_count as i64;

        for window in &self.windows {
            let (mut own, mut opposing, mut empty) = (0, 0, 0);
            for &(row, col) in window {
                match grid.get(row, col) {
                    Some(p) if p == player => own += 1,
                    Some(_) => opposing += 1,
                    None => empty += 1,
                }
            }
            score += match (own, empty) {
                (4, _) => 100,
                (3, 1) => 5,
                (2, 2) => 2,
                _ => 0,
            };
            if opposing == 3 && empty == 1 {
                score -= 4;
            }
        }

        score as f64
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        ConnectFour {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            windows: Grid::empty(DEFAULT_ROWS, DEFAULT_COLS).windows(),
        }
    }
}

impl AdversarialSearchProblem for ConnectFour {
    type State = ConnectFourState;
    type Action = usize;

    fn initial_state(&self) -> ConnectFourState {
        ConnectFourState::new(self.rows, self.cols, Player::One)
    }

    /// Open columns, left to right
    fn available_actions(&self, state: &ConnectFourState) -> Vec<usize> {
        (0..self.cols).filter(|&col| state.grid.is_open(col)).collect()
    }

    fn transition(&self, state: &ConnectFourState, action: &usize) -> ConnectFourState {
        assert!(!self.is_terminal(state), "transition from a finished game");
        assert!(state.grid.is_open(*action), "column {action} is not available");
        let grid = match state.grid.drop_piece(*action, state.to_move) {
            Some(grid) => grid,
            None => unreachable!("open column {action} has a free row"),
        };
        ConnectFourState {
            grid,
            to_move: state.to_move.opponent(),
        }
    }

    fn is_terminal(&self, state: &ConnectFourState) -> bool {
        self.winner(&state.grid).is_some() || self.available_actions(state).is_empty()
    }

    fn evaluate_terminal(&self, state: &ConnectFourState) -> Result<Evaluation> {
        match self.winner(&state.grid) {
            Some(Player::One) => Ok(Evaluation::new(f64::INFINITY, f64::NEG_INFINITY)),
            Some(Player::Two) => Ok(Evaluation::new(f64::NEG_INFINITY, f64::INFINITY)),
            None if self.available_actions(state).is_empty() => Ok(Evaluation::new(0.0, 0.0)),
            None => Err(Error::NotTerminal {
                state: state.grid.to_string(),
            }),
        }
    }

    /// [`position_score`](Self::position_score) for `player`, negated for
    /// player two so it lands on player one's scale.
    fn heuristic(&self, state: &ConnectFourState, player: Player) -> f64 {
        let score = self.position_score(&state.grid, player);
        match player {
            Player::One => score,
            Player::Two => -score,
        }
    }
}

impl TextGame for ConnectFour {
    fn render_state(&self, state: &ConnectFourState) -> String {
        state.grid.to_string()
    }

    fn parse_action(&self, input: &str) -> Option<usize> {
        input.trim().parse().ok()
    }

    fn action_prompt(&self) -> &'static str {
        "Enter column index: "
    }
}
