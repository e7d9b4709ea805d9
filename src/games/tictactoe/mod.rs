//! Tic-tac-toe on an n x n board
//!
//! Player one plays X and moves first. A player wins by filling a whole row,
//! column, or main diagonal. Terminal values are `(1, 0)` for an X win,
//! `(0, 1)` for an O win and `(0.5, 0.5)` for a full board without a winner.

pub mod board;
pub mod lines;

pub use board::{Board, Cell, Position, TicTacToeState};
pub use lines::{LineAnalyzer, winning_lines};

use crate::{AdversarialSearchProblem, Error, Evaluation, Player, Result, runner::TextGame};

/// Smallest supported board dimension
pub const MIN_DIMENSION: usize = 3;

/// Tic-tac-toe as a search problem
#[derive(Debug, Clone)]
pub struct TicTacToe {
    dim: usize,
    lines: LineAnalyzer,
}

impl TicTacToe {
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `dim` is below 3.
    pub fn new(dim: usize) -> Result<Self> {
        if dim < MIN_DIMENSION {
            return Err(Error::InvalidDimension {
                game: "tic-tac-toe",
                got: dim,
                min: MIN_DIMENSION,
            });
        }
        Ok(TicTacToe {
            dim,
            lines: LineAnalyzer::new(dim),
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Terminal values of `state`, or `None` while the game is still open
    fn outcome(&self, state: &TicTacToeState) -> Option<Evaluation> {
        match self.lines.completed_line(&state.board) {
            Some(Player::One) => Some(Evaluation::new(1.0, 0.0)),
            Some(Player::Two) => Some(Evaluation::new(0.0, 1.0)),
            None if state.board.empty_positions().is_empty() => Some(Evaluation::new(0.5, 0.5)),
            None => None,
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        TicTacToe {
            dim: MIN_DIMENSION,
            lines: LineAnalyzer::new(MIN_DIMENSION),
        }
    }
}

impl AdversarialSearchProblem for TicTacToe {
    type State = TicTacToeState;
    type Action = Position;

    fn initial_state(&self) -> TicTacToeState {
        TicTacToeState::new(self.dim)
    }

    /// Empty cells in row-major order
    fn available_actions(&self, state: &TicTacToeState) -> Vec<Position> {
        state.board.empty_positions()
    }

    fn transition(&self, state: &TicTacToeState, action: &Position) -> TicTacToeState {
        assert!(!self.is_terminal(state), "transition from a finished game");
        assert!(
            state.board.is_open(*action),
            "position {action} is not available"
        );
        TicTacToeState {
            board: state
                .board
                .with_cell(*action, Cell::for_player(state.to_move)),
            to_move: state.to_move.opponent(),
        }
    }

    fn is_terminal(&self, state: &TicTacToeState) -> bool {
        self.outcome(state).is_some()
    }

    fn evaluate_terminal(&self, state: &TicTacToeState) -> Result<Evaluation> {
        self.outcome(state).ok_or_else(|| Error::NotTerminal {
            state: state.board.to_string(),
        })
    }

    /// Share of open-line strength held by X.
    ///
    /// Every line still winnable by exactly one side contributes the square
    /// of that side's piece count. The result is `x / (x + o)` in `[0, 1]`,
    /// which already is player one's scale, so `player` does not change it.
    fn heuristic(&self, state: &TicTacToeState, _player: Player) -> f64 {
        let (x, o) = self
            .lines
            .lines()
            .iter()
            .map(|line| LineAnalyzer::line_counts(&state.board, line))
            .filter(|&(x, o)| x.min(o) == 0)
            .fold((0usize, 0usize), |(sx, so), (x, o)| (sx + x * x, so + o * o));

        if x + o == 0 {
            0.5
        } else {
            x as f64 / (x + o) as f64
        }
    }
}

impl TextGame for TicTacToe {
    fn render_state(&self, state: &TicTacToeState) -> String {
        state.board.to_string()
    }

    /// Accepts `"row col"` or `"row,col"`
    fn parse_action(&self, input: &str) -> Option<Position> {
        let mut parts = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::parse::<usize>);
        let row = parts.next()?.ok()?;
        let col = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Position::new(row, col))
    }

    fn action_prompt(&self) -> &'static str {
        "Enter row and column indices (e.g. `1 2`): "
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str) -> TicTacToeState {
        TicTacToeState::from_string(s).unwrap()
    }

    #[test]
    fn test_rejects_small_dimension() {
        assert!(matches!(
            TicTacToe::new(2),
            Err(Error::InvalidDimension { got: 2, min: 3, .. })
        ));
        assert_eq!(TicTacToe::new(5).unwrap().dim(), 5);
    }

    #[test]
    fn test_transition() {
        let game = TicTacToe::default();
        let s0 = state("... .X. ...");
        assert_eq!(s0.to_move, Player::Two);
        let s1 = game.transition(&s0, &Position::new(0, 0));
        assert_eq!(s1, state("O.. .X. ..."));
        assert_eq!(s1.to_move, Player::One);
    }

    #[test]
    #[should_panic(expected = "is not available")]
    fn test_transition_rejects_occupied() {
        let game = TicTacToe::default();
        let s0 = state("X.. ... ...");
        let _ = game.transition(&s0, &Position::new(0, 0));
    }

    #[test]
    fn test_terminal_evaluations() {
        let game = TicTacToe::default();
        assert_eq!(
            game.evaluate_terminal(&state("XXX OO. ...")).unwrap(),
            Evaluation::new(1.0, 0.0)
        );
        assert_eq!(
            game.evaluate_terminal(&state("XX. OOO X..")).unwrap(),
            Evaluation::new(0.0, 1.0)
        );
        assert_eq!(
            game.evaluate_terminal(&state("XOX XOO OXX")).unwrap(),
            Evaluation::new(0.5, 0.5)
        );
        assert!(matches!(
            game.evaluate_terminal(&state("X.. ... ...")),
            Err(Error::NotTerminal { .. })
        ));
    }

    #[test]
    fn test_heuristic_range() {
        let game = TicTacToe::default();
        assert_eq!(game.heuristic(&state("... ... ..."), Player::One), 0.5);

        // X in the center owns 4 open lines, O none
        let center = state("... .X. ...");
        assert_eq!(game.heuristic(&center, Player::One), 1.0);

        // X keeps 3 of its 4 lines (the diagonal is shared with O), O has 2
        let contested = state("O.. .X. ...");
        let h = game.heuristic(&contested, Player::Two);
        assert!((h - 3.0 / 5.0).abs() < 1e-12, "got {h}");
        assert_eq!(h, game.heuristic(&contested, Player::One));
    }

    #[test]
    fn test_parse_action() {
        let game = TicTacToe::default();
        assert_eq!(game.parse_action("1 2"), Some(Position::new(1, 2)));
        assert_eq!(game.parse_action(" 0,0 "), Some(Position::new(0, 0)));
        assert_eq!(game.parse_action("1"), None);
        assert_eq!(game.parse_action("a b"), None);
        assert_eq!(game.parse_action("1 2 3"), None);
    }
}
