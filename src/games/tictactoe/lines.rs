//! Winning line analysis for n x n tic-tac-toe

use super::board::{Board, Cell};
use crate::Player;

/// All full-length lines of an n x n board, as cell indices
///
/// Ordered main diagonal, anti-diagonal, rows, columns. Terminal checks
/// scan in this order.
pub fn winning_lines(dim: usize) -> Vec<Vec<usize>> {
    let mut lines = Vec::with_capacity(2 * dim + 2);
    lines.push((0..dim).map(|i| i * dim + i).collect());
    lines.push((0..dim).map(|i| i * dim + (dim - 1 - i)).collect());
    for r in 0..dim {
        lines.push((0..dim).map(|c| r * dim + c).collect());
    }
    for c in 0..dim {
        lines.push((0..dim).map(|r| r * dim + c).collect());
    }
    lines
}

/// Utility for analyzing winning lines
#[derive(Debug, Clone)]
pub struct LineAnalyzer {
    lines: Vec<Vec<usize>>,
}

impl LineAnalyzer {
    pub fn new(dim: usize) -> Self {
        LineAnalyzer {
            lines: winning_lines(dim),
        }
    }

    pub fn lines(&self) -> &[Vec<usize>] {
        &self.lines
    }

    /// Owner of the first completely filled line, in scan order
    pub fn completed_line(&self, board: &Board) -> Option<Player> {
        self.lines.iter().find_map(|line| {
            let first = board.cell(line[0]).owner()?;
            line.iter()
                .all(|&idx| board.cell(idx) == Cell::for_player(first))
                .then_some(first)
        })
    }

    /// Pieces of each player in a line, as `(first, second)`
    pub fn line_counts(board: &Board, line: &[usize]) -> (usize, usize) {
        line.iter()
            .fold((0, 0), |(first, second), &idx| match board.cell(idx) {
                Cell::X => (first + 1, second),
                Cell::O => (first, second + 1),
                Cell::Empty => (first, second),
            })
    }
}
