//! Connect-four grid with gravity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, GameState, Player};

/// Length of a winning run
pub const RUN: usize = 4;

/// A grid of `rows x cols` slots; row 0 is the bottom
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    slots: Vec<Option<Player>>,
}

impl Grid {
    pub fn empty(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            slots: vec![None; rows * cols],
        }
    }

    /// Parse a grid written top row first, rows separated by `/` or newlines.
    ///
    /// `.` is empty, `X`/`1` is player one, `O`/`2` is player two.
    ///
    /// # Errors
    ///
    /// Returns error for ragged rows, unknown characters, a side shorter
    /// than four, or pieces floating above an empty slot.
    pub fn from_string(s: &str) -> Result<Self, Error> {
        let lines: Vec<Vec<char>> = s
            .split(['/', '\n'])
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|line| !line.is_empty())
            .collect();

        let rows = lines.len();
        let cols = lines.first().map_or(0, Vec::len);
        if rows < RUN || cols < RUN {
            return Err(Error::InvalidConfiguration {
                message: format!("connect-four grid '{s}' must be at least {RUN}x{RUN}"),
            });
        }

        let mut grid = Grid::empty(rows, cols);
        for (line_idx, line) in lines.iter().enumerate() {
            if line.len() != cols {
                return Err(Error::InvalidBoardLength {
                    expected: cols,
                    got: line.len(),
                    context: s.to_string(),
                });
            }
            let row = rows - 1 - line_idx;
            for (col, &c) in line.iter().enumerate() {
                let slot = match c {
                    '.' | '0' => None,
                    'X' | 'x' | '1' => Some(Player::One),
                    'O' | 'o' | '2' => Some(Player::Two),
                    _ => {
                        return Err(Error::InvalidCellCharacter {
                            character: c,
                            position: line_idx * cols + col,
                            context: s.to_string(),
                        });
                    }
                };
                grid.slots[row * cols + col] = slot;
            }
        }

        for col in 0..cols {
            for row in 1..rows {
                if grid.get(row, col).is_some() && grid.get(row - 1, col).is_none() {
                    return Err(Error::InvalidConfiguration {
                        message: format!("piece at row {row}, column {col} is floating in '{s}'"),
                    });
                }
            }
        }

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.slots[row * self.cols + col]
    }

    /// A column can take a piece while its top slot is empty
    pub fn is_open(&self, col: usize) -> bool {
        col < self.cols && self.get(self.rows - 1, col).is_none()
    }

    /// Lowest empty row of a column
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        (0..self.rows).find(|&row| self.get(row, col).is_none())
    }

    /// Copy of the grid with a piece dropped into `col`, `None` if full
    #[must_use = "drop_piece returns a new grid and leaves this one as is"]
    pub fn drop_piece(&self, col: usize, player: Player) -> Option<Grid> {
        let row = self.next_open_row(col)?;
        let mut next = self.clone();
        next.slots[row * self.cols + col] = Some(player);
        Some(next)
    }

    /// Pieces of each player, as `(first, second)`
    pub fn piece_counts(&self) -> (usize, usize) {
        self.slots.iter().fold((0, 0), |(a, b), slot| match slot {
            Some(Player::One) => (a + 1, b),
            Some(Player::Two) => (a, b + 1),
            None => (a, b),
        })
    }

    /// Every run of four slots: horizontal, vertical, then both diagonals
    pub fn windows(&self) -> Vec<[(usize, usize); RUN]> {
        let (rows, cols) = (self.rows, self.cols);
        let mut windows = Vec::new();
        for r in 0..rows {
            for c in 0..=cols - RUN {
                windows.push(std::array::from_fn(|i| (r, c + i)));
            }
        }
        for c in 0..cols {
            for r in 0..=rows - RUN {
                windows.push(std::array::from_fn(|i| (r + i, c)));
            }
        }
        for r in 0..=rows - RUN {
            for c in 0..=cols - RUN {
                windows.push(std::array::from_fn(|i| (r + i, c + i)));
                windows.push(std::array::from_fn(|i| (r + i, c + RUN - 1 - i)));
            }
        }
        windows
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            let line: Vec<String> = (0..self.cols)
                .map(|col| match self.get(row, col) {
                    Some(Player::One) => "X".to_string(),
                    Some(Player::Two) => "O".to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "|{}|", line.join(" "))?;
        }
        let footer: Vec<String> = (0..self.cols).map(|col| (col % 10).to_string()).collect();
        write!(f, " {} ", footer.join(" "))
    }
}

/// Grid plus the player to move
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectFourState {
    pub grid: Grid,
    pub to_move: Player,
}

impl ConnectFourState {
    pub fn new(rows: usize, cols: usize, to_move: Player) -> Self {
        ConnectFourState {
            grid: Grid::empty(rows, cols),
            to_move,
        }
    }

    /// Parse a position, inferring the player to move from the piece counts
    /// (player one moves first).
    ///
    /// # Errors
    ///
    /// Returns error if the grid does not parse or the counts are not equal
    /// or player one ahead by one.
    pub fn from_string(s: &str) -> Result<Self, Error> {
        let grid = Grid::from_string(s)?;
        let (first, second) = grid.piece_counts();
        let to_move = if first == second {
            Player::One
        } else if first == second + 1 {
            Player::Two
        } else {
            return Err(Error::InvalidPieceCounts { first, second });
        };
        Ok(ConnectFourState { grid, to_move })
    }
}

impl GameState for ConnectFourState {
    fn player_to_move(&self) -> Player {
        self.to_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_piece_stacks() {
        let grid = Grid::empty(6, 7);
        let grid = grid.drop_piece(3, Player::Two).unwrap();
        let grid = grid.drop_piece(3, Player::One).unwrap();
        assert_eq!(grid.get(0, 3), Some(Player::Two));
        assert_eq!(grid.get(1, 3), Some(Player::One));
        assert_eq!(grid.next_open_row(3), Some(2));
        assert_eq!(grid.piece_counts(), (1, 1));
    }

    #[test]
    fn test_full_column_is_closed() {
        let mut grid = Grid::empty(4, 4);
        for i in 0..4 {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            grid = grid.drop_piece(0, player).unwrap();
        }
        assert!(!grid.is_open(0));
        assert!(grid.is_open(1));
        assert!(!grid.is_open(4));
        assert!(grid.drop_piece(0, Player::One).is_none());
    }

    #[test]
    fn test_window_count() {
        // 6x7: 24 horizontal, 21 vertical, 24 diagonal
        assert_eq!(Grid::empty(6, 7).windows().len(), 69);
        assert_eq!(Grid::empty(4, 4).windows().len(), 10);
    }

    #[test]
    fn test_from_string_top_row_first() {
        let state = ConnectFourState::from_string(
            "....... / ....... / ....... / ....... / ...O... / ...X...",
        )
        .unwrap();
        assert_eq!(state.grid.rows(), 6);
        assert_eq!(state.grid.cols(), 7);
        assert_eq!(state.grid.get(0, 3), Some(Player::One));
        assert_eq!(state.grid.get(1, 3), Some(Player::Two));
        assert_eq!(state.to_move, Player::One);
    }

    #[test]
    fn test_from_string_rejects_floating_piece() {
        let result = Grid::from_string(".... / .X.. / .... / ....");
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_from_string_rejects_ragged_rows() {
        let result = Grid::from_string(".... / ... / .... / ....");
        assert!(matches!(result, Err(Error::InvalidBoardLength { .. })));
    }

    #[test]
    fn test_display() {
        let grid = Grid::empty(4, 4).drop_piece(1, Player::One).unwrap();
        let expected = "|. . . .|\n|. . . .|\n|. . . .|\n|. X . .|\n 0 1 2 3 ";
        assert_eq!(grid.to_string(), expected);
    }
}
