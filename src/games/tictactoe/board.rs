//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, GameState, Player};

/// A cell on the tic-tac-toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Mark placed by a player; player one plays X
    pub fn for_player(player: Player) -> Cell {
        match player {
            Player::One => Cell::X,
            Player::Two => Cell::O,
        }
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::One),
            Cell::O => Some(Player::Two),
            Cell::Empty => None,
        }
    }
}

/// A board location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    dim: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `dim x dim` board
    pub fn empty(dim: usize) -> Self {
        Board {
            dim,
            cells: vec![Cell::Empty; dim * dim],
        }
    }

    /// Parse a board from its cells in row-major order.
    ///
    /// Whitespace, `|` and `/` are ignored, so `"X.O/.X./..O"` and a
    /// multi-line grid both parse. The number of cells must be a perfect
    /// square of at least 9.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not a square of at least 9 or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        let dim = chars.len().isqrt();
        if dim < 3 || dim * dim != chars.len() {
            let expected = (dim.max(3)..).map(|d| d * d).find(|&n| n >= chars.len());
            return Err(Error::InvalidBoardLength {
                expected: expected.unwrap_or(9),
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = Vec::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            cells.push(
                Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?,
            );
        }

        Ok(Board { dim, cells })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get cell at a row-major index
    pub fn cell(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// Get cell at a position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Check if a position is on the board and empty
    pub fn is_open(&self, pos: Position) -> bool {
        pos.row < self.dim && pos.col < self.dim && self.get(pos) == Cell::Empty
    }

    /// All empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Position::new(i / self.dim, i % self.dim))
            .collect()
    }

    /// Pieces of each player on the board, as `(first, second)`
    pub fn piece_counts(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(x, o), cell| match cell {
                Cell::X => (x + 1, o),
                Cell::O => (x, o + 1),
                Cell::Empty => (x, o),
            })
    }

    /// Copy of the board with `cell` placed at `pos`
    #[must_use = "with_cell returns a new board and leaves this one as is"]
    pub fn with_cell(&self, pos: Position, cell: Cell) -> Board {
        let mut next = self.clone();
        let idx = self.index(pos);
        next.cells[idx] = cell;
        next
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.dim + pos.col
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}+", "-".repeat(2 * self.dim - 1));
        writeln!(f, "{border}")?;
        for row in self.cells.chunks(self.dim) {
            let line: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            writeln!(f, "|{}|", line.join(" "))?;
        }
        write!(f, "{border}")
    }
}

/// Board plus the player to move
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeState {
    pub board: Board,
    pub to_move: Player,
}

impl TicTacToeState {
    /// Empty board with X to move
    pub fn new(dim: usize) -> Self {
        TicTacToeState {
            board: Board::empty(dim),
            to_move: Player::One,
        }
    }

    /// Parse a position, inferring the player to move from the piece counts
    /// (X moves first).
    ///
    /// # Errors
    ///
    /// Returns error if the board does not parse or the counts are not equal
    /// or X ahead by one.
    pub fn from_string(s: &str) -> Result<Self, Error> {
        let board = Board::from_string(s)?;
        let (x, o) = board.piece_counts();
        let to_move = if x == o {
            Player::One
        } else if x == o + 1 {
            Player::Two
        } else {
            return Err(Error::InvalidPieceCounts {
                first: x,
                second: o,
            });
        };
        Ok(TicTacToeState { board, to_move })
    }
}

impl GameState for TicTacToeState {
    fn player_to_move(&self) -> Player {
        self.to_move
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let state = TicTacToeState::new(3);
        assert_eq!(state.to_move, Player::One);
        assert_eq!(state.board.empty_positions().len(), 9);
        assert_eq!(state.board.empty_positions()[4], Position::new(1, 1));
    }

    #[test]
    fn test_from_string() {
        let state = TicTacToeState::from_string("X.O/.X./...").unwrap();
        assert_eq!(state.board.dim(), 3);
        assert_eq!(state.to_move, Player::Two);
        assert_eq!(state.board.get(Position::new(0, 2)), Cell::O);
        assert_eq!(state.board.piece_counts(), (2, 1));
    }

    #[test]
    fn test_from_string_four_by_four() {
        let state = TicTacToeState::from_string("X... .O.. .... ....").unwrap();
        assert_eq!(state.board.dim(), 4);
        assert_eq!(state.to_move, Player::One);
    }

    #[test]
    fn test_from_string_rejects_bad_length() {
        assert!(matches!(
            Board::from_string("X.O.X"),
            Err(Error::InvalidBoardLength {
                expected: 9,
                got: 5,
                ..
            })
        ));
        assert!(matches!(
            Board::from_string("XXXXXXXXXX"),
            Err(Error::InvalidBoardLength {
                expected: 16,
                got: 10,
                ..
            })
        ));
    }

    #[test]
    fn test_from_string_rejects_bad_character() {
        assert!(matches!(
            Board::from_string("X.O.?...."),
            Err(Error::InvalidCellCharacter {
                character: '?',
                position: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_from_string_rejects_bad_counts() {
        assert!(matches!(
            TicTacToeState::from_string("XXX......"),
            Err(Error::InvalidPieceCounts {
                first: 3,
                second: 0
            })
        ));
    }

    #[test]
    fn test_is_open() {
        let board = Board::from_string("X........").unwrap();
        assert!(!board.is_open(Position::new(0, 0)));
        assert!(board.is_open(Position::new(2, 2)));
        assert!(!board.is_open(Position::new(3, 0)));
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("X.O.X...O").unwrap();
        let expected = "+-----+\n|X . O|\n|. X .|\n|. . O|\n+-----+";
        assert_eq!(board.to_string(), expected);
    }
}
