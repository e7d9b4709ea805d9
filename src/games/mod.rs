//! Games implementing [`AdversarialSearchProblem`](crate::AdversarialSearchProblem)

pub mod connect4;
pub mod dag;
pub mod tictactoe;

pub use connect4::ConnectFour;
pub use dag::{DagState, GameDag};
pub use tictactoe::TicTacToe;
