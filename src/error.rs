//! Error types for the adversarial search crate

use thiserror::Error;

/// Main error type for the adversarial search crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("attempting to evaluate a non-terminal state: {state}")]
    NotTerminal { state: String },

    #[error("search exceeded the maximum supported depth of {limit} plies")]
    SearchDepthExceeded { limit: usize },

    #[error("invalid {game} dimension {got} (must be at least {min})")]
    InvalidDimension {
        game: &'static str,
        got: usize,
        min: usize,
    },

    #[error("adjacency matrix must be square: row {row} has {got} columns, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error(
        "GameDAG edges must go from lower index states to higher index states (to prevent cycles): found edge {from} -> {to}"
    )]
    CyclicEdge { from: usize, to: usize },

    #[error("terminal_evaluations must not be empty")]
    NoTerminalStates,

    #[error("state index {index} is out of range for a game with {states} states")]
    StateOutOfRange { index: usize, states: usize },

    #[error("GameDAG must be constant sum: state {index} sums to {got}, expected {expected}")]
    NotConstantSum {
        index: usize,
        got: f64,
        expected: f64,
    },

    #[error("state {index} is neither terminal nor has outgoing edges")]
    DeadEnd { index: usize },

    #[error("wrong board size: expected {expected}, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: first={first}, second={second} (must be equal or first ahead by 1)")]
    InvalidPieceCounts { first: usize, second: usize },

    #[error("non-terminal state has no available actions: {state}")]
    NoActionsAvailable { state: String },

    #[error("a human player needs a game UI to read moves from")]
    MissingUi,

    #[error("input closed while waiting for a move")]
    InputClosed,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
