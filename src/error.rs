//! Errors raised while reading a game description.

use thiserror::Error;

/// Setup failures. Any of these aborts the run before the first tick.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("invalid integer for {field}: {token:?}")]
    InvalidInteger { field: &'static str, token: String },

    #[error("negative count for {field}: {value}")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("invalid board size {size}: must be between 1 and {max}")]
    InvalidBoardSize { size: i64, max: i32 },

    #[error("{entity} position ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds {
        entity: &'static str,
        x: i32,
        y: i32,
        size: i32,
    },

    #[error("too many {field}: {count} exceeds limit {limit}")]
    LimitExceeded {
        field: &'static str,
        count: usize,
        limit: usize,
    },

    #[error("Invalid path: {token:?}")]
    InvalidMove { token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SetupError>;
