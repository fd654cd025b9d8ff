use thiserror::Error;

/// Failures reported by board and move operations.
///
/// None of these are recovered from inside the engine; the caller decides
/// whether to reject the input, show a full board, or treat it as a bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A coordinate outside `[0, rows) x [0, cols)` was read or written.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A raw direction code or name did not match any of the four directions.
    #[error("invalid direction {0:?}")]
    InvalidDirection(String),

    /// The grid is too small (or ragged) to hold a game.
    #[error("invalid board dimensions {rows}x{cols}: both sides must be at least 2")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A spawn was requested on a board with no empty cell.
    #[error("no empty cell left for a new tile")]
    NoEmptyCell,
}

pub type Result<T> = std::result::Result<T, EngineError>;
