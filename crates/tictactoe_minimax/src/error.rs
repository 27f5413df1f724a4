//! Board conversion error types.

use derive_more::{Display, Error};

/// What went wrong while building a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// The grid is not exactly 3 rows of 3 cells.
    #[display("Invalid board dimensions: expected 3x3, got {rows}x{cols}")]
    InvalidDimensions {
        /// Number of rows supplied.
        rows: usize,
        /// Cell count of the first row that is not 3 wide, else of the
        /// first row (0 for an empty grid).
        cols: usize,
    },
}

/// Board error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// Error kind.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<BoardErrorKind> for BoardError {
    #[track_caller]
    fn from(kind: BoardErrorKind) -> Self {
        Self::new(kind)
    }
}
