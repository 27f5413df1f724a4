//! Conversion between boards and their textual forms.
//!
//! The wire form is a 3x3 grid of single-character cells: `"X"` and `"O"`
//! (case-insensitive) are marks, anything else is empty. Output always uses
//! the canonical codes `"X"`, `"O"` and [`EMPTY_CODE`].
//!
//! The compact form used on the command line is three rows joined by `/`,
//! e.g. `XX_/OO_/___`.

use super::{Board, BoardError, BoardErrorKind, Player, Position, Square};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Code for an empty square, and for "no winner".
pub const EMPTY_CODE: &str = "_";

/// Owned textual grid, rows of cell codes.
pub type TextGrid = Vec<Vec<String>>;

impl Square {
    /// Parses a cell code. Unrecognized codes are empty.
    pub fn from_code(code: &str) -> Self {
        Player::from_code(code).into()
    }

    /// Canonical cell code.
    pub fn code(self) -> &'static str {
        self.player().map_or(EMPTY_CODE, Player::code)
    }
}

/// Checks the grid is 3 rows of 3 cells, reporting the shape otherwise.
fn check_dims(row_lens: &[usize]) -> Result<(), BoardError> {
    let bad_row = row_lens.iter().copied().find(|&len| len != 3);
    if row_lens.len() == 3 && bad_row.is_none() {
        return Ok(());
    }

    let cols = bad_row.or(row_lens.first().copied()).unwrap_or(0);
    debug!(rows = row_lens.len(), cols, "Rejecting malformed grid");
    Err(BoardError::new(BoardErrorKind::InvalidDimensions {
        rows: row_lens.len(),
        cols,
    }))
}

impl Board {
    /// Builds a board from a textual grid.
    ///
    /// Accepts anything shaped like rows of string cells, e.g.
    /// `&[["X", "_", "o"], ...]` or `&Vec<Vec<String>>`.
    ///
    /// # Errors
    ///
    /// [`BoardErrorKind::InvalidDimensions`] unless the grid is exactly
    /// 3 rows of exactly 3 cells.
    #[instrument(skip(grid))]
    pub fn from_text<R, S>(grid: &[R]) -> Result<Self, BoardError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let lens: Vec<usize> = grid.iter().map(|row| row.as_ref().len()).collect();
        check_dims(&lens)?;

        let mut board = Board::new();
        for (row, cells) in grid.iter().enumerate() {
            for (col, code) in cells.as_ref().iter().enumerate() {
                if let Some(pos) = Position::from_row_col(row, col) {
                    board.set(pos, Square::from_code(code.as_ref()));
                }
            }
        }
        Ok(board)
    }

    /// Renders the board as a textual grid using canonical codes.
    pub fn to_text(&self) -> TextGrid {
        self.squares()
            .chunks(3)
            .map(|row| row.iter().map(|sq| sq.code().to_string()).collect())
            .collect()
    }

    /// Renders the board in compact notation, e.g. `XX_/OO_/___`.
    pub fn to_compact(&self) -> String {
        self.squares()
            .chunks(3)
            .map(|row| row.iter().map(|sq| sq.code()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses compact notation: three rows of three characters joined by `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid: Vec<Vec<String>> = s
            .trim()
            .split('/')
            .map(|row| row.chars().map(String::from).collect())
            .collect();
        Board::from_text(&grid)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.squares().chunks(3).enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let codes: Vec<&str> = row.iter().map(|sq| sq.code()).collect();
            write!(f, "{}", codes.join("|"))?;
        }
        Ok(())
    }
}
