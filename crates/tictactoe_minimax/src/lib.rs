//! Tic-tac-toe board model and exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board model**: a flat 3x3 grid of [`Square`]s with winner and
//!   fullness queries plus conversion to and from the textual grid used on
//!   the wire.
//! - **Search**: [`apply_best_move`] places the optimal mark for a player by
//!   brute-force minimax over every remaining continuation.
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{apply_best_move, Board, Player, Position};
//!
//! # fn main() -> Result<(), tictactoe_minimax::BoardError> {
//! let mut board = Board::from_text(&[["X", "X", "_"], ["O", "O", "_"], ["_", "_", "_"]])?;
//! apply_best_move(&mut board, Some(Player::X));
//!
//! assert_eq!(board.winner(), Some(Player::X));
//! assert_eq!(board.get(Position::TopRight).player(), Some(Player::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod kani_support;
mod notation;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveScore};
pub use error::{BoardError, BoardErrorKind};
pub use notation::{EMPTY_CODE, TextGrid};
pub use position::Position;
pub use search::{apply_best_move, best_move, evaluate, score_moves};
pub use types::{Board, GameStatus, Player, Square};
