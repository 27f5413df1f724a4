//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated from board
//! storage so the search and the board can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
